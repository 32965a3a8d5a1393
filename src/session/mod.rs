pub mod clock;
pub mod types;

use std::sync::Arc;

pub use clock::{Clock, FixedClock, SystemClock};
pub use types::{
    ConfirmRejected, ConfirmState, PendingSubmission, SaveOutcome, SubmissionOutcome,
};

use crate::{
    catalog::{Catalog, CategoryFilter, Feature},
    contact::ContactInfo,
    notify::{Notification, NotificationSink},
    selection::SelectionState,
    submission::{SubmissionGateway, build_payload},
    view::{self, Aggregate},
};

/// One user's pass through the order form.
///
/// Owns every piece of mutable form state. Derived views (`visible_features`, `aggregate`)
/// are recomputed from that state on each call. Confirming is split into `begin_confirm` /
/// `finish_confirm` so the network call can run while the form keeps accepting edits.
pub struct OrderSession {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    contact: ContactInfo,
    requirements: String,
    filter: CategoryFilter,
    confirm_state: ConfirmState,
    last_outcome: Option<SubmissionOutcome>,
    gateway: Arc<dyn SubmissionGateway>,
    notifications: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

impl OrderSession {
    pub fn new(
        catalog: Arc<Catalog>,
        gateway: Arc<dyn SubmissionGateway>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            contact: ContactInfo::default(),
            requirements: String::new(),
            filter: CategoryFilter::All,
            confirm_state: ConfirmState::Idle,
            last_outcome: None,
            gateway,
            notifications,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn gateway(&self) -> Arc<dyn SubmissionGateway> {
        Arc::clone(&self.gateway)
    }

    pub fn toggle_feature(&mut self, id: &str) -> bool {
        self.selection.toggle(&self.catalog, id)
    }

    pub fn set_comment(&mut self, id: &str, text: impl Into<String>) {
        self.selection.set_comment(&self.catalog, id, text);
    }

    pub fn toggle_comment_input(&mut self, id: &str) -> bool {
        self.selection.toggle_comment_visibility(&self.catalog, id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.contact.set_name(name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.contact.set_email(email);
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.contact.set_company(company);
    }

    pub fn set_requirements(&mut self, requirements: impl Into<String>) {
        self.requirements = requirements.into();
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        self.catalog.categories()
    }

    pub fn visible_features(&self) -> Vec<&Feature> {
        view::filter(&self.catalog, &self.filter)
    }

    pub fn aggregate(&self) -> Aggregate<'_> {
        view::aggregate(&self.catalog, &self.selection)
    }

    /// Validates the contact email and reports the result. Nothing is persisted here.
    pub fn save_estimate(&self) -> SaveOutcome {
        if !self.contact.has_email() {
            tracing::info!(target: "session", "save_estimate_missing_email");
            self.notifications.notify(Notification::email_required());
            return SaveOutcome::EmailRequired;
        }

        tracing::info!(
            target: "session",
            selected = self.selection.selected_count(),
            "save_estimate_accepted"
        );
        self.notifications.notify(Notification::estimate_saved());
        SaveOutcome::Saved
    }

    pub fn confirm_state(&self) -> ConfirmState {
        self.confirm_state
    }

    pub fn can_confirm(&self) -> bool {
        self.confirm_state == ConfirmState::Idle
    }

    /// Terminal state of the most recent completed submission.
    pub fn last_outcome(&self) -> Option<SubmissionOutcome> {
        self.last_outcome
    }

    /// Validates the selection, snapshots the payload and enters `Submitting`.
    /// The returned submission must be handed back through `finish_confirm`.
    pub fn begin_confirm(&mut self) -> Result<PendingSubmission, ConfirmRejected> {
        if self.confirm_state == ConfirmState::Submitting {
            tracing::debug!(target: "session", "confirm_ignored_while_submitting");
            return Err(ConfirmRejected::AlreadySubmitting);
        }

        if self.selection.is_empty() {
            tracing::info!(target: "session", "confirm_rejected_empty_selection");
            self.notifications.notify(Notification::no_features_selected());
            return Err(ConfirmRejected::NoFeaturesSelected);
        }

        let payload = build_payload(
            &self.catalog,
            &self.selection,
            &self.contact,
            &self.requirements,
            self.clock.now(),
        );
        tracing::info!(
            target: "session",
            timestamp = %payload.timestamp,
            selected = payload.summary.total_selected_features,
            total_cost = payload.summary.total_cost,
            "confirm_submitting"
        );
        self.confirm_state = ConfirmState::Submitting;
        Ok(PendingSubmission::new(payload))
    }

    /// Surfaces the outcome and returns to `Idle`. Form state is left as it is.
    pub fn finish_confirm(&mut self, outcome: SubmissionOutcome) -> SubmissionOutcome {
        if self.confirm_state != ConfirmState::Submitting {
            tracing::warn!(target: "session", outcome = ?outcome, "confirm_finished_without_begin");
        }

        let notification = match outcome {
            SubmissionOutcome::Succeeded => Notification::selection_confirmed(),
            SubmissionOutcome::Failed => Notification::submission_failed(),
        };
        self.notifications.notify(notification);
        self.last_outcome = Some(outcome);
        self.confirm_state = ConfirmState::Idle;

        tracing::info!(target: "session", outcome = ?outcome, "confirm_finished");
        outcome
    }

    pub async fn confirm_selection(&mut self) -> Result<SubmissionOutcome, ConfirmRejected> {
        let pending = self.begin_confirm()?;
        let gateway = Arc::clone(&self.gateway);
        let outcome = pending.send(gateway.as_ref()).await;
        Ok(self.finish_confirm(outcome))
    }
}
