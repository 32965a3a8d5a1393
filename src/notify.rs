use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    pub fn email_required() -> Self {
        Self::new(
            "Email Required",
            "Please provide your email to save the estimate.",
            Severity::Destructive,
        )
    }

    pub fn estimate_saved() -> Self {
        Self::new(
            "Estimate Saved!",
            "Your feature selection has been saved and will be sent to your email.",
            Severity::Normal,
        )
    }

    pub fn no_features_selected() -> Self {
        Self::new(
            "No Features Selected",
            "Please select at least one feature to continue.",
            Severity::Destructive,
        )
    }

    pub fn selection_confirmed() -> Self {
        Self::new(
            "Selection Confirmed!",
            "Your requirements have been packaged and sent successfully",
            Severity::Normal,
        )
    }

    pub fn submission_failed() -> Self {
        Self::new(
            "Submission Failed",
            "There was an error sending your selection. Please try again.",
            Severity::Destructive,
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Buffers notifications until a renderer drains them.
#[derive(Default, Clone)]
pub struct CollectingNotificationSink {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl CollectingNotificationSink {
    pub fn drain(&self) -> Vec<Notification> {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl NotificationSink for CollectingNotificationSink {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            target: "notify",
            title = %notification.title,
            severity = ?notification.severity,
            "notification_emitted"
        );
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}
