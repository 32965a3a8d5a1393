use std::fmt;

use crate::submission::{OrderPayload, SubmissionGateway, deliver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRejected {
    NoFeaturesSelected,
    AlreadySubmitting,
}

impl fmt::Display for ConfirmRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmRejected::NoFeaturesSelected => write!(f, "no features selected"),
            ConfirmRejected::AlreadySubmitting => write!(f, "a submission is already in flight"),
        }
    }
}

impl std::error::Error for ConfirmRejected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    EmailRequired,
}

/// Payload snapshotted when a confirm started. Later edits to the session do not reach it.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    payload: OrderPayload,
}

impl PendingSubmission {
    pub(crate) fn new(payload: OrderPayload) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &OrderPayload {
        &self.payload
    }

    pub async fn send(self, gateway: &dyn SubmissionGateway) -> SubmissionOutcome {
        if deliver(gateway, &self.payload).await {
            SubmissionOutcome::Succeeded
        } else {
            SubmissionOutcome::Failed
        }
    }
}
