use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionErrorKind {
    InvalidConfig,
    Transport,
    Timeout,
    HttpStatus,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionError {
    pub kind: SubmissionErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
}

impl SubmissionError {
    pub fn new(kind: SubmissionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "{} (status={})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SubmissionError {}

pub fn invalid_config(message: impl Into<String>) -> SubmissionError {
    SubmissionError::new(SubmissionErrorKind::InvalidConfig, message)
}

pub fn internal_error(message: impl Into<String>) -> SubmissionError {
    SubmissionError::new(SubmissionErrorKind::Internal, message)
}

pub fn map_http_error(status: u16, body: &str) -> SubmissionError {
    let normalized_body = body.chars().take(240).collect::<String>();
    let mut err = SubmissionError::new(
        SubmissionErrorKind::HttpStatus,
        format!("submission endpoint returned status {}", status),
    )
    .with_http_status(status);

    if !normalized_body.is_empty() {
        err.message = format!("{}: {}", err.message, normalized_body);
    }

    err
}
