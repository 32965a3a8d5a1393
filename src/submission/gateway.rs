use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing_error::SpanTrace;

use crate::submission::{
    error::{self, SubmissionError, SubmissionErrorKind},
    types::{OrderPayload, SubmissionConfig},
};

/// Outbound side of the form. Implementations deliver one payload per call and never retry;
/// callers that want retries wrap the gateway.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, payload: &OrderPayload) -> Result<(), SubmissionError>;
}

/// Delivers `payload` and reduces the result to success/failure, logging any failure.
pub async fn deliver(gateway: &dyn SubmissionGateway, payload: &OrderPayload) -> bool {
    match gateway.submit(payload).await {
        Ok(()) => {
            tracing::info!(
                target: "submission",
                selected = payload.summary.total_selected_features,
                total_cost = payload.summary.total_cost,
                "submission_delivered"
            );
            true
        }
        Err(err) => {
            tracing::warn!(
                target: "submission",
                kind = ?err.kind,
                http_status = ?err.http_status,
                error = %err,
                span_trace = %SpanTrace::capture(),
                "submission_failed"
            );
            false
        }
    }
}

#[derive(Clone)]
pub struct HttpSubmissionGateway {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpSubmissionGateway {
    pub fn new(config: &SubmissionConfig) -> Result<Self, SubmissionError> {
        let endpoint = Url::parse(config.endpoint.trim()).map_err(|err| {
            error::invalid_config(format!(
                "submission endpoint '{}' is not a valid url: {}",
                config.endpoint, err
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(error::invalid_config(format!(
                "submission endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }
        if config.timeout_ms == 0 {
            return Err(error::invalid_config("submission timeout_ms must be positive"));
        }

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| error::internal_error(format!("failed to build http client: {}", err)))?;

        Ok(Self {
            client,
            endpoint,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    #[tracing::instrument(
        name = "submission_post",
        target = "submission",
        skip(self, payload),
        fields(endpoint = %self.endpoint, selected = payload.summary.total_selected_features)
    )]
    async fn submit(&self, payload: &OrderPayload) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    SubmissionError::new(
                        SubmissionErrorKind::Timeout,
                        format!("submission request timed out: {}", err),
                    )
                } else {
                    SubmissionError::new(
                        SubmissionErrorKind::Transport,
                        format!("submission request failed: {}", err),
                    )
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::map_http_error(status.as_u16(), &body));
        }

        tracing::debug!(target: "submission", status = status.as_u16(), "submission_accepted");
        Ok(())
    }
}
