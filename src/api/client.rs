//! HTTP client for the survey backend
//!
//! Speaks the backend's JSON contract: POST the answers, read back an
//! envelope with a boolean `success` flag plus an optional `error` or
//! `message` string.

use crate::api::{ApiError, SurveyApi};
use crate::config::TuiConfig;
use crate::endpoints::{Action, Endpoints};
use crate::state::Submission;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Timeout applied to submission requests unless configured otherwise
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Wire shape of a backend reply
#[derive(Debug, Clone, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Acknowledgement for an accepted submission
#[derive(Debug, Clone, Default)]
pub struct SubmitReceipt {
    pub message: Option<String>,
}

/// Client for the survey submission backend
pub struct HttpClient {
    client: Client,
    endpoints: Endpoints,
}

impl HttpClient {
    /// Build a client from the user configuration
    pub fn new(config: &TuiConfig) -> Result<Self, ApiError> {
        let timeout = config
            .request_timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self {
            client,
            endpoints: Endpoints::from_config(config),
        })
    }
}

#[async_trait]
impl SurveyApi for HttpClient {
    async fn submit_survey(&self, submission: &Submission) -> Result<SubmitReceipt, ApiError> {
        let url = self.endpoints.resolve(Action::SendEmail)?;
        tracing::debug!(%url, "posting survey answers");

        let response = self.client.post(&url).json(submission).send().await?;
        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Map HTTP status plus response body onto the submission outcome.
///
/// Non-2xx status and an explicit `success: false` are both failures; the
/// caller does not distinguish between them.
fn interpret_response(status: StatusCode, body: &str) -> Result<SubmitReceipt, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }

    let reply: SubmitResponse = serde_json::from_str(body)?;
    if reply.success {
        Ok(SubmitReceipt {
            message: reply.message,
        })
    } else {
        Err(ApiError::Rejected(
            reply
                .error
                .unwrap_or_else(|| "unspecified error".to_string()),
        ))
    }
}
