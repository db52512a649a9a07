//! Trait abstraction for the survey backend to enable mocking in tests

use crate::api::{ApiError, SubmitReceipt};
use crate::state::Submission;
use async_trait::async_trait;

/// Backend operations the form depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyApi: Send + Sync {
    /// Post a completed survey and wait for the backend's verdict
    async fn submit_survey(&self, submission: &Submission) -> Result<SubmitReceipt, ApiError>;
}
