//! Error types for the survey backend client

use thiserror::Error;

/// Everything that can go wrong between "guards passed" and "outcome known".
///
/// The UI collapses all of these into one retry-later notification; the
/// variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no endpoint mapped for action '{0}'")]
    UnknownAction(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unreadable response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("submission rejected: {0}")]
    Rejected(String),
}
