//! Backend client module for survey submission

mod client;
mod error;
mod traits;

pub use client::{HttpClient, SubmitReceipt};
pub use error::ApiError;
pub use traits::SurveyApi;

#[cfg(test)]
pub use traits::MockSurveyApi;
