//! Application state definitions

use crate::notify::ToastStack;
use crate::state::SurveyForm;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The survey form being edited
    pub form: SurveyForm,
    /// True while a submission is in flight; the submit control is
    /// disabled for the duration
    pub is_submitting: bool,
    /// Live notifications
    pub toasts: ToastStack,
}

impl AppState {
    /// Whether the submit control accepts input
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting
    }
}
