//! Form domain layer
//!
//! Type-safe state for the survey form: field value objects and the
//! form struct with its focus cycle and validation guards.

mod field;
mod survey_form;

pub use field::{FieldValue, FormField};
pub use survey_form::{
    Submission, SurveyField, SurveyForm, HIGHLIGHT_OPTIONS, QUALITY_OPTIONS, SUBMIT_ROW,
};
