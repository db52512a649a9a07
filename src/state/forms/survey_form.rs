//! Survey form state and submission payload

use super::field::FormField;
use serde::{Deserialize, Serialize};

/// Option set for the service-quality question
pub const QUALITY_OPTIONS: &[&str] = &["Excellent", "Good", "Fair", "Poor"];

/// Option set for the favorite-aspect question
pub const HIGHLIGHT_OPTIONS: &[&str] = &["Design", "Functionality", "Speed", "Ease of use"];

/// Index of the submit button row in the focus cycle
pub const SUBMIT_ROW: usize = 5;

/// Identifies one of the five answer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyField {
    FirstName,
    LastName,
    Question1,
    Question2,
    Question3,
}

/// Snapshot of the answers sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub question1: String,
    pub question2: String,
    pub question3: String,
}

/// The survey form: identity section plus three questions
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub question1: FormField,
    pub question2: FormField,
    pub question3: FormField,
    pub active_field_index: usize,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First name", false),
            last_name: FormField::text("last_name", "Last name", false),
            question1: FormField::choice(
                "question1",
                "1. How would you rate the quality of service?",
                QUALITY_OPTIONS,
            ),
            question2: FormField::choice(
                "question2",
                "2. What did you like most?",
                HIGHLIGHT_OPTIONS,
            ),
            question3: FormField::text("question3", "3. Additional comments or suggestions", true),
            active_field_index: 0,
        }
    }

    /// Number of focus stops (five fields plus the submit row)
    pub fn field_count(&self) -> usize {
        6
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Move focus to the next field (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.question1),
            3 => Some(&self.question2),
            4 => Some(&self.question3),
            // Index 5 is the submit row, no FormField for it
            _ => None,
        }
    }

    /// The field that currently has focus (None on the submit row)
    pub fn active_field(&self) -> Option<&FormField> {
        self.get_field(self.active_field_index)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.question1),
            3 => Some(&mut self.question2),
            4 => Some(&mut self.question3),
            _ => None,
        }
    }

    /// Replace a single field's value, leaving the others unchanged.
    ///
    /// No validation happens here; empty or partial values are fine while
    /// the user is still editing.
    pub fn set_field(&mut self, field: SurveyField, value: &str) {
        self.field_mut(field).set_text(value);
    }

    /// Read a single field's value
    pub fn field_value(&self, field: SurveyField) -> &str {
        match field {
            SurveyField::FirstName => self.first_name.as_text(),
            SurveyField::LastName => self.last_name.as_text(),
            SurveyField::Question1 => self.question1.as_text(),
            SurveyField::Question2 => self.question2.as_text(),
            SurveyField::Question3 => self.question3.as_text(),
        }
    }

    fn field_mut(&mut self, field: SurveyField) -> &mut FormField {
        match field {
            SurveyField::FirstName => &mut self.first_name,
            SurveyField::LastName => &mut self.last_name,
            SurveyField::Question1 => &mut self.question1,
            SurveyField::Question2 => &mut self.question2,
            SurveyField::Question3 => &mut self.question3,
        }
    }

    /// Guard 1: both identity fields are filled in
    pub fn identity_complete(&self) -> bool {
        self.first_name.is_answered() && self.last_name.is_answered()
    }

    /// Guard 2: all three questions are answered
    pub fn answers_complete(&self) -> bool {
        self.question1.is_answered()
            && self.question2.is_answered()
            && self.question3.is_answered()
    }

    /// Snapshot the current answers for the wire
    pub fn to_submission(&self) -> Submission {
        Submission {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            question1: self.question1.as_text().to_string(),
            question2: self.question2.as_text().to_string(),
            question3: self.question3.as_text().to_string(),
        }
    }

    /// Clear all answers and return focus to the first field
    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.question1.clear();
        self.question2.clear();
        self.question3.clear();
        self.active_field_index = 0;
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}
