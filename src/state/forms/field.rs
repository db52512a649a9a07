//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new single-choice field over a fixed option set
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
        }
    }

    /// Get the text value (the selected option label for choice fields,
    /// empty while nothing is selected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected.map(|i| options[i]).unwrap_or(""),
        }
    }

    /// Whether the field holds a non-empty answer
    pub fn is_answered(&self) -> bool {
        !self.as_text().is_empty()
    }

    /// Replace the field value with a new string.
    ///
    /// For choice fields the string is matched against the option set: an
    /// empty string clears the selection, a non-member leaves the field
    /// untouched so a stored answer is always a member of the set.
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.clear();
                s.push_str(value);
            }
            FieldValue::Choice { options, selected } => {
                if value.is_empty() {
                    *selected = None;
                } else if let Some(i) = options.iter().position(|o| *o == value) {
                    *selected = Some(i);
                }
            }
        }
    }

    /// Push a character to the field value.
    ///
    /// Choice fields accept a digit as a direct option pick (1-based).
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice { options, selected } => {
                if let Some(d) = c.to_digit(10) {
                    let idx = d as usize;
                    if (1..=options.len()).contains(&idx) {
                        *selected = Some(idx - 1);
                    }
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { .. } => {
                // Choice fields are cleared as a whole, not per character
            }
        }
    }

    /// Select the next option (wraps; a first press selects the first option)
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = Some(match selected {
                Some(i) => (*i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Select the previous option (wraps; a first press selects the last option)
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = Some(match selected {
                Some(0) | None => options.len() - 1,
                Some(i) => *i - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.as_text().to_string()
    }
}
