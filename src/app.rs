//! Application state and core logic

use crate::api::SurveyApi;
use crate::notify::{Notifier, Severity};
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the submission backend
    api: Box<dyn SurveyApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Box<dyn SurveyApi>) -> Self {
        Self {
            state: AppState::default(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based UI state (toast expiry)
    pub fn tick(&mut self) {
        self.state.toasts.tick();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                if self.state.submit_enabled() {
                    self.submit().await;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.select_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.select_next();
                }
            }
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    if self.state.submit_enabled() {
                        self.submit().await;
                    }
                } else if self
                    .state
                    .form
                    .active_field()
                    .is_some_and(|f| f.is_multiline)
                {
                    // Enter in the comments field adds a newline
                    if let Some(field) = self.state.form.active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the submission flow for the current form.
    ///
    /// Both guards run on every call, before any I/O. The busy flag wraps
    /// only the network call and is cleared on every exit path; on success
    /// the answers reset, on failure they stay as the user typed them.
    pub async fn submit(&mut self) {
        if !self.state.form.identity_complete() {
            self.state.toasts.notify(
                "Error",
                "please fill in first and last name",
                Severity::Destructive,
            );
            return;
        }
        if !self.state.form.answers_complete() {
            self.state
                .toasts
                .notify("Error", "please answer all questions", Severity::Destructive);
            return;
        }

        self.state.is_submitting = true;
        let submission = self.state.form.to_submission();
        match self.api.submit_survey(&submission).await {
            Ok(_) => {
                self.state
                    .toasts
                    .notify("Success", "answers submitted", Severity::Default);
                self.state.form.reset();
            }
            Err(err) => {
                tracing::warn!("survey submission failed: {err}");
                self.state.toasts.notify(
                    "Error",
                    "could not submit, try again later",
                    Severity::Destructive,
                );
            }
        }
        self.state.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockSurveyApi, SubmitReceipt};
    use crate::state::SurveyField;
    use reqwest::StatusCode;

    fn fill_identity(app: &mut App) {
        app.state.form.set_field(SurveyField::FirstName, "Ada");
        app.state.form.set_field(SurveyField::LastName, "Lovelace");
    }

    fn fill_answers(app: &mut App) {
        app.state.form.set_field(SurveyField::Question1, "Good");
        app.state.form.set_field(SurveyField::Question2, "Speed");
        app.state
            .form
            .set_field(SurveyField::Question3, "works well");
    }

    fn app_with(api: MockSurveyApi) -> App {
        App::new(Box::new(api))
    }

    fn no_call_api() -> MockSurveyApi {
        let mut api = MockSurveyApi::new();
        api.expect_submit_survey().times(0);
        api
    }

    #[tokio::test]
    async fn test_submit_with_empty_identity_notifies_and_skips_network() {
        let mut app = app_with(no_call_api());
        fill_answers(&mut app);

        app.submit().await;

        let toasts = app.state.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Error");
        assert_eq!(toasts[0].description, "please fill in first and last name");
        assert_eq!(toasts[0].severity, Severity::Destructive);
        assert!(!app.state.is_submitting);
    }

    #[tokio::test]
    async fn test_submit_with_missing_answers_notifies_and_skips_network() {
        let mut app = app_with(no_call_api());
        fill_identity(&mut app);
        app.state.form.set_field(SurveyField::Question1, "Good");

        app.submit().await;

        let toasts = app.state.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "please answer all questions");
        assert_eq!(toasts[0].severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn test_guards_run_on_every_submit() {
        let mut app = app_with(no_call_api());

        app.submit().await;
        fill_identity(&mut app);
        app.submit().await;

        let descriptions: Vec<_> = app
            .state
            .toasts
            .visible()
            .iter()
            .map(|t| t.description.clone())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "please fill in first and last name",
                "please answer all questions"
            ]
        );
    }

    #[tokio::test]
    async fn test_successful_submit_resets_answers() {
        let mut api = MockSurveyApi::new();
        api.expect_submit_survey()
            .withf(|s| {
                s.first_name == "Ada"
                    && s.last_name == "Lovelace"
                    && s.question1 == "Good"
                    && s.question2 == "Speed"
                    && s.question3 == "works well"
            })
            .times(1)
            .returning(|_| Ok(SubmitReceipt::default()));
        let mut app = app_with(api);
        fill_identity(&mut app);
        fill_answers(&mut app);

        app.submit().await;

        let toasts = app.state.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Success");
        assert_eq!(toasts[0].description, "answers submitted");
        assert_eq!(toasts[0].severity, Severity::Default);
        assert_eq!(app.state.form.field_value(SurveyField::FirstName), "");
        assert_eq!(app.state.form.field_value(SurveyField::LastName), "");
        assert_eq!(app.state.form.field_value(SurveyField::Question1), "");
        assert_eq!(app.state.form.field_value(SurveyField::Question2), "");
        assert_eq!(app.state.form.field_value(SurveyField::Question3), "");
        assert!(!app.state.is_submitting);
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_answers() {
        let mut api = MockSurveyApi::new();
        api.expect_submit_survey()
            .times(1)
            .returning(|_| Err(ApiError::Rejected("smtp unavailable".to_string())));
        let mut app = app_with(api);
        fill_identity(&mut app);
        fill_answers(&mut app);

        app.submit().await;

        let toasts = app.state.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "could not submit, try again later");
        assert_eq!(toasts[0].severity, Severity::Destructive);
        assert_eq!(app.state.form.field_value(SurveyField::FirstName), "Ada");
        assert_eq!(app.state.form.field_value(SurveyField::Question3), "works well");
        assert!(!app.state.is_submitting);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_answers_and_clears_busy() {
        let mut api = MockSurveyApi::new();
        api.expect_submit_survey()
            .times(1)
            .returning(|_| Err(ApiError::Status(StatusCode::BAD_GATEWAY)));
        let mut app = app_with(api);
        fill_identity(&mut app);
        fill_answers(&mut app);

        app.submit().await;

        let toasts = app.state.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "could not submit, try again later");
        assert_eq!(app.state.form.field_value(SurveyField::Question2), "Speed");
        assert!(!app.state.is_submitting);
    }

    #[tokio::test]
    async fn test_submit_shortcut_is_ignored_while_busy() {
        let mut app = app_with(no_call_api());
        fill_identity(&mut app);
        fill_answers(&mut app);
        app.state.is_submitting = true;

        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            crate::platform::SUBMIT_MODIFIER,
        ))
        .await
        .unwrap();

        assert!(app.state.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_enter_on_submit_row_submits() {
        let mut api = MockSurveyApi::new();
        api.expect_submit_survey()
            .times(1)
            .returning(|_| Ok(SubmitReceipt::default()));
        let mut app = app_with(api);
        fill_identity(&mut app);
        fill_answers(&mut app);
        app.state.form.active_field_index = crate::state::SUBMIT_ROW;

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .unwrap();

        assert_eq!(app.state.toasts.visible()[0].title, "Success");
    }

    #[tokio::test]
    async fn test_typing_appends_to_active_field() {
        let mut app = app_with(MockSurveyApi::new());

        for (code, modifiers) in [
            (KeyCode::Char('a'), KeyModifiers::SHIFT),
            (KeyCode::Char('d'), KeyModifiers::NONE),
            (KeyCode::Char('a'), KeyModifiers::NONE),
        ] {
            app.handle_key(KeyEvent::new(code, modifiers)).await.unwrap();
        }
        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
            .await
            .unwrap();

        assert_eq!(app.state.form.field_value(SurveyField::FirstName), "Ad");
    }

    #[tokio::test]
    async fn test_arrow_keys_cycle_choice_options() {
        let mut app = app_with(MockSurveyApi::new());
        app.state.form.active_field_index = 2; // question1

        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
            .await
            .unwrap();
        assert_eq!(
            app.state.form.field_value(SurveyField::Question1),
            "Excellent"
        );

        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))
            .await
            .unwrap();
        assert_eq!(app.state.form.field_value(SurveyField::Question1), "Poor");
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = app_with(MockSurveyApi::new());
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .await
            .unwrap();
        assert!(app.should_quit());
    }
}
