//! Maps logical backend actions to network addresses
//!
//! The form never hardcodes a URL; it asks for an action by its stable id
//! and the resolver combines the route table with the configured base
//! address. Unknown ids fail with a typed error.

use crate::api::ApiError;
use crate::config::TuiConfig;

/// Fallback base address for a locally served backend
const DEFAULT_BASE: &str = "http://127.0.0.1:8787";

/// Environment override for the backend base address
const BASE_ENV_VAR: &str = "SURVEY_API_BASE";

/// Route table: logical action id to path
const ROUTES: &[(&str, &str)] = &[("send-email", "/send-email")];

/// Logical backend actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SendEmail,
}

impl Action {
    pub fn key(&self) -> &'static str {
        match self {
            Action::SendEmail => "send-email",
        }
    }
}

/// Resolves logical action ids to callable URLs
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Pick the base address: environment, then config file, then default
    pub fn from_config(config: &TuiConfig) -> Self {
        let base = std::env::var(BASE_ENV_VAR)
            .ok()
            .or_else(|| config.endpoint_base.clone())
            .unwrap_or_else(|| DEFAULT_BASE.to_string());
        Self::new(base)
    }

    pub fn resolve(&self, action: Action) -> Result<String, ApiError> {
        self.resolve_key(action.key())
    }

    /// Look up an action id in the route table
    pub fn resolve_key(&self, key: &str) -> Result<String, ApiError> {
        ROUTES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, path)| format!("{}{}", self.base, path))
            .ok_or_else(|| ApiError::UnknownAction(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_send_email() {
        let endpoints = Endpoints::new("https://api.example.com");
        assert_eq!(
            endpoints.resolve(Action::SendEmail).unwrap(),
            "https://api.example.com/send-email"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = Endpoints::new("https://api.example.com/");
        assert_eq!(
            endpoints.resolve(Action::SendEmail).unwrap(),
            "https://api.example.com/send-email"
        );
    }

    #[test]
    fn test_unknown_action_fails() {
        let endpoints = Endpoints::new("https://api.example.com");
        let err = endpoints.resolve_key("launch-rocket").unwrap_err();
        assert!(matches!(err, ApiError::UnknownAction(k) if k == "launch-rocket"));
    }

    #[test]
    fn test_config_base_is_used() {
        let config = TuiConfig {
            endpoint_base: Some("https://forms.example.com".to_string()),
            ..Default::default()
        };
        // Assumes SURVEY_API_BASE is unset in the test environment
        let endpoints = Endpoints::from_config(&config);
        assert_eq!(
            endpoints.resolve(Action::SendEmail).unwrap(),
            "https://forms.example.com/send-email"
        );
    }

    #[test]
    fn test_action_key() {
        assert_eq!(Action::SendEmail.key(), "send-email");
    }
}
