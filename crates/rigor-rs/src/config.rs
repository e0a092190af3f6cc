//! Process configuration, built once at startup.
//!
//! [`Config`] carries the Groq credential and the default model into the
//! rest of the program explicitly — nothing else reads the environment.
//! [`Config::from_env`] is the production path (including `.env` support);
//! [`Config::from_lookup`] takes any key→value function so tests exercise
//! the same resolution logic without touching process state.

use crate::DEFAULT_MODEL;
use crate::error::ConfigError;

/// Environment variable holding the Groq API key. Required.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable overriding the default model. Optional.
pub const MODEL_VAR: &str = "RIGOR_MODEL";

/// Startup configuration for the pipeline binary and library users.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key, passed into [`GroqClient::new`](crate::GroqClient::new).
    pub api_key: String,
    /// Model identifier used for every stage unless overridden per run.
    pub model: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `.env` from the working directory first (ignored if absent),
    /// then requires [`API_KEY_VAR`] and honors [`MODEL_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_config_error() {
        let result = Config::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_key_is_a_config_error() {
        let result = Config::from_lookup(|key| match key {
            API_KEY_VAR => Some(String::new()),
            _ => None,
        });
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn key_present_uses_default_model() {
        let config = Config::from_lookup(|key| match key {
            API_KEY_VAR => Some("gsk-test".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_key, "gsk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn model_var_overrides_default() {
        let config = Config::from_lookup(|key| match key {
            API_KEY_VAR => Some("gsk-test".into()),
            MODEL_VAR => Some("llama-3.1-8b-instant".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }
}
