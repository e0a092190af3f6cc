//! Error types for the pipeline and its collaborators.
//!
//! Three distinct failure families, kept separate on purpose:
//!
//! - [`ConfigError`] — a required credential is missing at startup. Fatal;
//!   the pipeline never starts.
//! - [`CompletionError`] — a single completion call failed (network, HTTP
//!   status, provider error object, malformed body, empty choices). Aborts
//!   the remaining stages; never retried here.
//! - [`Error`] — the umbrella type for library entry points that can hit
//!   more than one family, including the unrecognized-shot-mode case.
//!
//! A failed run is reported as
//! [`PipelineFailure`](crate::pipeline::PipelineFailure), which pairs a
//! [`CompletionError`] with the failing stage and the partial result.

use thiserror::Error;

/// Startup configuration failure. Reported before any stage runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The Groq credential is absent from the environment and `.env`.
    #[error("GROQ_API_KEY not found — add it to your environment or .env file")]
    MissingApiKey,
}

/// A completion provider call failed.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The HTTP request itself failed (connect, timeout, TLS, body read).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Groq API HTTP {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The provider answered 200 but embedded an error object.
    #[error("Groq API error: {0}")]
    Api(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response carried no choices or no text content.
    #[error("empty completion: no choices returned")]
    Empty,
}

/// Umbrella error for library entry points.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An unrecognized shot-mode selector was supplied.
    #[error("unrecognized shot mode '{0}' (expected zero, one, or few)")]
    InvalidMode(String),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_variable() {
        let msg = ConfigError::MissingApiKey.to_string();
        assert!(msg.contains("GROQ_API_KEY"));
    }

    #[test]
    fn invalid_mode_names_the_input_and_choices() {
        let msg = Error::InvalidMode("banana".into()).to_string();
        assert!(msg.contains("banana"));
        assert!(msg.contains("zero, one, or few"));
    }

    #[test]
    fn completion_errors_are_descriptive() {
        let err = CompletionError::Api("rate limited".into());
        assert_eq!(err.to_string(), "Groq API error: rate limited");

        let err = CompletionError::Empty;
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn umbrella_error_is_transparent_for_config() {
        let err: Error = ConfigError::MissingApiKey.into();
        assert_eq!(err.to_string(), ConfigError::MissingApiKey.to_string());
    }
}
