//! Translation error types.

use thiserror::Error;

/// Message carried by [`TranslationError::Aborted`].
///
/// Handlers receive errors as plain strings, so this is what callers compare
/// against to suppress error UI after a user-initiated cancel.
pub const ABORTED_MESSAGE: &str = "The user aborted a request.";

/// Translation error.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// API key not found or not configured.
    #[error("API key not configured for {0}")]
    ApiKeyNotFound(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mode name that does not match any [`crate::TranslateMode`].
    #[error("Unknown translate mode: {0}")]
    UnknownMode(String),

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The event stream could not be decoded.
    #[error("Stream error: {0}")]
    Stream(String),

    /// The caller cancelled the request.
    #[error("The user aborted a request.")]
    Aborted,
}

impl TranslationError {
    /// Whether this error was produced by a caller-side cancel.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Same check as [`Self::is_aborted`], for the string form delivered to
    /// `on_error`.
    pub fn is_aborted_message(message: &str) -> bool {
        message == ABORTED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TranslationError::ApiKeyNotFound("DeepSeek".to_string());
        assert!(err.to_string().contains("DeepSeek"));

        let err = TranslationError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Unauthorized"));

        let err = TranslationError::UnknownMode("rewrite".to_string());
        assert!(err.to_string().contains("rewrite"));
    }

    #[test]
    fn aborted_is_distinguishable() {
        let err = TranslationError::Aborted;
        assert!(err.is_aborted());
        assert!(TranslationError::is_aborted_message(&err.to_string()));

        let other = TranslationError::Stream("boom".to_string());
        assert!(!other.is_aborted());
        assert!(!TranslationError::is_aborted_message(&other.to_string()));
    }
}
