use std::error::Error;
use std::fmt;

use crate::http::HttpClientError;

/// Shown for every failed submission, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Error submitting form. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, details: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(
                f,
                "Missing Supabase environment variables: {} is not set",
                key
            ),
            ConfigError::Invalid { key, details } => {
                write!(f, "Invalid value for {}: {}", key, details)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SinkError {
    // Status code, PostgREST message (or raw body)
    Rejected(u16, String),
    Transport(HttpClientError),
    Encode(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Rejected(status, message) => {
                write!(f, "Insert rejected ({}): {}", status, message)
            }
            SinkError::Transport(e) => write!(f, "Transport: {}", e),
            SinkError::Encode(e) => write!(f, "Encode: {}", e),
        }
    }
}

impl Error for SinkError {}

impl From<HttpClientError> for SinkError {
    fn from(err: HttpClientError) -> Self {
        SinkError::Transport(err)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Encode(err.to_string())
    }
}

/// Everything that can make a submission fail. Users only ever see
/// [`SUBMIT_FAILED_MESSAGE`]; the variant is kept for the logs.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    Validation { field: &'static str, details: String },
    Sink(SinkError),
    Timeout,
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED_MESSAGE
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Validation { field, details } => {
                write!(f, "Validation error: {} - {}", field, details)
            }
            SubmissionError::Sink(e) => write!(f, "{}", e),
            SubmissionError::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl Error for SubmissionError {}

impl From<SinkError> for SubmissionError {
    fn from(err: SinkError) -> Self {
        SubmissionError::Sink(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cause_shows_the_same_message() {
        let causes = vec![
            SubmissionError::Validation {
                field: "email",
                details: "required".to_string(),
            },
            SubmissionError::Sink(SinkError::Rejected(
                409,
                "duplicate key".to_string(),
            )),
            SubmissionError::Sink(SinkError::Transport(
                HttpClientError::ConnectionError("offline".to_string()),
            )),
            SubmissionError::Timeout,
        ];
        for cause in causes {
            assert_eq!(cause.user_message(), SUBMIT_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_missing_config_names_the_key() {
        let err = ConfigError::Missing("SUPABASE_URL");
        assert!(err.to_string().contains("SUPABASE_URL"));
    }
}
