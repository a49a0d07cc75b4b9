//! Error type for the message board API client.
//!
//! # Design
//! Every failure the client can see (an unreachable host, a non-2xx status,
//! a payload that can't be encoded or decoded) collapses into one `ApiError`
//! carrying a human-readable message. Callers display the message; they never
//! branch on what kind of failure produced it.

/// A failed request, reduced to the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
