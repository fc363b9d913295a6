// Error types for the video request session

use std::fmt;

/// Pre-flight rejection of user input, produced before any network call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRejection {
    /// Input is empty after trimming whitespace
    EmptyInput,

    /// Input does not start with a recognized platform host
    UnsupportedHost,
}

impl fmt::Display for UrlRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter a video URL"),
            Self::UnsupportedHost => {
                write!(f, "Please enter a valid video URL from supported platforms")
            }
        }
    }
}

impl std::error::Error for UrlRejection {}

/// Failure reported by the extraction backend.
///
/// Transport failures, timeouts, and application-level errors supplied by
/// the backend all collapse into one message; callers never distinguish
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
