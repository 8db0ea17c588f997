//! Error types for monitor fetching

use std::fmt;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching monitors from the API
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a usable answer (connect, timeout, body read)
    Transport(reqwest::Error),

    /// The API answered but refused the request (HTTP error status or `stat != "ok"`)
    ApiRejected(String),

    /// The response body could not be decoded
    MalformedResponse(String),

    /// The fetch was cancelled between pages
    Cancelled,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "failed to reach the UptimeRobot API: {}", err),
            FetchError::ApiRejected(msg) => write!(f, "API rejected the request: {}", msg),
            FetchError::MalformedResponse(msg) => {
                write!(f, "could not decode API response: {}", msg)
            }
            FetchError::Cancelled => write!(f, "monitor fetch was cancelled"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}
