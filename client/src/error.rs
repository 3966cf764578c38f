use statdex_protocol::ValidationError;
use thiserror::Error;

/// Where a rate-limit rejection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    /// The client-side sliding window refused the call; nothing was sent
    Local,
    /// The service answered 429
    Server,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller input failed validation; the request was never built
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Too many requests. Please wait a moment before trying again.")]
    RateLimited(Throttle),

    #[error("Invalid input. Please check your data and try again.")]
    InvalidInput,

    #[error("Pokemon not found.")]
    NotFound,

    #[error("Server error ({0}). Please try again later.")]
    Server(u16),

    #[error("Request failed with status {0}")]
    Http(u16),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// No status was received: connection failure, timeout, unreadable body
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

impl ApiError {
    /// Map a non-2xx status to its error
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => ApiError::RateLimited(Throttle::Server),
            400 => ApiError::InvalidInput,
            404 => ApiError::NotFound,
            s if s >= 500 => ApiError::Server(s),
            s => ApiError::Http(s),
        }
    }

    /// True when the call failed before reaching the network
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Validation(_) | ApiError::RateLimited(Throttle::Local)
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
