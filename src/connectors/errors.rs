use std::fmt;

/// Errors that can occur while fetching users from the remote source
#[derive(Debug)]
pub enum FetchError {
    /// HTTP request/response error
    HttpError(String),
    /// Service unreachable or timeout
    ServiceUnavailable(String),
    /// Remote answered with a non-success status
    Status(u16),
    /// Invalid response format from the remote source
    InvalidResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::Status(code) => write!(f, "Failed to fetch users (HTTP {})", code),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
