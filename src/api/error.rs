use thiserror::Error;

/// Failures talking to the VentureFlow backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Backend returned an unusable catalog: {0}")]
    InvalidCatalog(String),
    #[error("Listing is incomplete: {0}")]
    Incomplete(String),
    #[error("Listing rejected: {0}")]
    Rejected(String),
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl ApiError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// Whether trying the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors_are_transient_ones() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::Network("reset".into()).is_retryable());
        assert!(ApiError::Http {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(!ApiError::Http {
            status: 404,
            body: String::new()
        }
        .is_retryable());
        assert!(!ApiError::Cancelled.is_retryable());
        assert!(!ApiError::InvalidCatalog("x".into()).is_retryable());
    }
}
