use std::fmt;

/// Failure modes of the injected page-fetch capability.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network or server failure. Retryable; the store is left unchanged.
    Transport(String),

    /// Response arrived but its shape is invalid. Fatal for that attempt only.
    MalformedResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
