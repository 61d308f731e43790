use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "No WHOIS data found for this domain";
pub const MISSING_API_KEY_MESSAGE: &str =
    "WHOIS API key not configured. Please set WHOIS_API_KEY environment variable.";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("{message}")]
    ConfigError { message: String },

    #[error("WHOIS API request failed: {status}")]
    UpstreamStatusError { status: u16 },

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFoundError,

    #[error("WHOIS API request timed out after {seconds}s")]
    TimeoutError { seconds: u64 },

    #[error("WHOIS API request was cancelled")]
    CancelledError,

    #[error("WHOIS API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Upstream,
    Internal,
}

impl LookupError {
    pub fn validation(message: impl Into<String>) -> Self {
        LookupError::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        LookupError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::ValidationError { .. } => ErrorCategory::Validation,
            LookupError::ConfigError { .. } => ErrorCategory::Configuration,
            LookupError::UpstreamStatusError { .. }
            | LookupError::NotFoundError
            | LookupError::TimeoutError { .. }
            | LookupError::CancelledError
            | LookupError::ApiError(_) => ErrorCategory::Upstream,
            LookupError::SerializationError(_) | LookupError::IoError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// HTTP status reported at the `/lookup` boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            LookupError::ValidationError { .. } => 400,
            LookupError::NotFoundError => 404,
            LookupError::TimeoutError { .. } => 504,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_category() {
        assert_eq!(LookupError::validation("Domain name is required").status_code(), 400);
        assert_eq!(LookupError::config(MISSING_API_KEY_MESSAGE).status_code(), 500);
        assert_eq!(LookupError::UpstreamStatusError { status: 503 }.status_code(), 500);
        assert_eq!(LookupError::NotFoundError.status_code(), 404);
        assert_eq!(LookupError::TimeoutError { seconds: 5 }.status_code(), 504);
        assert_eq!(LookupError::CancelledError.status_code(), 500);
    }

    #[test]
    fn test_messages_are_surfaced_verbatim() {
        let err = LookupError::UpstreamStatusError { status: 503 };
        assert_eq!(err.to_string(), "WHOIS API request failed: 503");
        assert_eq!(LookupError::NotFoundError.to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(
            LookupError::validation("Domain name is required").to_string(),
            "Domain name is required"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(
            LookupError::config("missing").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(LookupError::CancelledError.category(), ErrorCategory::Upstream);
        let io = LookupError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.category(), ErrorCategory::Internal);
    }
}
