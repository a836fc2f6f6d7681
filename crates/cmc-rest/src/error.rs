//! Error types for REST API operations

use crate::fetcher::TransportError;
use cmc_types::error_codes::CmcErrorCode;
use cmc_types::Status;

/// Caller errors detected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two options that cannot be combined were both supplied
    #[error("`{first}` and `{second}` cannot be used together")]
    MutuallyExclusive {
        /// First option name
        first: &'static str,
        /// Second option name
        second: &'static str,
    },

    /// None of the lookup keys was supplied
    #[error("one of {expected} is required")]
    MissingLookup {
        /// Accepted lookup keys
        expected: &'static str,
    },

    /// A list option was supplied without any entries
    #[error("`{field}` must not be empty")]
    EmptyList {
        /// Option name
        field: &'static str,
    },

    /// A numeric option is outside its documented range
    #[error("`{field}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Option name
        field: &'static str,
        /// Rejected value
        value: String,
        /// Inclusive lower bound
        min: String,
        /// Inclusive upper bound
        max: String,
    },

    /// A `*_min` filter is greater than its `*_max` counterpart
    #[error("`{field}_min` must not exceed `{field}_max`")]
    InvertedRange {
        /// Filter name without suffix
        field: &'static str,
    },

    /// Too many conversion currencies
    #[error("at most {max} conversion currencies are allowed, got {count}")]
    TooManyConversions {
        /// Number of entries supplied
        count: usize,
        /// Maximum accepted by the service
        max: usize,
    },
}

impl ValidationError {
    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Invalid request options
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// API returned an error in the status block
    #[error("API error {code}: {message}")]
    Api {
        /// `status.error_code`, verbatim
        code: i64,
        /// `status.error_message`, verbatim
        message: String,
        /// HTTP status of the response
        http_status: u16,
    },

    /// Non-success HTTP status without a structured error
    #[error("HTTP status {status}")]
    Http {
        /// HTTP status of the response
        status: u16,
    },

    /// Request could not be completed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failed to encode the query string
    #[error("Encode error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl RestError {
    /// Create an API error from a failed status block
    ///
    /// Returns `None` if the status reports success.
    pub fn from_status(status: &Status, http_status: u16) -> Option<Self> {
        status.error().map(|(code, message)| Self::Api {
            code,
            message: message.to_string(),
            http_status,
        })
    }

    /// Get the API error code, if this is an API error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Get the API error code from the known code table
    pub fn api_error(&self) -> Option<CmcErrorCode> {
        self.error_code().and_then(CmcErrorCode::from_code)
    }

    /// Check if this error was raised before sending the request
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.api_error().is_some_and(|c| c.is_rate_limit())
            || matches!(self, Self::Http { status: 429 })
    }

    /// Check if the same request may succeed later.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { .. } => self.api_error().is_some_and(|c| c.is_retryable()),
            Self::Http { status } => *status == 429 || *status >= 500,
            Self::Transport(_) => true,
            Self::Validation(_)
            | Self::Parse(_)
            | Self::Encode(_)
            | Self::Config(_)
            | Self::EnvVarNotSet(_) => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: Option<i64>, message: Option<&str>) -> Status {
        serde_json::from_value(serde_json::json!({
            "timestamp": "2024-05-01T10:00:00.000Z",
            "error_code": code,
            "error_message": message,
            "elapsed": 1,
            "credit_count": 0
        }))
        .unwrap()
    }

    #[test]
    fn test_from_status_keeps_code_and_message() {
        let err = RestError::from_status(&status(Some(1008), Some("minute limit")), 429).unwrap();
        assert_eq!(err.error_code(), Some(1008));
        assert!(err.is_rate_limited());
        assert!(err.is_retryable());
        assert!(err.to_string().contains("minute limit"));
    }

    #[test]
    fn test_from_status_success() {
        assert!(RestError::from_status(&status(None, None), 200).is_none());
        assert!(RestError::from_status(&status(Some(0), None), 200).is_none());
    }

    #[test]
    fn test_validation_is_not_retryable() {
        let err: RestError = ValidationError::MutuallyExclusive {
            first: "convert",
            second: "convert_id",
        }
        .into();
        assert!(err.is_validation());
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), None);
        assert!(err.to_string().contains("convert_id"));
    }

    #[test]
    fn test_http_error_has_no_code() {
        let err = RestError::Http { status: 502 };
        assert_eq!(err.error_code(), None);
        assert!(err.is_retryable());
        assert!(!err.is_rate_limited());
    }
}
