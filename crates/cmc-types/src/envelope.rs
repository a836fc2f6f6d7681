//! Response envelope shared by every CoinMarketCap endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status block attached to every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Current timestamp (ISO 8601) on the server
    pub timestamp: DateTime<Utc>,
    /// Internal error code, or the HTTP status when no unique code exists.
    ///
    /// `null` (or `0` on the live service) when there is no error.
    #[serde(default)]
    pub error_code: Option<i64>,
    /// Error message to go along with the error code
    #[serde(default)]
    pub error_message: Option<String>,
    /// Milliseconds taken to generate this response
    #[serde(default)]
    pub elapsed: u64,
    /// API call credits used for this call
    #[serde(default)]
    pub credit_count: u32,
    /// Service notice (deprecations, plan changes)
    #[serde(default)]
    pub notice: Option<String>,
}

impl Status {
    /// Check if the status reports success
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, None | Some(0))
    }

    /// Get the error code and message if the status reports a failure
    pub fn error(&self) -> Option<(i64, &str)> {
        match self.error_code {
            None | Some(0) => None,
            Some(code) => Some((code, self.error_message.as_deref().unwrap_or_default())),
        }
    }
}

/// Successful response: status block plus endpoint payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Response status
    pub status: Status,
    /// Endpoint payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Consume the envelope, keeping only the payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the status block
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            data: f(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success_with_null_code() {
        let status: Status = serde_json::from_str(
            r#"{"timestamp":"2024-05-01T10:00:00.000Z","error_code":null,"error_message":null,"elapsed":7,"credit_count":1}"#,
        )
        .unwrap();
        assert!(status.is_success());
        assert_eq!(status.error(), None);
        assert_eq!(status.elapsed, 7);
    }

    #[test]
    fn test_status_success_with_zero_code() {
        let status: Status = serde_json::from_str(
            r#"{"timestamp":"2024-05-01T10:00:00.000Z","error_code":0,"error_message":null,"elapsed":3,"credit_count":1,"notice":null}"#,
        )
        .unwrap();
        assert!(status.is_success());
    }

    #[test]
    fn test_status_error() {
        let status: Status = serde_json::from_str(
            r#"{"timestamp":"2024-05-01T10:00:00.000Z","error_code":1001,"error_message":"This API Key is invalid.","elapsed":0,"credit_count":0}"#,
        )
        .unwrap();
        assert!(!status.is_success());
        assert_eq!(status.error(), Some((1001, "This API Key is invalid.")));
    }

    #[test]
    fn test_envelope_map() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"status":{"timestamp":"2024-05-01T10:00:00Z","error_code":0,"elapsed":1,"credit_count":1},"data":[1,2,3]}"#,
        )
        .unwrap();
        let mapped = envelope.map(|v| v.len());
        assert_eq!(mapped.data, 3);
        assert_eq!(mapped.status.credit_count, 1);
    }
}
