//! API key handling
//!
//! The CoinMarketCap Pro API authenticates every call with a single key sent
//! in the `X-CMC_PRO_API_KEY` header. The key is held in a `secrecy` box so it
//! is zeroized on drop and never shows up in `Debug` output or logs.

use crate::error::{RestError, RestResult};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Environment variable read by [`ApiKey::from_env`]
pub const API_KEY_ENV: &str = "CMC_PRO_API_KEY";

/// CoinMarketCap Pro API key
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap a key
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Read the key from `CMC_PRO_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| RestError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        Ok(Self::new(key))
    }

    /// Check if the key is blank
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::from("b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey([REDACTED])");
        assert!(!debug.contains("b54bcf4d"));
    }

    #[test]
    fn test_clone_keeps_value() {
        let key = ApiKey::new(String::from("abc"));
        assert_eq!(key.clone().expose(), "abc");
    }

    #[test]
    fn test_blank_key_is_empty() {
        assert!(ApiKey::from("").is_empty());
        assert!(ApiKey::from("   ").is_empty());
        assert!(!ApiKey::from("k").is_empty());
    }
}
