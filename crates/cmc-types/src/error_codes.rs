//! CoinMarketCap API error code table
//!
//! The service reports failures through `status.error_code`. Codes in the
//! 1000 range are specific to API key and plan handling; anything else is the
//! HTTP status of the response.

/// CoinMarketCap error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or invalid request parameters
    Request,
    /// Missing, invalid or disabled API key
    Auth,
    /// Plan does not cover the request or payment is due
    Billing,
    /// Credit or request rate limit reached
    RateLimit,
    /// Failure on the service side
    Server,
    /// Code not known to this client
    Unknown,
}

/// All known CoinMarketCap error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmcErrorCode {
    // === HTTP-derived ===
    /// 400: invalid value or missing parameter
    BadRequest,
    /// 401: missing or invalid API key
    Unauthorized,
    /// 402: payment required
    PaymentRequired,
    /// 403: endpoint not available on this plan
    Forbidden,
    /// 429: too many requests
    TooManyRequests,
    /// 500: internal server error
    InternalServerError,

    // === API key specific ===
    /// 1001: This API Key is invalid
    ApiKeyInvalid,
    /// 1002: API key missing
    ApiKeyMissing,
    /// 1003: Your API Key must be activated
    ApiKeyPlanRequiresPayment,
    /// 1004: Your API Key's subscription plan has expired
    ApiKeyPlanPaymentExpired,
    /// 1005: An API Key is required for this call
    ApiKeyRequired,
    /// 1006: Your API Key subscription plan doesn't support this endpoint
    ApiKeyPlanNotAuthorized,
    /// 1007: This API Key has been disabled
    ApiKeyDisabled,
    /// 1008: You've exceeded your API Key's HTTP request rate limit
    ApiKeyPlanMinuteRateLimitReached,
    /// 1009: You've exceeded your API Key's daily rate limit
    ApiKeyPlanDailyRateLimitReached,
    /// 1010: You've exceeded your API Key's monthly rate limit
    ApiKeyPlanMonthlyRateLimitReached,
    /// 1011: You've hit an IP rate limit
    IpRateLimitReached,
}

impl CmcErrorCode {
    /// Look up a numeric `error_code`
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            1001 => Self::ApiKeyInvalid,
            1002 => Self::ApiKeyMissing,
            1003 => Self::ApiKeyPlanRequiresPayment,
            1004 => Self::ApiKeyPlanPaymentExpired,
            1005 => Self::ApiKeyRequired,
            1006 => Self::ApiKeyPlanNotAuthorized,
            1007 => Self::ApiKeyDisabled,
            1008 => Self::ApiKeyPlanMinuteRateLimitReached,
            1009 => Self::ApiKeyPlanDailyRateLimitReached,
            1010 => Self::ApiKeyPlanMonthlyRateLimitReached,
            1011 => Self::IpRateLimitReached,
            _ => return None,
        })
    }

    /// Numeric code as reported by the service
    pub fn code(&self) -> i64 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::PaymentRequired => 402,
            Self::Forbidden => 403,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
            Self::ApiKeyInvalid => 1001,
            Self::ApiKeyMissing => 1002,
            Self::ApiKeyPlanRequiresPayment => 1003,
            Self::ApiKeyPlanPaymentExpired => 1004,
            Self::ApiKeyRequired => 1005,
            Self::ApiKeyPlanNotAuthorized => 1006,
            Self::ApiKeyDisabled => 1007,
            Self::ApiKeyPlanMinuteRateLimitReached => 1008,
            Self::ApiKeyPlanDailyRateLimitReached => 1009,
            Self::ApiKeyPlanMonthlyRateLimitReached => 1010,
            Self::IpRateLimitReached => 1011,
        }
    }

    /// Category of this code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BadRequest => ErrorCategory::Request,
            Self::Unauthorized
            | Self::ApiKeyInvalid
            | Self::ApiKeyMissing
            | Self::ApiKeyRequired
            | Self::ApiKeyDisabled => ErrorCategory::Auth,
            Self::PaymentRequired
            | Self::Forbidden
            | Self::ApiKeyPlanRequiresPayment
            | Self::ApiKeyPlanPaymentExpired
            | Self::ApiKeyPlanNotAuthorized => ErrorCategory::Billing,
            Self::TooManyRequests
            | Self::ApiKeyPlanMinuteRateLimitReached
            | Self::ApiKeyPlanDailyRateLimitReached
            | Self::ApiKeyPlanMonthlyRateLimitReached
            | Self::IpRateLimitReached => ErrorCategory::RateLimit,
            Self::InternalServerError => ErrorCategory::Server,
        }
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        self.category() == ErrorCategory::RateLimit
    }

    /// Check if this error is caused by the API key
    pub fn is_auth(&self) -> bool {
        self.category() == ErrorCategory::Auth
    }

    /// Check if the same request may succeed later.
    ///
    /// Daily and monthly limits only reset on plan boundaries, so they are
    /// not considered retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TooManyRequests
                | Self::ApiKeyPlanMinuteRateLimitReached
                | Self::IpRateLimitReached
                | Self::InternalServerError
        )
    }
}

/// Categorize a raw code, including codes outside the known table
pub fn categorize(code: i64) -> ErrorCategory {
    match CmcErrorCode::from_code(code) {
        Some(known) => known.category(),
        None if (500..600).contains(&code) => ErrorCategory::Server,
        None if (400..500).contains(&code) => ErrorCategory::Request,
        None => ErrorCategory::Unknown,
    }
}
