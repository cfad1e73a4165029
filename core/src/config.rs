//! Immutable client configuration.

use url::Url;

use crate::error::ConfigError;

/// Public endpoint of the bored API.
pub const DEFAULT_BASE_URL: &str = "http://www.boredapi.com/api/activity/";

/// Query-parameter keys, named exactly as the service expects them.
pub mod keys {
    pub const ACCESSIBILITY: &str = "accessibility";
    pub const ACCESS_MIN: &str = "access-min";
    pub const ACCESS_MAX: &str = "access-max";
    pub const TYPE: &str = "type";
    pub const PARTICIPANTS: &str = "participants";
    pub const PRICE: &str = "price";
    pub const PRICE_MIN: &str = "minprice";
    pub const PRICE_MAX: &str = "maxprice";
}

/// Where the client sends its request. Built once at startup and handed to
/// `BoredClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }
        if parsed.query().is_some() {
            return Err(invalid("base URL must not carry a query string".to_string()));
        }
        Ok(Self { base_url: parsed })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
