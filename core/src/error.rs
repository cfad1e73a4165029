//! Error types for the bored API client core.
//!
//! # Design
//! Each stage of an invocation owns its error type: configuration,
//! flag validation, and response decoding. `ApiError` is what the
//! `parse_*` side of `BoredClient` returns; it wraps `DecodeError` and adds
//! the status-code failure the decoder cannot see. Transport failures belong
//! to whoever executes the request and are not modelled here.

use thiserror::Error;

/// The configured base URL cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// A flag value violates its range or ordering rule.
///
/// Messages are shown to the user verbatim, so each variant carries the
/// offending values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(
        "invalid accessibility: expected 0.0 - 1.0 for an exact value or -1 for random, got {0}"
    )]
    Accessibility(f64),

    #[error("invalid access-min/access-max: access-min must not exceed access-max, got min {min}, max {max}")]
    AccessRangeOrder { min: f64, max: f64 },

    #[error("invalid access-min: expected 0.0 - 1.0, got {0}")]
    AccessMin(f64),

    #[error("invalid access-max: expected 0.0 - 1.0, got {0}")]
    AccessMax(f64),

    #[error("invalid type '{0}': expected one of education, recreational, social, diy, charity, cooking, relaxation, music, busywork")]
    Category(String),

    #[error("invalid participants: expected >= 0 for an exact value or -1 for random, got {0}")]
    Participants(i64),

    #[error("invalid price: expected 0.0 - 1.0 for an exact value or -1 for random, got {0}")]
    Price(f64),

    #[error("invalid minprice/maxprice: minprice must not exceed maxprice, got min {min}, max {max}")]
    PriceRangeOrder { min: f64, max: f64 },

    #[error("invalid minprice: expected 0.0 - 1.0, got {0}")]
    PriceMin(f64),

    #[error("invalid maxprice: expected 0.0 - 1.0, got {0}")]
    PriceMax(f64),
}

/// The response body is not a JSON object of a recognised shape.
#[derive(Error, Debug)]
#[error("could not decode response: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Errors returned by `BoredClient` parse methods.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The body could not be decoded into an idea or an error result.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The server answered with a non-2xx status and no error message.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}
