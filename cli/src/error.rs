//! Unified error types for boredcli
//!
//! Every failure ends the invocation; nothing is retried. Uses thiserror for
//! ergonomic error definitions.

use bored_core::{ApiError, ValidationError};
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A flag value is out of range or inconsistent with another flag
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request could not be sent or its response could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response could not be understood
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The service answered with neither an idea nor an error message
    #[error("The service returned neither an idea nor an error")]
    NoIdea,

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Errors from executing the HTTP request
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connecting, sending, or receiving the response head failed
    #[error("could not make a request to {url}: {source}")]
    Send {
        url: String,
        #[source]
        source: ureq::Error,
    },

    /// The response body could not be read
    #[error("could not read the response body: {0}")]
    Read(#[source] ureq::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
