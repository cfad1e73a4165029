//! Stateless request builder and response parser for the bored API.
//!
//! # Design
//! `BoredClient` holds only its `ApiConfig` and carries no mutable state
//! between calls. Fetching an idea is split into `build_fetch_idea`, which
//! produces an `HttpRequest`, and `parse_fetch_idea`, which consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use crate::config::ApiConfig;
use crate::decode::decode;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::params::FilterParameters;
use crate::types::ActivityResponse;

/// Synchronous, stateless client for the bored API.
#[derive(Debug, Clone)]
pub struct BoredClient {
    config: ApiConfig,
}

impl BoredClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// GET the base URL with `params` as query pairs.
    pub fn build_fetch_idea(&self, params: &FilterParameters) -> HttpRequest {
        let mut url = self.config.base_url().clone();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        log::debug!("built request: GET {url}");
        HttpRequest {
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        }
    }

    /// Decode the response body.
    ///
    /// An error result is returned as `Rejected` whatever the status; any
    /// other body with a non-2xx status becomes `ApiError::HttpStatus`.
    pub fn parse_fetch_idea(&self, response: HttpResponse) -> Result<ActivityResponse, ApiError> {
        log::debug!("response status {}", response.status);
        if response.is_success() {
            return Ok(decode(&response.body)?);
        }
        match decode(&response.body) {
            Ok(rejected @ ActivityResponse::Rejected(_)) => Ok(rejected),
            _ => Err(ApiError::HttpStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }),
        }
    }
}
