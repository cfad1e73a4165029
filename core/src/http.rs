//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the request and response as plain data. The core
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; the caller executes the GET and hands the raw bytes
//! back. Only GET exists because the service has a single read endpoint.

use url::Url;

/// A GET request described as plain data.
///
/// Built by `BoredClient::build_fetch_idea`. `url` already carries the
/// encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `BoredClient::parse_fetch_idea`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
