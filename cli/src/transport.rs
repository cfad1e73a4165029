//! HTTP execution for requests built by the core.
//!
//! The core never touches the network; this module is the host side of that
//! split. `Transport` is the seam commands depend on, so tests can swap the
//! real `ureq` agent for canned responses.

use bored_core::{HttpRequest, HttpResponse};

use crate::error::TransportError;

/// Executes one request and returns the raw response.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Synchronous transport backed by a `ureq` agent with default timeouts.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data here; the core decides what a 404 means.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let mut builder = self.agent.get(url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|source| TransportError::Send {
            url: url.to_string(),
            source,
        })?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(TransportError::Read)?;

        log::debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}
