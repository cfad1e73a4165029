//! Synchronous client core for the bored API.
//!
//! # Overview
//! Validates the user's filters, builds the single GET request the service
//! understands, and decodes whichever of its two JSON shapes comes back. No
//! network I/O happens here (host-does-IO pattern): the caller executes the
//! request, which keeps the core deterministic and testable.
//!
//! # Design
//! - `ApiConfig` is built once and owned by `BoredClient`; there are no
//!   globals.
//! - `FlagValues::validate` turns raw inputs into `FilterParameters`, leaving
//!   out anything that would not change the result.
//! - `build_fetch_idea` / `parse_fetch_idea` make the I/O boundary explicit.
//! - `decode` yields a tagged `ActivityResponse`, including an explicit
//!   `Empty` case for bodies that carry neither an idea nor an error.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod params;
pub mod types;

pub use client::BoredClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use decode::decode;
pub use error::{ApiError, ConfigError, DecodeError, ValidationError};
pub use http::{HttpRequest, HttpResponse};
pub use params::{FilterParameters, FlagValues};
pub use types::{ActivityResponse, Category, ErrorResult, Idea};
