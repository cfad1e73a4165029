//! boredcli - command-line client for the bored API
//!
//! Parses filter flags, asks the service for an activity suggestion and
//! prints it.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output formatting
//! - [`commands`]: Command handlers
//! - [`error`]: Error types
//! - [`logging`]: Logger setup
//! - [`transport`]: HTTP execution

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod transport;

pub use error::{AppError, Result};
