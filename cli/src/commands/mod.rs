//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod bored;

pub use bored::run_bored;
