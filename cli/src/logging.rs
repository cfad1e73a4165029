//! Logger setup
//!
//! `RUST_LOG` decides the filter, falling back to `warn`. `--verbose` sets
//! every module to `debug` on top of whatever the environment asked for.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Build the logger for one invocation. `main` passes `Env::default()`.
pub fn logger(env: Env<'_>, verbose: bool) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("warn"));
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}
