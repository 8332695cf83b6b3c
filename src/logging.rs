//! Structured logging setup.
//!
//! Logging is off unless `QUADSOLVE_TRACE` holds an `EnvFilter` directive
//! (e.g. `debug` or `quadsolve=info`). Events go to stderr so they never
//! mix with prompts on stdout.

use crate::QuadraticError;
use std::env;
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directive.
pub const TRACE_ENV: &str = "QUADSOLVE_TRACE";

/// Install the global subscriber from `QUADSOLVE_TRACE`.
///
/// Returns `Ok(false)` if a subscriber is already configured.
pub fn init() -> Result<bool, QuadraticError> {
    init_with(env::var(TRACE_ENV).ok().as_deref())
}

/// Install the global subscriber with an explicit directive.
pub fn init_with(level: Option<&str>) -> Result<bool, QuadraticError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let filter = build_filter(level)?;
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| QuadraticError::Config {
            message: format!("failed to initialize logging: {}", e),
        })?;

    Ok(true)
}

/// Parse a filter directive; `None`, blank and `off` disable logging.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter, QuadraticError> {
    let level = level.map(str::trim).unwrap_or("off");

    if level.is_empty() || level.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }

    EnvFilter::try_new(level).map_err(|e| QuadraticError::Config {
        message: format!("invalid {} value '{}': {}", TRACE_ENV, level, e),
    })
}
