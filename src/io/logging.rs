//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::error::{LightRailError, Result, invalid_parameter};

/// Parse a filter directive such as `warn` or `lightrail=debug`
///
/// # Errors
///
/// Returns an error if the directive is not a valid filter
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| invalid_parameter("log_level", &directive, &e))
}

/// Install a global subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `default_directive` when it is set.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a subscriber is already installed
pub fn init(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_directive)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LightRailError::Logging {
            reason: e.to_string(),
        })
}
