//! Tracing setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// The filter comes from `--log-level` if given, then `RUST_LOG`, then the
/// config file. `--verbose` without an explicit level means `debug`.
pub fn init(config: &LoggingConfig, cli_level: Option<&str>, verbose: bool) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // A second init (as in tests) keeps the first subscriber.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };
}
