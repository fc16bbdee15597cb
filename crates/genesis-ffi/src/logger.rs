//! Logging initialisation via tracing-subscriber.
//!
//! Diagnostics from the core are emitted under the `genesis` target. Hosts
//! call `genesis_init_logging` to send them to stderr. On Android the global
//! core routes them to logcat itself, since stderr is discarded there.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Level used when the host does not ask for one
pub const DEFAULT_LEVEL: &str = "info";

/// Logcat tag of the Android build
#[cfg(target_os = "android")]
pub const LOGCAT_TAG: &str = "Genesis-Core";

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("invalid log filter '{0}'")]
    InvalidFilter(String),

    #[error("failed to set subscriber: {0}")]
    Subscriber(String),
}

/// Build the filter: `RUST_LOG` takes precedence, `directives` is the fallback.
///
/// `directives` is anything `EnvFilter` understands, from `"info"` to
/// `"warn,genesis=trace"`.
pub fn build_filter(directives: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .map_err(|_| LoggerError::InvalidFilter(directives.to_string()))
}

/// Initialise the global tracing subscriber, writing to stderr.
pub fn init(directives: &str) -> Result<(), LoggerError> {
    let filter = build_filter(directives)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))
}

/// Initialise the global tracing subscriber, writing to logcat.
#[cfg(target_os = "android")]
pub fn init_logcat(directives: &str) -> Result<(), LoggerError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(directives)?;
    let logcat =
        tracing_android::layer(LOGCAT_TAG).map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(logcat)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_levels_accepted() {
        for l in &["error", "warn", "info", "debug", "trace"] {
            assert!(build_filter(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn test_target_directives_accepted() {
        assert!(build_filter("genesis=debug").is_ok());
        assert!(build_filter("warn,genesis=trace").is_ok());
        match init("genesis=debug") {
            Ok(()) | Err(LoggerError::Subscriber(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_malformed_directive_rejected() {
        // RUST_LOG wins when set, so the fallback is only consulted without it
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(
                build_filter("genesis=chatty"),
                Err(LoggerError::InvalidFilter(_))
            ));
        }
    }

    #[test]
    fn test_init_succeeds_or_already_set() {
        match init(DEFAULT_LEVEL) {
            Ok(()) | Err(LoggerError::Subscriber(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[cfg(target_os = "android")]
    #[test]
    fn test_global_core_installs_logcat() {
        crate::global_core();
        assert!(tracing::dispatcher::has_been_set());
    }
}
