//! Logging and tracing initialization.
//!
//! The log level is controlled by the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Show request traces and SQL statements
//! RUST_LOG=debug marquee
//!
//! # Fine-grained control
//! RUST_LOG=marquee_core=debug,tower_http=debug,sqlx=warn marquee
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize human-readable logging at `info` unless `RUST_LOG` says otherwise.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Call it once at startup.
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Initialize human-readable logging with a specific default level.
///
/// `RUST_LOG` still wins when it is set.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Initialize JSON-formatted logging (one object per line) for log shippers.
pub fn init_logging_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// Pick the subscriber from a `LOG_FORMAT` value.
pub fn init_from_format(format: &str) {
    match format {
        "json" => init_logging_json(),
        _ => init_logging(),
    }
}
