//! # Logging
//!
//! Installs a `tracing` subscriber that prints spans and events to stdout in
//! a human-readable format. The log level is controlled with `RUST_LOG`
//! (`EnvFilter` directives) and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin greeter-server
//! ```
//!
//! Events emitted by the service:
//!
//! - `info`: variant in use at startup, and `Received: {name}` for every call.
//! - `debug`: the delay drawn by the `block` variant.
//! - `warn`: a `BLOCK_DURATION` value that was rejected.
//!
//! Bind and serve failures are not logged here; `main` returns them and the
//! process exits with the error report.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .pretty(),
        )
        .try_init()?;

    Ok(())
}
