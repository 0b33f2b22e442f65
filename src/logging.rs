// src/logging.rs
//! Tracing subscriber setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, logs `info` and above, or `debug` when `verbose`.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "linkflip=debug,linkflip_core=debug"
    } else {
        "linkflip=info,linkflip_core=info"
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
