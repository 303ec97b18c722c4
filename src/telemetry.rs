//! Structured logging setup
//!
//! The library only emits `tracing` events; binaries decide whether and how
//! they are printed. Output goes to stderr so it never interleaves with
//! buffer dumps on stdout.

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`: buffer events down to `debug`.
pub const VERBOSE_FILTER: &str = "circular_buffer=debug";

static INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
/// Without `RUST_LOG` nothing is installed and the CLI stays quiet.
pub fn init_tracing() {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init_tracing_with_filter(&filter);
    }
}

/// Initialize tracing for `--verbose`
pub fn init_tracing_verbose() {
    init_tracing_with_filter(VERBOSE_FILTER)
}

/// Initialize with a custom filter string. Only the first call has effect.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr);

        let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    });
}
