//! Diagnostic tracing on stderr.
//!
//! Prompts and ratings go to stdout and never depend on `RUST_LOG`; this
//! module only configures the `tracing` events emitted by the store and the
//! collector (for example `RUST_LOG=questionnaire=debug questionnaire report`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the event filter from a `RUST_LOG` value.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber: compact lines on stderr.
pub fn init() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(filter_from(rust_log.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
