//! Tracing initialisation for the host process

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to debug for this crate. The host calls
/// this once at startup; calling it twice panics, as with any global
/// subscriber installation.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "critterforge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
