//! Tracing initialization for host binaries and tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-filter.
///
/// Honors `RUST_LOG`; defaults to info-level output for this crate. Safe to
/// call more than once (later calls are no-ops), which matters when several
/// integration tests each try to set up logging.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jade_shopping_admin=info".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
