//! Logging initialization
//!
//! Installs a `tracing` fmt subscriber once per process. Library code only
//! emits events; binaries decide whether and where they are printed.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "remote_invoker=info";

static INIT_ONCE: Once = Once::new();

/// Initialize the global subscriber
///
/// `RUST_LOG` overrides `default_filter`. Later calls are no-ops, and an
/// already installed global subscriber is left in place.
pub fn init(default_filter: &str) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
