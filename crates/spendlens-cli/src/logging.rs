use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

// Targets are crate names as rustc sees them: the binary is `spendlens`.
const DEFAULT_FILTER: &str = "spendlens=info,spendlens_client=info";

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once. `RUST_LOG` overrides the default
/// filter; output goes to stderr so stdout stays parseable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
