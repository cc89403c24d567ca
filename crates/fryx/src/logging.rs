//! Tracing setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber once per process. `RUST_LOG` overrides the
/// default level, which is `debug` when `debug` is set and `info` otherwise.
pub fn init_tracing(debug: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let default = if debug { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        // another subscriber may already be installed by the host application
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    });
}
