//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(quiet: bool) -> &'static str {
    if quiet {
        "lattice_app=info,tower_http=info,info"
    } else {
        "lattice_app=debug,tower_http=debug,info"
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(quiet).into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
