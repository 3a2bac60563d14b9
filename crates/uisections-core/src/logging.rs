//! Logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter directives used by [`init`].
pub const DEFAULT_FILTER: &str = "uisections=debug,uisections_core=info";

/// Install a `fmt` subscriber honouring `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a `fmt` subscriber with explicit filter directives.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // A host that already owns the global subscriber keeps it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
