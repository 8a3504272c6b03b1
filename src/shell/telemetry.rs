use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "portfolio_projects=info,tower_http=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt().with_env_filter(filter).init();
}
