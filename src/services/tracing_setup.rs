//! Global tracing subscriber for the CLI.
//!
//! Output goes to stderr so stdout stays clean for the rendered configuration.
//! The filter comes from `RUST_LOG`, falling back to `warn`.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_global() {
    let result = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_global_twice_does_not_panic() {
        init_global();
        init_global();
    }
}
