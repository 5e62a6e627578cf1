//! Console output for engine events.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "tourforge_solver=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a console subscriber for engine events.
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
/// Safe to call multiple times; only the first call has effect, and a
/// subscriber installed elsewhere is left in place.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_parses() {
        assert!(DEFAULT_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::info!(target: "tourforge_solver", event = "console_test");
    }
}
