//! Diagnostic logging setup
//!
//! Events go to stderr so they never interleave with shell output on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the settings name one
pub const DEFAULT_FILTER: &str = "expense_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` wins over `filter`, which wins over [`DEFAULT_FILTER`]. Only
/// the first call has any effect.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        });

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
