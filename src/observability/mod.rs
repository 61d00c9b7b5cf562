//! Observability: logging initialization and export metrics.

pub mod metrics;

pub use metrics::ExportMetrics;

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// Honors `RUST_LOG` when set, defaulting to `info` otherwise. Call once
/// from the embedding application; a second call is a no-op error from the
/// subscriber, which this swallows so embedders can't crash on double init.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
