//! Export metrics tracking.

use crate::models::ExportOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters over export activity.
///
/// Cheap to clone (shared atomics); one instance lives inside the exporter
/// for the page session. Counters only ever grow.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    exports_total: Arc<AtomicU64>,
    deliveries_failed_total: Arc<AtomicU64>,
    clipboard_fallbacks_total: Arc<AtomicU64>,
    deep_link_opens_total: Arc<AtomicU64>,
}

impl ExportMetrics {
    /// Create a fresh tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the terminal outcome of one export invocation.
    pub fn track_export(&self, outcome: &ExportOutcome) {
        self.exports_total.fetch_add(1, Ordering::Relaxed);

        match outcome {
            ExportOutcome::Delivered(_) => {}
            ExportOutcome::FallbackOffered(_) => {
                self.clipboard_fallbacks_total.fetch_add(1, Ordering::Relaxed);
            }
            ExportOutcome::Failed(_) => {
                self.deliveries_failed_total.fetch_add(1, Ordering::Relaxed);
            }
        }

        tracing::debug!(outcome = %outcome, "export completed");
    }

    /// Record a messaging deep-link open.
    pub fn track_deep_link(&self) {
        self.deep_link_opens_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Total export invocations.
    pub fn exports_total(&self) -> u64 {
        self.exports_total.load(Ordering::Relaxed)
    }

    /// Exports that ended `Failed`.
    pub fn deliveries_failed_total(&self) -> u64 {
        self.deliveries_failed_total.load(Ordering::Relaxed)
    }

    /// Exports that fell back to the clipboard.
    pub fn clipboard_fallbacks_total(&self) -> u64 {
        self.clipboard_fallbacks_total.load(Ordering::Relaxed)
    }

    /// Deep-link opens.
    pub fn deep_link_opens_total(&self) -> u64 {
        self.deep_link_opens_total.load(Ordering::Relaxed)
    }
}
