//! Notification collaborator interface.
//!
//! The exporter never draws its own toasts; it reports every terminal
//! outcome through [`Notifier`], and the embedding UI decides what that
//! looks like. [`TracingNotifier`] is the headless implementation: it routes
//! notifications into the structured log.

use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// How urgent a notification is. Mirrors the alert levels the card UI
/// styles.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        write!(f, "{}", s)
    }
}

/// Notification surface consumed (not implemented) by the core.
///
/// Called after every terminal outcome, never before, and exactly once per
/// invocation. Implementations must not block.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user at the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

/// Routes notifications into the tracing log, severity mapped to level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => {
                info!(severity = %severity, "{}", message);
            }
            Severity::Warning => warn!(severity = %severity, "{}", message),
            Severity::Danger => error!(severity = %severity, "{}", message),
        }
    }
}
