//! Export outcome: what happened to a single export attempt.

use serde::Serialize;
use std::fmt;

/// The channel a document (or deep link) went out through.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    /// Opened as a navigable resource (new context, or same-context
    /// navigation when the popup was suppressed)
    Navigation,

    /// Saved through the surface's native download action
    Download,

    /// Placed on the clipboard
    Clipboard,
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Navigation => "navigation",
            Self::Download => "download",
            Self::Clipboard => "clipboard",
        };
        write!(f, "{}", s)
    }
}

/// Why an export attempt failed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// Generation threw; defensive classification, should not occur for a
    /// structurally valid record
    Generation,

    /// The runtime refused every delivery channel
    DeliveryBlocked,

    /// The clipboard fallback also failed
    ClipboardUnavailable,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Generation => "generation",
            Self::DeliveryBlocked => "delivery-blocked",
            Self::ClipboardUnavailable => "clipboard-unavailable",
        };
        write!(f, "{}", s)
    }
}

/// Terminal result of one export invocation.
///
/// Surfaced to the UI layer as a transient notification, never persisted.
/// One invocation produces exactly one outcome; there is no retry loop — a
/// failed attempt requires a new user-initiated invocation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum ExportOutcome {
    /// The document reached the user through `channel`
    Delivered(DeliveryChannel),

    /// Primary delivery failed, but a fallback channel was offered instead
    FallbackOffered(DeliveryChannel),

    /// Nothing reached the user
    Failed(FailureReason),
}

impl ExportOutcome {
    /// Whether anything reached the user (including a fallback).
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered(channel) => write!(f, "delivered via {}", channel),
            Self::FallbackOffered(channel) => write!(f, "fallback offered via {}", channel),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
