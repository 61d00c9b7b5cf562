//! Contact card export service.
//!
//! Owns one export invocation end to end: generate the document, pick the
//! delivery channel for the detected environment, degrade to the clipboard
//! when the runtime refuses delivery, and report exactly one notification
//! after the terminal outcome. Failures never escape: whatever happens here,
//! the rest of the page keeps working.

use crate::delivery::{DeliveryPolicy, DeliverySurface};
use crate::environment::{EnvironmentProbe, UserAgentProbe};
use crate::messaging::{whatsapp_link, DEFAULT_GREETING};
use crate::models::{ContactRecord, DeliveryChannel, ExportOutcome, FailureReason};
use crate::notify::{Notifier, Severity};
use crate::observability::ExportMetrics;
use crate::vcard;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Exports a contact card through the best channel the runtime offers.
///
/// Constructed once per page session with the validated [`ContactRecord`]
/// (explicit dependency injection — there is no ambient configuration to
/// reach into). Each operation runs the one-shot sequence
/// generate → deliver → terminal outcome; there is no retry loop, a failed
/// attempt requires a new user-initiated invocation.
pub struct ContactCardExporter {
    contact: ContactRecord,
    policy: DeliveryPolicy,
    notifier: Arc<dyn Notifier>,
    probe: Arc<dyn EnvironmentProbe>,
    metrics: ExportMetrics,
}

impl ContactCardExporter {
    /// Create an exporter detecting the environment from the surface's
    /// identification string.
    pub fn new(
        contact: ContactRecord,
        surface: Arc<dyn DeliverySurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let probe = Arc::new(UserAgentProbe::new(Arc::clone(&surface)));
        Self::with_probe(contact, surface, notifier, probe)
    }

    /// Create an exporter with an explicit environment probe (injected
    /// flags, alternative detection).
    pub fn with_probe(
        contact: ContactRecord,
        surface: Arc<dyn DeliverySurface>,
        notifier: Arc<dyn Notifier>,
        probe: Arc<dyn EnvironmentProbe>,
    ) -> Self {
        Self {
            contact,
            policy: DeliveryPolicy::new(surface),
            notifier,
            probe,
            metrics: ExportMetrics::new(),
        }
    }

    /// The record this exporter serves.
    pub fn contact(&self) -> &ContactRecord {
        &self.contact
    }

    /// Counters over this exporter's activity.
    pub fn metrics(&self) -> &ExportMetrics {
        &self.metrics
    }

    /// Generate the vCard and deliver it.
    ///
    /// The environment profile is computed fresh for this invocation; the
    /// delivery policy picks navigation or download, and a refused delivery
    /// degrades to offering the contact's key fields for clipboard copy.
    pub async fn export_contact(&self) -> ExportOutcome {
        let document = vcard::generate_document(&self.contact);
        let file_name = vcard::file_name(&self.contact);

        let env = self.probe.profile();
        debug!(?env, file_name = %file_name, "delivering contact card");

        let outcome = match self.policy.deliver(&document, &file_name, &env) {
            Ok(channel) => ExportOutcome::Delivered(channel),
            Err(err) => {
                warn!(error = %err, "delivery failed, falling back to clipboard");
                match self
                    .policy
                    .copy_to_clipboard(&self.contact.clipboard_text())
                    .await
                {
                    Ok(()) => ExportOutcome::FallbackOffered(DeliveryChannel::Clipboard),
                    Err(clip_err) => {
                        error!(error = %clip_err, "clipboard fallback failed");
                        ExportOutcome::Failed(FailureReason::ClipboardUnavailable)
                    }
                }
            }
        };

        self.metrics.track_export(&outcome);
        match outcome {
            ExportOutcome::Delivered(_) => {
                self.notifier
                    .notify("Contact ready to be saved!", Severity::Success);
            }
            ExportOutcome::FallbackOffered(_) => {
                self.notifier.notify(
                    "Could not save the file; contact details copied to your clipboard instead.",
                    Severity::Warning,
                );
            }
            ExportOutcome::Failed(_) => {
                self.notifier
                    .notify("Error saving contact. Please try again.", Severity::Danger);
            }
        }
        outcome
    }

    /// Open a WhatsApp chat with the card's owner, default greeting
    /// pre-filled.
    pub async fn open_whatsapp(&self) -> ExportOutcome {
        self.open_whatsapp_with_message(DEFAULT_GREETING).await
    }

    /// Open a WhatsApp chat with a caller-supplied message.
    ///
    /// Shares the open-or-navigate fallback with document delivery: a
    /// suppressed new context falls back to same-context navigation.
    pub async fn open_whatsapp_with_message(&self, message: &str) -> ExportOutcome {
        let link = whatsapp_link(&self.contact.whatsapp_number, message);

        let outcome = match self.policy.open_or_navigate(&link) {
            Ok(()) => {
                self.metrics.track_deep_link();
                ExportOutcome::Delivered(DeliveryChannel::Navigation)
            }
            Err(err) => {
                error!(error = %err, "failed to open chat deep link");
                ExportOutcome::Failed(FailureReason::DeliveryBlocked)
            }
        };

        match outcome {
            ExportOutcome::Failed(_) => {
                self.notifier
                    .notify("Error opening WhatsApp. Please try again.", Severity::Danger);
            }
            _ => {
                self.notifier.notify("Opening WhatsApp chat...", Severity::Info);
            }
        }
        outcome
    }

    /// Copy arbitrary text to the clipboard, preferring the direct
    /// capability in a secure context.
    pub async fn copy_to_clipboard(&self, text: &str) -> ExportOutcome {
        let outcome = match self.policy.copy_to_clipboard(text).await {
            Ok(()) => ExportOutcome::Delivered(DeliveryChannel::Clipboard),
            Err(err) => {
                error!(error = %err, "clipboard copy failed");
                ExportOutcome::Failed(FailureReason::ClipboardUnavailable)
            }
        };

        match outcome {
            ExportOutcome::Delivered(_) => {
                self.notifier.notify("Copied to clipboard.", Severity::Success);
            }
            _ => {
                self.notifier
                    .notify("Could not access the clipboard.", Severity::Danger);
            }
        }
        outcome
    }
}
