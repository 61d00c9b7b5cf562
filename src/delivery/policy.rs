//! Ordered delivery policy.
//!
//! Decides how a generated document reaches the user for a given
//! environment profile: open-or-navigate for clients where the download
//! attribute is unreliable, native download elsewhere, and a typed error for
//! the caller to turn into the clipboard fallback when the runtime refuses
//! both.

use crate::delivery::{DeliverySurface, ObjectUrl};
use crate::environment::EnvironmentProfile;
use crate::error::{ExportError, ExportResult};
use crate::models::DeliveryChannel;
use crate::vcard::VCARD_MIME;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Grace period before a transient object URL is revoked.
///
/// The release must not happen before the consuming navigation or download
/// has had a chance to start, hence a deliberate short delay rather than an
/// immediate release.
pub const REVOKE_GRACE: Duration = Duration::from_millis(100);

/// Applies the ordered delivery decision over a [`DeliverySurface`].
#[derive(Clone)]
pub struct DeliveryPolicy {
    surface: Arc<dyn DeliverySurface>,
}

impl DeliveryPolicy {
    /// Create a policy over the given surface.
    pub fn new(surface: Arc<dyn DeliverySurface>) -> Self {
        Self { surface }
    }

    /// Deliver `document` to the user, first match wins:
    ///
    /// 1. Safari/iOS/Android clients get the document opened as a navigable
    ///    resource; a suppressed popup falls back to same-context
    ///    navigation. Either way the channel is `Navigation`.
    /// 2. Otherwise, if the surface supports it, a native download tagged
    ///    with `file_name_hint`.
    /// 3. Otherwise `ExportError::DeliveryBlocked` — the caller owns the
    ///    clipboard fallback, since only it holds the contact fields the
    ///    fallback text needs.
    ///
    /// The transient URL minted here is released after [`REVOKE_GRACE`] on a
    /// fire-and-forget timer, whichever path ran. Rapid-fire exports may
    /// interleave their deferred releases; each URL is independent, so no
    /// ordering is needed.
    ///
    /// Must be called from within a Tokio runtime (the exporter's operations
    /// are async, so this holds in practice).
    pub fn deliver(
        &self,
        document: &str,
        file_name_hint: &str,
        env: &EnvironmentProfile,
    ) -> ExportResult<DeliveryChannel> {
        let url = self
            .surface
            .create_object_url(document.as_bytes(), VCARD_MIME)?;

        let delivered = if env.prefers_navigation() {
            self.open_or_navigate(url.as_str())
                .map(|_| DeliveryChannel::Navigation)
        } else if env.supports_native_download {
            self.surface
                .trigger_download(url.as_str(), file_name_hint)
                .map(|_| DeliveryChannel::Download)
        } else {
            Err(ExportError::DeliveryBlocked(
                "no delivery channel available".to_string(),
            ))
        };

        self.schedule_revoke(url);
        delivered
    }

    /// Open `url` in a new context, falling back to replacing the current
    /// context's location when the runtime suppresses the new one.
    ///
    /// Shared by document delivery and the messaging deep link.
    pub fn open_or_navigate(&self, url: &str) -> ExportResult<()> {
        match self.surface.open_in_new_context(url) {
            Ok(()) => Ok(()),
            Err(open_err) => {
                debug!(error = %open_err, "new context suppressed, navigating in place");
                self.surface.navigate_current(url)
            }
        }
    }

    /// Release `url` after [`REVOKE_GRACE`], without blocking the caller.
    ///
    /// Fire-and-forget: completion is not awaited and carries no ordering
    /// guarantee relative to later exports.
    fn schedule_revoke(&self, url: ObjectUrl) {
        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            tokio::time::sleep(REVOKE_GRACE).await;
            surface.revoke_object_url(&url);
            debug!(url = %url, "transient object URL revoked");
        });
    }

    /// Copy `text` to the clipboard.
    ///
    /// Prefers the direct clipboard-write capability in a secure context;
    /// falls back to the legacy selection-and-copy technique otherwise.
    pub async fn copy_to_clipboard(&self, text: &str) -> ExportResult<()> {
        if self.surface.is_secure_context() {
            self.surface.clipboard_write(text).await
        } else {
            warn!("insecure context, using legacy selection-copy");
            self.surface.legacy_copy(text)
        }
    }
}
