use crate::error::ExportResult;
use async_trait::async_trait;
use std::fmt;

/// A transient, runtime-generated handle referencing in-memory data, usable
/// as a retrievable resource location until it is revoked.
///
/// The surface that mints one is the only party that can release it; the
/// delivery policy schedules that release after the consuming action has had
/// a chance to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Wrap a runtime-minted URL string.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The runtime the exporter delivers through.
///
/// Abstraction over the embedding environment (a browser binding in
/// production, recording mocks in tests), enabling the delivery policy to be
/// exercised without any real navigation, downloads, or clipboard access.
/// Only the clipboard write is async: the secure-context clipboard may
/// suspend, and callers must not assume synchronous completion.
#[async_trait]
pub trait DeliverySurface: Send + Sync {
    /// The client's self-reported identification string. May be empty.
    fn user_agent(&self) -> String;

    /// Feature probe: does the surface expose a download-triggering
    /// capability? This is a capability check, not string sniffing.
    fn supports_native_download(&self) -> bool;

    /// Whether the execution context is trusted enough for the direct
    /// clipboard-write capability.
    fn is_secure_context(&self) -> bool;

    /// Mint a transient URL referencing `data` with the given mime label.
    fn create_object_url(&self, data: &[u8], mime: &str) -> ExportResult<ObjectUrl>;

    /// Release a previously minted URL. Idempotent; never fails.
    fn revoke_object_url(&self, url: &ObjectUrl);

    /// Open a URL in a new navigable context. Fails when the runtime
    /// suppresses the new context (popup blocking).
    fn open_in_new_context(&self, url: &str) -> ExportResult<()>;

    /// Replace the current navigable context's location with `url`.
    fn navigate_current(&self, url: &str) -> ExportResult<()>;

    /// Trigger a user-invisible download of `url`, tagged with `file_name`.
    /// The surface owns (and discards) whatever temporary UI element it
    /// needs to do so.
    fn trigger_download(&self, url: &str, file_name: &str) -> ExportResult<()>;

    /// Write `text` through the direct clipboard capability.
    async fn clipboard_write(&self, text: &str) -> ExportResult<()>;

    /// Legacy selection-and-copy: offscreen input holding `text`, select,
    /// invoke the copy command, discard the input.
    fn legacy_copy(&self, text: &str) -> ExportResult<()>;
}
