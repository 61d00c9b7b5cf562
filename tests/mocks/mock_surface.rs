use async_trait::async_trait;
use ecard_exporter::delivery::{DeliverySurface, ObjectUrl};
use ecard_exporter::error::{ExportError, ExportResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded activity of a [`MockSurface`].
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SurfaceLog {
    /// (url, mime) pairs minted by create_object_url
    pub created_urls: Vec<(String, String)>,
    /// URLs released by revoke_object_url
    pub revoked_urls: Vec<String>,
    /// URLs opened in a new context
    pub opened: Vec<String>,
    /// URLs navigated to in the current context
    pub navigated: Vec<String>,
    /// (url, file_name) pairs passed to trigger_download
    pub downloads: Vec<(String, String)>,
    /// Texts written through the async clipboard
    pub clipboard_writes: Vec<String>,
    /// Texts copied through the legacy technique
    pub legacy_copies: Vec<String>,
}

/// Mock delivery surface for testing.
///
/// Configurable environment flags plus per-operation failure injection, and
/// a full log of every call so tests can assert exactly which channel ran.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSurface {
    user_agent: String,
    native_download: bool,
    secure_context: bool,
    fail_create_url: bool,
    fail_open: bool,
    fail_navigate: bool,
    fail_download: bool,
    fail_clipboard: bool,
    fail_legacy_copy: bool,
    next_url_id: Arc<AtomicU64>,
    log: Arc<Mutex<SurfaceLog>>,
}

#[allow(dead_code)]
impl MockSurface {
    /// A desktop-like surface: no mobile identification, native download
    /// available, secure context.
    pub fn new() -> Self {
        Self {
            user_agent: String::new(),
            native_download: true,
            secure_context: true,
            fail_create_url: false,
            fail_open: false,
            fail_navigate: false,
            fail_download: false,
            fail_clipboard: false,
            fail_legacy_copy: false,
            next_url_id: Arc::new(AtomicU64::new(0)),
            log: Arc::new(Mutex::new(SurfaceLog::default())),
        }
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    pub fn with_native_download(mut self, supported: bool) -> Self {
        self.native_download = supported;
        self
    }

    pub fn with_secure_context(mut self, secure: bool) -> Self {
        self.secure_context = secure;
        self
    }

    pub fn failing_create_url(mut self) -> Self {
        self.fail_create_url = true;
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn failing_navigate(mut self) -> Self {
        self.fail_navigate = true;
        self
    }

    pub fn failing_download(mut self) -> Self {
        self.fail_download = true;
        self
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.fail_clipboard = true;
        self
    }

    pub fn failing_legacy_copy(mut self) -> Self {
        self.fail_legacy_copy = true;
        self
    }

    /// Run `f` over the recorded activity.
    pub fn inspect<T>(&self, f: impl FnOnce(&SurfaceLog) -> T) -> T {
        let log = self.log.lock().unwrap();
        f(&log)
    }

    pub fn download_count(&self) -> usize {
        self.inspect(|log| log.downloads.len())
    }

    pub fn opened_count(&self) -> usize {
        self.inspect(|log| log.opened.len())
    }

    pub fn revoked_count(&self) -> usize {
        self.inspect(|log| log.revoked_urls.len())
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliverySurface for MockSurface {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn supports_native_download(&self) -> bool {
        self.native_download
    }

    fn is_secure_context(&self) -> bool {
        self.secure_context
    }

    fn create_object_url(&self, _data: &[u8], mime: &str) -> ExportResult<ObjectUrl> {
        if self.fail_create_url {
            return Err(ExportError::DeliveryBlocked(
                "object URL creation refused".to_string(),
            ));
        }

        let id = self.next_url_id.fetch_add(1, Ordering::Relaxed);
        let url = format!("blob:mock/{}", id);
        let mut log = self.log.lock().unwrap();
        log.created_urls.push((url.clone(), mime.to_string()));
        Ok(ObjectUrl::new(url))
    }

    fn revoke_object_url(&self, url: &ObjectUrl) {
        let mut log = self.log.lock().unwrap();
        log.revoked_urls.push(url.as_str().to_string());
    }

    fn open_in_new_context(&self, url: &str) -> ExportResult<()> {
        if self.fail_open {
            return Err(ExportError::DeliveryBlocked("popup suppressed".to_string()));
        }

        let mut log = self.log.lock().unwrap();
        log.opened.push(url.to_string());
        Ok(())
    }

    fn navigate_current(&self, url: &str) -> ExportResult<()> {
        if self.fail_navigate {
            return Err(ExportError::DeliveryBlocked(
                "navigation refused".to_string(),
            ));
        }

        let mut log = self.log.lock().unwrap();
        log.navigated.push(url.to_string());
        Ok(())
    }

    fn trigger_download(&self, url: &str, file_name: &str) -> ExportResult<()> {
        if self.fail_download {
            return Err(ExportError::DeliveryBlocked(
                "download suppressed".to_string(),
            ));
        }

        let mut log = self.log.lock().unwrap();
        log.downloads.push((url.to_string(), file_name.to_string()));
        Ok(())
    }

    async fn clipboard_write(&self, text: &str) -> ExportResult<()> {
        if self.fail_clipboard {
            return Err(ExportError::ClipboardUnavailable(
                "clipboard API threw".to_string(),
            ));
        }

        let mut log = self.log.lock().unwrap();
        log.clipboard_writes.push(text.to_string());
        Ok(())
    }

    fn legacy_copy(&self, text: &str) -> ExportResult<()> {
        if self.fail_legacy_copy {
            return Err(ExportError::ClipboardUnavailable(
                "copy command rejected".to_string(),
            ));
        }

        let mut log = self.log.lock().unwrap();
        log.legacy_copies.push(text.to_string());
        Ok(())
    }
}
