//! String-matching environment detection.

use super::{EnvironmentProbe, EnvironmentProfile};
use crate::delivery::DeliverySurface;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Keywords whose presence marks a mobile client.
static MOBILE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini")
        .expect("Failed to compile mobile keyword regex")
});

/// Derive an [`EnvironmentProfile`] from a client identification string.
///
/// All matching is case-insensitive. An empty or malformed string yields
/// every string-derived flag false. `supports_native_download` is supplied
/// by the caller from a feature probe — capability, never sniffed.
///
/// The Safari check excludes strings that also identify as Chrome or
/// Android: "safari" is a substring of many non-Safari identification
/// strings, so without the exclusion every Chrome client would read as
/// Safari.
pub fn profile_from_user_agent(
    user_agent: &str,
    supports_native_download: bool,
) -> EnvironmentProfile {
    let ua = user_agent.to_lowercase();

    let is_android = ua.contains("android");
    let is_ios = ua.contains("ipad") || ua.contains("iphone") || ua.contains("ipod");
    let is_safari = ua.contains("safari") && !ua.contains("chrome") && !is_android;
    let is_mobile = MOBILE_KEYWORDS.is_match(user_agent);

    EnvironmentProfile {
        is_mobile,
        is_ios,
        is_android,
        is_safari,
        supports_native_download,
    }
}

/// The production probe: string matching over the surface's identification
/// string, plus the surface's download-capability feature probe.
pub struct UserAgentProbe {
    surface: Arc<dyn DeliverySurface>,
}

impl UserAgentProbe {
    /// Create a probe backed by the given delivery surface.
    pub fn new(surface: Arc<dyn DeliverySurface>) -> Self {
        Self { surface }
    }
}

impl EnvironmentProbe for UserAgentProbe {
    fn profile(&self) -> EnvironmentProfile {
        profile_from_user_agent(
            &self.surface.user_agent(),
            self.surface.supports_native_download(),
        )
    }
}
