//! Runtime environment detection.
//!
//! The delivery policy needs to know what kind of client it is serving, but
//! it must not care how that knowledge was obtained. [`EnvironmentProbe`] is
//! that seam: [`UserAgentProbe`] backs it with identification-string
//! matching in production, [`StaticProbe`] with literal flags for tests and
//! for embedders that already know their platform.

pub mod user_agent;

use serde::Serialize;

pub use user_agent::{profile_from_user_agent, UserAgentProbe};

/// A read-only snapshot of the requesting client.
///
/// Computed fresh on each export request — detection is cheap and the
/// profile must never go stale across a context change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EnvironmentProfile {
    /// A mobile-keyword matched the identification string
    pub is_mobile: bool,

    /// iPad, iPhone, or iPod
    pub is_ios: bool,

    /// Android
    pub is_android: bool,

    /// Safari proper (strings also identifying as Chrome or Android excluded)
    pub is_safari: bool,

    /// The delivery surface exposes a download-triggering capability
    pub supports_native_download: bool,
}

impl EnvironmentProfile {
    /// Clients for which opening the document as a navigable resource is
    /// more reliable than the download attribute.
    pub fn prefers_navigation(&self) -> bool {
        self.is_safari || self.is_ios || self.is_android
    }
}

/// Capability probe producing the profile of the current client.
pub trait EnvironmentProbe: Send + Sync {
    /// Snapshot the environment. Called once per export invocation.
    fn profile(&self) -> EnvironmentProfile;
}

/// A probe backed by literal injected flags.
///
/// Decouples the delivery policy from any particular detection technique;
/// tests use it to pin the environment exactly.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe {
    profile: EnvironmentProfile,
}

impl StaticProbe {
    /// Create a probe that always reports `profile`.
    pub fn new(profile: EnvironmentProfile) -> Self {
        Self { profile }
    }
}

impl EnvironmentProbe for StaticProbe {
    fn profile(&self) -> EnvironmentProfile {
        self.profile
    }
}
