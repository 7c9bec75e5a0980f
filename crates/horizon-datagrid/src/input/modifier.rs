//! Platform-dependent primary-modifier resolution.
//!
//! Every shortcut in the grid is a chord on one platform-appropriate
//! modifier: Command on Mac-family platforms, Control everywhere else.
//! Resolving that choice once at startup keeps the chord-matching logic
//! platform-agnostic — handlers only ever ask "is the primary modifier
//! held?".

use std::sync::OnceLock;

use super::events::KeyboardModifiers;

/// Platform identification, as reported by the host environment.
///
/// A structured platform identifier is preferred when available; the
/// free-text agent string is the fallback. Mac-family detection is a
/// case-insensitive `"mac"` substring match on whichever source is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Structured platform identifier (e.g. `"macos"`, `"linux"`),
    /// if the host exposes one.
    pub platform: Option<String>,
    /// Free-text agent/host description used when no structured
    /// identifier is available.
    pub agent: String,
}

impl PlatformInfo {
    /// Describe the process's own host platform.
    pub fn host() -> Self {
        Self {
            platform: Some(std::env::consts::OS.to_string()),
            agent: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    /// Whether this platform is Mac-family.
    pub fn is_mac_family(&self) -> bool {
        match &self.platform {
            Some(platform) => platform.to_lowercase().contains("mac"),
            None => self.agent.to_lowercase().contains("mac"),
        }
    }
}

/// The platform's primary shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryModifier {
    /// Control-equivalent key (non-Mac platforms).
    Control,
    /// Command-equivalent key (Mac-family platforms).
    Command,
}

impl PrimaryModifier {
    /// Resolve the primary modifier for the given platform.
    pub fn resolve(platform: &PlatformInfo) -> Self {
        if platform.is_mac_family() {
            Self::Command
        } else {
            Self::Control
        }
    }

    /// The primary modifier of the process's host platform.
    ///
    /// Resolved once and cached for the process lifetime — the platform
    /// does not change mid-session.
    pub fn for_host() -> Self {
        static HOST: OnceLock<PrimaryModifier> = OnceLock::new();
        *HOST.get_or_init(|| {
            if cfg!(target_os = "macos") {
                Self::Command
            } else {
                Self::resolve(&PlatformInfo::host())
            }
        })
    }

    /// Whether this modifier is held in the given modifier state.
    pub fn is_held(self, modifiers: &KeyboardModifiers) -> bool {
        match self {
            Self::Control => modifiers.control,
            Self::Command => modifiers.meta,
        }
    }
}
