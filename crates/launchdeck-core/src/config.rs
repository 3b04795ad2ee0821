//! Centralized configuration for launchdeck.
//!
//! There is no configuration file; everything the tool needs is either a
//! compile-time constant or derived from the environment at startup.

use crate::domain::Scope;
use crate::error::Result;
use crate::platform;
use std::path::{Path, PathBuf};

/// Descriptor file conventions.
pub struct DescriptorConfig;

impl DescriptorConfig {
    /// File extension of launchd service descriptors.
    pub const FILE_EXTENSION: &'static str = "plist";

    /// Labels with this prefix are vendor built-ins and never inventoried.
    pub const RESERVED_VENDOR_PREFIX: &'static str = "com.apple.";
}

/// Rendering conventions for the main list.
pub struct DisplayConfig;

impl DisplayConfig {
    /// Suffix appended to entries that are enabled at next startup.
    pub const ENABLED_MARKER: &'static str = " *";

    /// Separator printed between the three scope groups.
    pub const GROUP_SEPARATOR: &'static str = "----------------------------------------";
}

/// The three descriptor directories a session scans.
///
/// Constructed once at startup and held by the session; tests substitute
/// temp directories.
#[derive(Debug, Clone)]
pub struct Locations {
    pub user_agents: PathBuf,
    pub global_agents: PathBuf,
    pub global_daemons: PathBuf,
}

impl Locations {
    /// The standard launchd directories for the current user.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            user_agents: platform::paths::user_agents_dir()?,
            global_agents: platform::paths::global_agents_dir(),
            global_daemons: platform::paths::global_daemons_dir(),
        })
    }

    /// Directory/scope pairs in the fixed scan order.
    pub fn scan_order(&self) -> [(&Path, Scope); 3] {
        [
            (self.user_agents.as_path(), Scope::UserAgent),
            (self.global_agents.as_path(), Scope::GlobalAgent),
            (self.global_daemons.as_path(), Scope::GlobalDaemon),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_is_fixed() {
        let locations = Locations {
            user_agents: PathBuf::from("/a"),
            global_agents: PathBuf::from("/b"),
            global_daemons: PathBuf::from("/c"),
        };
        let order = locations.scan_order();
        assert_eq!(order[0].1, Scope::UserAgent);
        assert_eq!(order[1].1, Scope::GlobalAgent);
        assert_eq!(order[2].1, Scope::GlobalDaemon);
    }
}
