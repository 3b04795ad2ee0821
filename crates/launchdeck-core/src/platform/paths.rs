//! Descriptor directory locations.

use crate::error::{LaunchdeckError, Result};
use std::path::PathBuf;

/// The current user's agent directory (`~/Library/LaunchAgents`).
pub fn user_agents_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| LaunchdeckError::Config {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join("Library").join("LaunchAgents"))
}

/// The system-wide agent directory.
pub fn global_agents_dir() -> PathBuf {
    PathBuf::from("/Library/LaunchAgents")
}

/// The system-wide daemon directory.
pub fn global_daemons_dir() -> PathBuf {
    PathBuf::from("/Library/LaunchDaemons")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agents_dir_is_under_home() {
        if let Ok(dir) = user_agents_dir() {
            assert!(dir.ends_with("Library/LaunchAgents"));
        }
    }

    #[test]
    fn test_global_dirs_are_absolute() {
        assert!(global_agents_dir().is_absolute());
        assert!(global_daemons_dir().is_absolute());
    }
}
