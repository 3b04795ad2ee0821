//! Platform layer for launchdeck.
//!
//! All OS-specific behavior lives here: the launchd descriptor
//! directories, the per-user control-plane domain, and revealing a path in
//! the file browser.

pub mod paths;
pub mod reveal;

pub use paths::{global_agents_dir, global_daemons_dir, user_agents_dir};
pub use reveal::reveal_in_file_browser;

use std::process::Command;
use tracing::debug;

/// Numeric uid of the current user, used to address the per-user
/// boot-enablement registry. Falls back to 0 when `id` is unavailable.
pub fn current_uid() -> u32 {
    let output = match Command::new("id").arg("-u").output() {
        Ok(o) => o,
        Err(e) => {
            debug!("Failed to invoke id -u: {}", e);
            return 0;
        }
    };
    if !output.status.success() {
        return 0;
    }
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_current_uid_parses() {
        // Whatever user runs the tests, `id -u` should agree with itself.
        let uid = current_uid();
        let again = current_uid();
        assert_eq!(uid, again);
    }
}
