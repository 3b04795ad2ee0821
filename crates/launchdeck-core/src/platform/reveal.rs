//! Reveal a descriptor in the platform file browser.

use crate::error::{LaunchdeckError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Open the file browser with `path` selected.
///
/// # Platform Behavior
/// - **macOS**: `open -R <path>` (Finder, file selected)
/// - **Linux**: `xdg-open <parent>` (file managers cannot portably select)
/// - **Windows**: `explorer /select,<path>`
///
/// A path that no longer exists is an error; the caller reports it once
/// and moves on without retrying.
pub fn reveal_in_file_browser(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LaunchdeckError::Io {
            message: "path no longer exists".to_string(),
            path: Some(path.to_path_buf()),
            source: None,
        });
    }

    let mut cmd = reveal_command(path);
    debug!("Revealing {:?}", path);
    let status = cmd
        .status()
        .map_err(|e| LaunchdeckError::io_with_path(e, path))?;
    if !status.success() {
        return Err(LaunchdeckError::Io {
            message: format!("file browser exited with {status}"),
            path: Some(path.to_path_buf()),
            source: None,
        });
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg("-R").arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("explorer");
    cmd.arg(format!("/select,{}", path.display()));
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path.parent().unwrap_or(path));
    cmd
}
