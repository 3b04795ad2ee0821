//! Control-plane client for the service manager.
//!
//! The session talks to launchd exclusively through the [`ControlPlane`]
//! trait so the classification and rendering logic can be driven with
//! canned registration data in tests. [`Launchctl`] is the real
//! implementation, shelling out to `launchctl` (under `sudo` for
//! system-scope mutations). Every call blocks to completion; there is no
//! timeout on the underlying binary.

use crate::domain::{EnablementDomain, LoadStatus, Scope};
use crate::error::{LaunchdeckError, Result};
use crate::platform;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;
use tracing::{debug, warn};

static PID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""PID"\s*=\s*(\d+)\s*;"#).unwrap());

static DISABLED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*=>\s*(?:true|disabled)"#).unwrap());

/// Registration state the control plane reports for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Identifier of the active process, when one exists.
    pub pid: Option<i64>,
}

/// Narrow interface over the service manager.
pub trait ControlPlane {
    /// Query registration for a label. `None` means not registered, which
    /// is a normal outcome rather than a failure.
    fn registration(&self, label: &str) -> Option<Registration>;

    /// Labels explicitly flagged disabled-at-boot in the given registry.
    /// The registry tracks exceptions only; an absent label is enabled.
    fn disabled_labels(&self, domain: EnablementDomain) -> Result<HashSet<String>>;

    /// Register a descriptor. `persist` additionally marks it enabled at
    /// next startup.
    fn load(&self, path: &Path, elevated: bool, persist: bool) -> Result<()>;

    /// Unregister a descriptor.
    fn unload(&self, path: &Path, elevated: bool) -> Result<()>;
}

/// Classify a label's runtime state.
pub fn resolve_status(control: &dyn ControlPlane, label: &str) -> LoadStatus {
    match control.registration(label) {
        Some(reg) if reg.pid.is_some_and(|pid| pid > 0) => LoadStatus::Running,
        Some(_) => LoadStatus::Loaded,
        None => LoadStatus::Unloaded,
    }
}

/// Whether a label starts at next boot/login.
///
/// The registry only records exceptions, so an absent label reads as
/// enabled. A failed query also reads as enabled: fail-open keeps a flaky
/// registry from reporting services as disabled when they are not.
pub fn is_enabled_at_boot(control: &dyn ControlPlane, label: &str, scope: Scope) -> bool {
    match control.disabled_labels(scope.enablement_domain()) {
        Ok(disabled) => !disabled.contains(label),
        Err(e) => {
            warn!("Boot-enablement query failed for {}: {}", label, e);
            true
        }
    }
}

/// Real control plane backed by the `launchctl` binary.
pub struct Launchctl;

impl Launchctl {
    fn command(elevated: bool) -> Command {
        if elevated {
            let mut cmd = Command::new("sudo");
            cmd.arg("launchctl");
            cmd
        } else {
            Command::new("launchctl")
        }
    }

    fn run_expecting_success(mut cmd: Command, action: &str) -> Result<()> {
        let output = cmd.output().map_err(|e| {
            LaunchdeckError::control_plane(format!("failed to invoke launchctl {action}: {e}"))
        })?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        Err(LaunchdeckError::control_plane(if detail.is_empty() {
            format!("launchctl {action} failed")
        } else {
            format!("launchctl {action} failed: {detail}")
        }))
    }
}

impl ControlPlane for Launchctl {
    fn registration(&self, label: &str) -> Option<Registration> {
        let output = match Command::new("launchctl").args(["list", label]).output() {
            Ok(o) => o,
            Err(e) => {
                warn!("Failed to invoke launchctl list: {}", e);
                return None;
            }
        };

        // Unregistered labels exit nonzero; that is the expected shape of
        // "absent", not an error.
        if !output.status.success() {
            debug!("Label {} is not registered", label);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Some(Registration {
            pid: parse_pid(&stdout),
        })
    }

    fn disabled_labels(&self, domain: EnablementDomain) -> Result<HashSet<String>> {
        let target = match domain {
            EnablementDomain::User => format!("user/{}", platform::current_uid()),
            EnablementDomain::System => "system".to_string(),
        };

        let output = Command::new("launchctl")
            .args(["print-disabled", &target])
            .output()
            .map_err(|e| {
                LaunchdeckError::control_plane(format!(
                    "failed to invoke launchctl print-disabled: {e}"
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LaunchdeckError::control_plane(format!(
                "launchctl print-disabled {} failed: {}",
                target,
                stderr.trim()
            )));
        }

        Ok(parse_disabled(&String::from_utf8_lossy(&output.stdout)))
    }

    fn load(&self, path: &Path, elevated: bool, persist: bool) -> Result<()> {
        let mut cmd = Self::command(elevated);
        cmd.arg("load");
        if persist {
            cmd.arg("-w");
        }
        cmd.arg(path);
        Self::run_expecting_success(cmd, "load")
    }

    fn unload(&self, path: &Path, elevated: bool) -> Result<()> {
        let mut cmd = Self::command(elevated);
        cmd.arg("unload").arg(path);
        Self::run_expecting_success(cmd, "unload")
    }
}

/// Pull the active-process identifier out of `launchctl list <label>` output.
fn parse_pid(output: &str) -> Option<i64> {
    PID_PATTERN
        .captures(output)
        .and_then(|caps| caps[1].parse().ok())
}

/// Collect disabled labels from `launchctl print-disabled` output.
fn parse_disabled(output: &str) -> HashSet<String> {
    DISABLED_PATTERN
        .captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}
