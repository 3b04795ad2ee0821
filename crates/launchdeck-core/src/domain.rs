//! Core domain types: scope, load status, and inventory entries.

use std::path::PathBuf;

/// Which descriptor directory an entry was discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Per-user agent (`~/Library/LaunchAgents`).
    UserAgent,
    /// System-wide agent (`/Library/LaunchAgents`).
    GlobalAgent,
    /// System-wide daemon (`/Library/LaunchDaemons`).
    GlobalDaemon,
}

impl Scope {
    /// Plural name used for the main-list section headers.
    pub fn group_name(&self) -> &'static str {
        match self {
            Scope::UserAgent => "User Agents",
            Scope::GlobalAgent => "Global Agents",
            Scope::GlobalDaemon => "Global Daemons",
        }
    }

    /// Singular name used in the detail view.
    pub fn describe(&self) -> &'static str {
        match self {
            Scope::UserAgent => "User Agent",
            Scope::GlobalAgent => "Global Agent",
            Scope::GlobalDaemon => "Global Daemon",
        }
    }

    /// Mutations on system-wide scopes must run elevated.
    pub fn requires_elevation(&self) -> bool {
        !matches!(self, Scope::UserAgent)
    }

    /// Which boot-enablement registry covers this scope.
    pub fn enablement_domain(&self) -> EnablementDomain {
        match self {
            Scope::UserAgent => EnablementDomain::User,
            Scope::GlobalAgent | Scope::GlobalDaemon => EnablementDomain::System,
        }
    }
}

/// Boot-enablement registry domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnablementDomain {
    /// The current user's registry.
    User,
    /// The system-wide registry.
    System,
}

/// Runtime state of a discovered entry.
///
/// `Running` and `Loaded` are both registered with the control plane;
/// `Running` additionally has an active process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Running,
    Loaded,
    Unloaded,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Running => "Running",
            LoadStatus::Loaded => "Loaded",
            LoadStatus::Unloaded => "Unloaded",
        }
    }

    /// True when the control plane knows the label (running or idle).
    pub fn is_registered(&self) -> bool {
        !matches!(self, LoadStatus::Unloaded)
    }
}

/// One discovered service descriptor.
#[derive(Debug, Clone)]
pub struct Entry {
    pub scope: Scope,
    pub label: String,
    pub status: LoadStatus,
    /// Filesystem identity; all control-plane and file operations use it.
    pub path: PathBuf,
}
