//! Presenter: renders an inventory into the six-section report and the
//! display-number mapping consumed by the next selection.

use crate::config::DisplayConfig;
use crate::control::{self, ControlPlane};
use crate::domain::{LoadStatus, Scope};
use crate::inventory::Inventory;
use std::fmt::Write as FmtWrite;

const SCOPE_ORDER: [Scope; 3] = [Scope::UserAgent, Scope::GlobalAgent, Scope::GlobalDaemon];

/// Map from a 1-based display number to an index into the inventory it was
/// rendered from.
///
/// Valid for one selection against that same inventory only; every render
/// produces a fresh mapping and any rebuild invalidates the old one.
#[derive(Debug)]
pub struct DisplayMapping {
    indices: Vec<usize>,
}

impl DisplayMapping {
    /// Resolve a display number to an inventory index.
    pub fn entry_index(&self, display_number: usize) -> Option<usize> {
        display_number
            .checked_sub(1)
            .and_then(|i| self.indices.get(i))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Render the inventory into a text report and its display mapping.
///
/// Buckets appear in the fixed order UserAgent/Loaded, UserAgent/Unloaded,
/// GlobalAgent/Loaded, GlobalAgent/Unloaded, GlobalDaemon/Loaded,
/// GlobalDaemon/Unloaded; Running collapses into the Loaded bucket.
/// Numbering starts at 1 and is contiguous across all six buckets.
/// Enablement is queried per visible entry at render time, independent of
/// load status.
pub fn render(inventory: &Inventory, control: &dyn ControlPlane) -> (String, DisplayMapping) {
    let mut report = String::new();
    let mut indices = Vec::new();

    for (group, scope) in SCOPE_ORDER.iter().enumerate() {
        if group > 0 {
            writeln!(report, "{}", DisplayConfig::GROUP_SEPARATOR).unwrap();
        }
        for loaded_bucket in [true, false] {
            let bucket_name = if loaded_bucket { "Loaded" } else { "Unloaded" };
            writeln!(report, "{} | {}", scope.group_name(), bucket_name).unwrap();

            for (index, entry) in inventory.entries().iter().enumerate() {
                if entry.scope != *scope || in_loaded_bucket(entry.status) != loaded_bucket {
                    continue;
                }
                let marker = if control::is_enabled_at_boot(control, &entry.label, entry.scope) {
                    DisplayConfig::ENABLED_MARKER
                } else {
                    ""
                };
                indices.push(index);
                writeln!(report, "  {}. {}{}", indices.len(), entry.label, marker).unwrap();
            }
        }
    }

    (report, DisplayMapping { indices })
}

fn in_loaded_bucket(status: LoadStatus) -> bool {
    status.is_registered()
}
