//! Inventory: the full ordered collection of discovered entries.

use crate::config::Locations;
use crate::control::ControlPlane;
use crate::domain::Entry;
use crate::scanner;
use tracing::debug;

/// An ordered snapshot of every discovered entry.
///
/// Rebuilt wholesale on startup and after every mutating action; never
/// patched in place, and previously resolved status is never reused.
#[derive(Debug, Default)]
pub struct Inventory {
    entries: Vec<Entry>,
}

impl Inventory {
    /// Scan the three locations in fixed order and resolve every status
    /// from scratch. An unreadable directory contributes zero entries
    /// without aborting the others.
    pub fn rebuild(locations: &Locations, control: &dyn ControlPlane) -> Self {
        let mut entries = Vec::new();
        for (dir, scope) in locations.scan_order() {
            entries.extend(scanner::scan(dir, scope, control));
        }
        debug!("Inventory rebuilt: {} entries", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
