//! Descriptor scanner: one directory in, classified entries out.

use crate::config::DescriptorConfig;
use crate::control::{self, ControlPlane};
use crate::descriptor;
use crate::domain::{Entry, Scope};
use std::path::Path;
use tracing::debug;

/// Scan one directory for service descriptors.
///
/// A missing or unreadable directory yields an empty result. Files with no
/// extractable label, and labels under the reserved vendor prefix, are
/// skipped without materializing an entry. Status is resolved before an
/// entry is produced, so every returned entry is fully classified.
pub fn scan(dir: &Path, scope: Scope, control: &dyn ControlPlane) -> Vec<Entry> {
    let mut entries = Vec::new();

    for path in descriptor::list_descriptors(dir) {
        let Some(label) = descriptor::read_label(&path) else {
            debug!("Skipping descriptor without a label: {:?}", path);
            continue;
        };
        if label.starts_with(DescriptorConfig::RESERVED_VENDOR_PREFIX) {
            debug!("Skipping vendor descriptor {}", label);
            continue;
        }

        let status = control::resolve_status(control, &label);
        entries.push(Entry {
            scope,
            label,
            status,
            path,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Registration;
    use crate::domain::{EnablementDomain, LoadStatus};
    use crate::error::Result;
    use std::collections::{HashMap, HashSet};
    use std::fs;
    use tempfile::TempDir;

    struct FakeControlPlane {
        registrations: HashMap<String, Registration>,
    }

    impl ControlPlane for FakeControlPlane {
        fn registration(&self, label: &str) -> Option<Registration> {
            self.registrations.get(label).copied()
        }

        fn disabled_labels(&self, _domain: EnablementDomain) -> Result<HashSet<String>> {
            Ok(HashSet::new())
        }

        fn load(&self, _path: &Path, _elevated: bool, _persist: bool) -> Result<()> {
            Ok(())
        }

        fn unload(&self, _path: &Path, _elevated: bool) -> Result<()> {
            Ok(())
        }
    }

    fn write_plist(dir: &Path, file_name: &str, label: &str) {
        let content = format!(
            "<?xml version=\"1.0\"?>\n<plist version=\"1.0\">\n<dict>\n\
             \t<key>Label</key>\n\t<string>{label}</string>\n</dict>\n</plist>\n"
        );
        fs::write(dir.join(file_name), content).unwrap();
    }

    #[test]
    fn test_scan_classifies_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        write_plist(temp_dir.path(), "com.example.foo.plist", "com.example.foo");
        write_plist(temp_dir.path(), "com.apple.bar.plist", "com.apple.bar");
        fs::write(temp_dir.path().join("empty.plist"), "<plist/>").unwrap();

        let mut registrations = HashMap::new();
        registrations.insert("com.example.foo".to_string(), Registration { pid: Some(7) });
        let control = FakeControlPlane { registrations };

        let entries = scan(temp_dir.path(), Scope::UserAgent, &control);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "com.example.foo");
        assert_eq!(entries[0].status, LoadStatus::Running);
        assert_eq!(entries[0].scope, Scope::UserAgent);
    }

    #[test]
    fn test_vendor_prefix_never_materializes() {
        let temp_dir = TempDir::new().unwrap();
        write_plist(temp_dir.path(), "com.apple.thing.plist", "com.apple.thing");

        let control = FakeControlPlane {
            registrations: HashMap::new(),
        };
        assert!(scan(temp_dir.path(), Scope::GlobalDaemon, &control).is_empty());
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let temp_dir = TempDir::new().unwrap();
        let control = FakeControlPlane {
            registrations: HashMap::new(),
        };
        let entries = scan(
            &temp_dir.path().join("absent"),
            Scope::GlobalAgent,
            &control,
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_unregistered_labels_are_unloaded() {
        let temp_dir = TempDir::new().unwrap();
        write_plist(temp_dir.path(), "com.example.idle.plist", "com.example.idle");

        let control = FakeControlPlane {
            registrations: HashMap::new(),
        };
        let entries = scan(temp_dir.path(), Scope::UserAgent, &control);
        assert_eq!(entries[0].status, LoadStatus::Unloaded);
    }
}
