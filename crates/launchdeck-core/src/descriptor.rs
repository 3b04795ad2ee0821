//! Descriptor file store: launchd property lists on disk.
//!
//! Read side is deliberately tolerant: a directory that does not exist
//! yields an empty listing, and a file without a readable `Label` string is
//! skipped without surfacing an error.

use crate::config::DescriptorConfig;
use crate::error::{LaunchdeckError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<key>\s*Label\s*</key>\s*<string>([^<]+)</string>").unwrap()
});

/// List descriptor files that are direct children of `dir`.
///
/// Subdirectories are not entered. The listing is sorted by file name so
/// repeated scans of an unchanged directory yield the same order.
pub fn list_descriptors(dir: &Path) -> Vec<PathBuf> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            debug!("Skipping unreadable directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == DescriptorConfig::FILE_EXTENSION)
        })
        .collect();
    paths.sort();
    paths
}

/// Extract the unique `Label` string from a descriptor file.
///
/// Returns `None` for unreadable files and files with no label pair; the
/// caller treats both as "not a conforming descriptor".
pub fn read_label(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to read descriptor {:?}: {}", path, e);
            return None;
        }
    };

    let label = LABEL_PATTERN
        .captures(&content)
        .map(|caps| caps[1].trim().to_string())?;
    if label.is_empty() {
        return None;
    }
    Some(label)
}

/// Remove a descriptor file.
pub fn delete(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| LaunchdeckError::io_with_path(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_plist(dir: &Path, file_name: &str, label: &str) -> PathBuf {
        let path = dir.join(file_name);
        let content = format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
                "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
                "<plist version=\"1.0\">\n",
                "<dict>\n",
                "\t<key>Label</key>\n",
                "\t<string>{}</string>\n",
                "\t<key>RunAtLoad</key>\n",
                "\t<true/>\n",
                "</dict>\n",
                "</plist>\n",
            ),
            label
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_directory_yields_empty_listing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");
        assert!(list_descriptors(&missing).is_empty());
    }

    #[test]
    fn test_listing_filters_extension_and_subdirs() {
        let temp_dir = TempDir::new().unwrap();
        write_plist(temp_dir.path(), "com.example.a.plist", "com.example.a");
        fs::write(temp_dir.path().join("notes.txt"), "not a descriptor").unwrap();
        fs::create_dir(temp_dir.path().join("nested.plist")).unwrap();

        let paths = list_descriptors(temp_dir.path());
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("com.example.a.plist"));
    }

    #[test]
    fn test_listing_is_sorted_by_file_name() {
        let temp_dir = TempDir::new().unwrap();
        write_plist(temp_dir.path(), "com.example.b.plist", "com.example.b");
        write_plist(temp_dir.path(), "com.example.a.plist", "com.example.a");

        let paths = list_descriptors(temp_dir.path());
        assert!(paths[0].ends_with("com.example.a.plist"));
        assert!(paths[1].ends_with("com.example.b.plist"));
    }

    #[test]
    fn test_read_label() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_plist(temp_dir.path(), "com.example.foo.plist", "com.example.foo");
        assert_eq!(read_label(&path), Some("com.example.foo".to_string()));
    }

    #[test]
    fn test_read_label_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.plist");
        fs::write(&path, "<plist><dict></dict></plist>").unwrap();
        assert_eq!(read_label(&path), None);
    }

    #[test]
    fn test_read_label_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.plist");
        assert_eq!(read_label(&path), None);
    }

    #[test]
    fn test_delete_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_plist(temp_dir.path(), "com.example.x.plist", "com.example.x");
        delete(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.plist");
        assert!(delete(&path).is_err());
    }
}
