//! File system scanner for flag manifests.
//!
//! Walks directories for `flags.yaml` and `*.flags.yaml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::MANIFEST_FILENAME;

/// Suffix for additional manifests in the same directory tree.
pub const MANIFEST_SUFFIX: &str = ".flags.yaml";

/// Manifests found under the scanned paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Manifest files in walk order.
    pub manifests: Vec<PathBuf>,
    /// Paths that were given but do not exist.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.manifests.extend(other.manifests);
        self.missing.extend(other.missing);
    }
}

/// Whether a file name marks a flag manifest.
pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name == MANIFEST_FILENAME || name.ends_with(MANIFEST_SUFFIX))
}

/// Recursively find manifests under `root`, sorted by file name per directory.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        result.missing.push(root.to_path_buf());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && is_manifest(entry.path()) {
            result.manifests.push(entry.into_path());
        }
    }

    result
}

/// Scan a mix of manifest files and directories.
///
/// Files are taken as given, whatever their name; directories are walked.
pub fn scan_paths(paths: &[PathBuf]) -> ScanResult {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_file() {
            result.manifests.push(path.clone());
        } else if path.is_dir() {
            result.merge(scan_directory(path));
        } else {
            result.missing.push(path.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_manifest() {
        assert!(is_manifest(Path::new("flags.yaml")));
        assert!(is_manifest(Path::new("a/b/europe.flags.yaml")));
        assert!(!is_manifest(Path::new("flags.yml")));
        assert!(!is_manifest(Path::new("other.yaml")));
    }

    #[test]
    fn test_scan_directory_recurses() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("asia")).unwrap();
        fs::write(dir.path().join("flags.yaml"), "").unwrap();
        fs::write(dir.path().join("asia/east.flags.yaml"), "").unwrap();
        fs::write(dir.path().join("asia/notes.txt"), "").unwrap();

        let result = scan_directory(dir.path());

        assert_eq!(result.manifests.len(), 2);
        assert!(result.manifests.iter().all(|p| is_manifest(p)));
    }

    #[test]
    fn test_scan_paths_reports_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("custom.yaml");
        fs::write(&file, "").unwrap();
        let missing = dir.path().join("nope");

        let result = scan_paths(&[file.clone(), missing.clone()]);

        assert_eq!(result.manifests, vec![file]);
        assert_eq!(result.missing, vec![missing]);
    }
}
