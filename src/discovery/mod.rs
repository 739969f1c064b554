//! Manifest discovery and loading.
//!
//! `vexil build` and `vexil validate` take manifest files or directories;
//! directories are scanned for `flags.yaml` and `*.flags.yaml`.
//!
//! # Example
//!
//! ```ignore
//! use vexil::discovery::discover;
//!
//! for loaded in discover(&["./site".into()])? {
//!     println!("{}: {} flags", loaded.path.display(), loaded.manifest.flags.len());
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{FlagError, Result};

pub use manifest::{Manifest, Naming};
pub use scanner::{is_manifest, scan_directory, scan_paths, ScanResult, MANIFEST_SUFFIX};

/// The name of the default manifest file.
pub const MANIFEST_FILENAME: &str = "flags.yaml";

/// A manifest together with where it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    /// Directory the manifest's relative paths resolve against.
    pub root: PathBuf,
    pub manifest: Manifest,
}

impl LoadedManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = Manifest::load(path)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            path: path.to_path_buf(),
            root,
            manifest,
        })
    }

    pub fn output_dir(&self) -> PathBuf {
        self.manifest.output_dir(&self.root)
    }
}

/// Find and load every manifest under `paths` (default: the current directory).
///
/// Fails on the first missing path or unreadable manifest, and when nothing
/// is found at all.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<LoadedManifest>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let scan = scan_paths(&paths);
    if let Some(missing) = scan.missing.first() {
        return Err(FlagError::Io {
            path: missing.clone(),
            message: "No such file or directory".to_string(),
        });
    }
    if scan.is_empty() {
        return Err(FlagError::InvalidArgument {
            message: format!("no {} found", MANIFEST_FILENAME),
            help: Some(format!(
                "Create a {} or pass manifest files explicitly",
                MANIFEST_FILENAME
            )),
        });
    }

    scan.manifests
        .iter()
        .map(|path| LoadedManifest::load(path))
        .collect()
}

/// The manifest in `dir`, if there is one.
pub fn local_manifest(dir: &Path) -> Result<Option<Manifest>> {
    let path = dir.join(MANIFEST_FILENAME);
    if path.is_file() {
        Manifest::load(&path).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_loads_manifests() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("flags.yaml"),
            "output: out\nflags:\n  - { country: Laos, width: 18, height: 15, colours: [black] }\n",
        )
        .unwrap();

        let loaded = discover(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].root, dir.path());
        assert_eq!(loaded[0].output_dir(), dir.path().join("out"));
        assert_eq!(loaded[0].manifest.flags[0].country, "Laos");
    }

    #[test]
    fn test_discover_empty_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            discover(&[dir.path().to_path_buf()]),
            Err(FlagError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_discover_missing_path_fails() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            discover(&[dir.path().join("gone")]),
            Err(FlagError::Io { .. })
        ));
    }

    #[test]
    fn test_discover_reports_bad_yaml_with_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("flags.yaml"), "flags: [").unwrap();

        match discover(&[dir.path().to_path_buf()]) {
            Err(FlagError::Parse { message, .. }) => assert!(message.contains("flags.yaml")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_local_manifest() {
        let dir = tempdir().unwrap();
        assert!(local_manifest(dir.path()).unwrap().is_none());

        fs::write(dir.path().join("flags.yaml"), "naming: iso\n").unwrap();
        let manifest = local_manifest(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.naming, Naming::Iso);
    }
}
