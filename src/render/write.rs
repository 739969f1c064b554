//! Atomic SVG output.
//!
//! The document is written to a temporary file in the target directory and
//! then renamed into place, so a failed write never leaves a partial file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{FlagError, Result};
use crate::types::FlagDocument;

use super::to_svg;

/// Write `document` to `<dir>/<stem>.svg` and return the final path.
///
/// `dir` must already exist.
pub fn write_svg(document: &FlagDocument, dir: &Path, stem: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.svg", stem));
    write_atomic(&path, to_svg(document).as_bytes())?;
    Ok(path)
}

/// Replace `path` with `contents` via a sibling temporary file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |e: std::io::Error| FlagError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(FlagError::WriteError {
            path: path.to_path_buf(),
            message: format!("output directory {} does not exist", dir.display()),
        });
    }

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::types::{Colour, FlagSpec};
    use tempfile::tempdir;

    fn solid() -> FlagDocument {
        layout(&FlagSpec::new("x", 3.0, 2.0).with_colours([Colour::BLACK])).unwrap()
    }

    #[test]
    fn test_write_svg() {
        let dir = tempdir().unwrap();
        let path = write_svg(&solid(), dir.path(), "libya-1977").unwrap();

        assert_eq!(path, dir.path().join("libya-1977.svg"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_svg(&solid()));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.svg");
        std::fs::write(&path, "stale").unwrap();

        write_svg(&solid(), dir.path(), "x").unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<svg"));
    }

    #[test]
    fn test_missing_directory_fails_cleanly() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = write_svg(&solid(), &missing, "x").unwrap_err();
        assert!(matches!(err, FlagError::WriteError { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = tempdir().unwrap();
        write_svg(&solid(), dir.path(), "a").unwrap();
        write_svg(&solid(), dir.path(), "b").unwrap();

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.svg", "b.svg"]);
    }
}
