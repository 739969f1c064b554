//! Init command implementation.
//!
//! Writes a starter `flags.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{FlagError, Result};
use crate::output::{display_path, Printer};

/// Starter manifest; kept as text so the comments survive.
const STARTER: &str = r##"# Flags built by `vexil build`.
output: public/flags
naming: name      # or iso
index: true       # write index.json for the viewer

flags:
  - country: France
    width: 3
    height: 2
    directives:
      - { type: stripe-set, orientation: vertical, ratios: [1, 1, 1] }
    colours: ["#000091", "#FFFFFF", "#E1000F"]

  - country: Japan
    width: 30
    height: 20
    directives:
      - { type: circle, cx: 15, cy: 10, r: 6 }
    colours: [white, "#BC002D"]
"##;

/// Create a starter flags.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing flags.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FlagError::InvalidArgument {
            message: format!("{} already exists", display_path(&manifest_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, STARTER).map_err(|e| FlagError::WriteError {
        path: manifest_path.clone(),
        message: e.to_string(),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use crate::validation::validate_spec;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_init_creates_valid_manifest() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.flags.len(), 2);
        for spec in &manifest.flags {
            assert!(validate_spec(spec).is_ok(), "{}", spec.country);
        }
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: out").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &quiet()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: out").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: public/flags"));
    }
}
