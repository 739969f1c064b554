//! Build command implementation.
//!
//! Generates every flag listed in one or more `flags.yaml` manifests and
//! writes an `index.json` for the viewer's country selector.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::country::iso_code;
use crate::discovery::{discover, LoadedManifest};
use crate::error::{FlagError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_atomic, write_svg};
use crate::types::FlagDocument;

use super::generate::prepare;

/// Name of the listing written next to the SVGs.
pub const INDEX_FILENAME: &str = "index.json";

/// Build all flags from manifest files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output directory, overriding each manifest's `output`
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip writing index.json
    #[arg(long)]
    pub no_index: bool,
}

/// One generated flag in `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    pub country: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    pub width: f64,
    pub height: f64,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifests = discover(&args.paths)?;
    let mut total = 0;

    for loaded in &manifests {
        let output = args.output.clone().unwrap_or_else(|| loaded.output_dir());
        let write_index = loaded.manifest.index && !args.no_index;
        total += build_manifest(loaded, &output, write_index, printer)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(total, "flag", "flags"),
            plural(manifests.len(), "manifest", "manifests")
        ),
    );

    Ok(())
}

/// Generate one manifest's flags into `output`. Returns the flag count.
///
/// Every flag is laid out and validated before the first file is written.
fn build_manifest(
    loaded: &LoadedManifest,
    output: &Path,
    write_index: bool,
    printer: &Printer,
) -> Result<usize> {
    printer.info("Building", &display_path(&loaded.path));

    let naming = loaded.manifest.naming;
    let mut seen = HashSet::new();
    let mut prepared: Vec<(String, FlagDocument)> = Vec::new();

    for spec in &loaded.manifest.flags {
        let stem = naming.stem(&spec.country)?;
        if !seen.insert(stem.clone()) {
            return Err(FlagError::InvalidArgument {
                message: format!("two flags in {} would both write {}.svg", loaded.path.display(), stem),
                help: Some("Give each flag a distinct country name".to_string()),
            });
        }
        prepared.push((stem, prepare(spec, printer)?));
    }

    fs::create_dir_all(output).map_err(|e| FlagError::Io {
        path: output.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut index = Vec::with_capacity(prepared.len());
    for (spec, (stem, document)) in loaded.manifest.flags.iter().zip(&prepared) {
        let path = write_svg(document, output, stem)?;
        printer.status("Wrote", &display_path(&path));

        index.push(IndexEntry {
            country: spec.country.clone(),
            file: format!("{}.svg", stem),
            iso: iso_code(&spec.country).map(str::to_string),
            width: spec.width,
            height: spec.height,
        });
    }

    if write_index {
        let path = output.join(INDEX_FILENAME);
        write_atomic(&path, index_json(&index)?.as_bytes())?;
        printer.status("Indexed", &format!("{} in {}", plural(index.len(), "flag", "flags"), display_path(&path)));
    }

    Ok(prepared.len())
}

/// Pretty-printed `index.json` content.
pub fn index_json(entries: &[IndexEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries).map_err(|e| FlagError::Parse {
        message: format!("Failed to serialize index: {}", e),
        help: None,
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r##"
output: out
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
    colours: [white, "BC002D"]
"##;

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    fn build_args(paths: Vec<PathBuf>) -> BuildArgs {
        BuildArgs {
            paths,
            output: None,
            no_index: false,
        }
    }

    #[test]
    fn test_build_writes_flags_and_index() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("flags.yaml"), MANIFEST).unwrap();

        run(build_args(vec![dir.path().to_path_buf()]), &quiet()).unwrap();

        let out = dir.path().join("out");
        assert!(out.join("france.svg").exists());
        assert!(out.join("japan.svg").exists());

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(INDEX_FILENAME)).unwrap()).unwrap();
        assert_eq!(index[0]["country"], "France");
        assert_eq!(index[0]["file"], "france.svg");
        assert_eq!(index[1]["iso"], "jp");
        assert_eq!(index[1]["width"], 30.0);
    }

    #[test]
    fn test_build_output_override_and_no_index() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("europe.flags.yaml");
        fs::write(&manifest, MANIFEST).unwrap();
        let out = dir.path().join("elsewhere");

        let args = BuildArgs {
            paths: vec![manifest],
            output: Some(out.clone()),
            no_index: true,
        };
        run(args, &quiet()).unwrap();

        assert!(out.join("france.svg").exists());
        assert!(!out.join(INDEX_FILENAME).exists());
    }

    #[test]
    fn test_build_invalid_flag_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("flags.yaml"),
            r#"
flags:
  - { country: Laos, width: 18, height: 15, colours: [black] }
  - country: Bad
    width: 10
    height: 10
    directives:
      - { type: circle, cx: 50, cy: 5, r: 2 }
    colours: [white, red]
"#,
        )
        .unwrap();

        let result = run(build_args(vec![dir.path().to_path_buf()]), &quiet());

        assert!(matches!(result, Err(FlagError::Validation { .. })));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_build_rejects_duplicate_file_names() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("flags.yaml"),
            r#"
flags:
  - { country: Laos, width: 18, height: 15, colours: [black] }
  - { country: LAOS, width: 18, height: 15, colours: [white] }
"#,
        )
        .unwrap();

        assert!(matches!(
            run(build_args(vec![dir.path().to_path_buf()]), &quiet()),
            Err(FlagError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_index_json_omits_unknown_iso() {
        let json = index_json(&[IndexEntry {
            country: "Atlantis".to_string(),
            file: "atlantis.svg".to_string(),
            iso: None,
            width: 3.0,
            height: 2.0,
        }])
        .unwrap();

        assert!(!json.contains("iso"));
        assert!(json.ends_with("}\n]\n"));
    }
}
