//! Flag manifest (`flags.yaml`) parsing.
//!
//! A manifest describes a batch of flags plus where and how to write them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::country::{file_stem, iso_code};
use crate::error::{FlagError, Result};
use crate::types::FlagSpec;

/// How output files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// Normalized country name, e.g. `united-kingdom.svg`.
    #[default]
    Name,
    /// ISO 3166-1 alpha-2 code, e.g. `gb.svg`.
    Iso,
}

impl Naming {
    /// File stem for a country under this naming scheme.
    pub fn stem(self, country: &str) -> Result<String> {
        let stem = match self {
            Naming::Name => file_stem(country),
            Naming::Iso => iso_code(country)
                .map(str::to_string)
                .ok_or_else(|| FlagError::InvalidArgument {
                    message: format!("no ISO code known for country '{}'", country),
                    help: Some("Run `vexil countries` to list known names, or drop --iso".to_string()),
                })?,
        };

        if stem.is_empty() {
            return Err(FlagError::InvalidArgument {
                message: format!("country '{}' gives an empty file name", country),
                help: Some("Use a country name with at least one letter or digit".to_string()),
            });
        }
        Ok(stem)
    }
}

/// Manifest loaded from `flags.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Output directory, relative to the manifest's directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub naming: Naming,

    /// Whether `build` writes an `index.json` next to the SVGs.
    #[serde(default = "default_index")]
    pub index: bool,

    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

fn default_output() -> PathBuf {
    PathBuf::from("public/flags")
}

fn default_index() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            naming: Naming::default(),
            index: default_index(),
            flags: Vec::new(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FlagError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            FlagError::Parse { message, help } => FlagError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    /// Parse a manifest from YAML. An empty document is the default manifest.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| FlagError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check flags.yaml syntax; directives need a `type` such as stripe-set or circle".to_string()),
        })
    }

    /// Output directory resolved against the manifest's directory.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}
