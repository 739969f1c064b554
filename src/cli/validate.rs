//! Validate command implementation.
//!
//! Checks every flag in the given manifests without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::{FlagError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_spec};

/// Validate manifests without writing any SVGs
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let manifests = discover(&args.paths)?;

    let mut flags = 0;
    let mut errors = 0;
    let mut warnings = 0;

    for loaded in &manifests {
        printer.info("Checking", &display_path(&loaded.path));

        for spec in &loaded.manifest.flags {
            flags += 1;
            let result = validate_spec(spec);

            if !result.is_ok() {
                printer.warning("Flag", &spec.country);
                print_diagnostics(&result, printer);
            }
            errors += result.error_count();
            warnings += result.warning_count();
        }
    }

    let summary = format!(
        "{}: {}, {}",
        plural(flags, "flag", "flags"),
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 || (args.strict && warnings > 0) {
        return Err(FlagError::Validation {
            message: summary,
            help: args
                .strict
                .then(|| "Warnings count as errors under --strict".to_string()),
        });
    }

    printer.status("Validated", &summary);
    Ok(())
}
