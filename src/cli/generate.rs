//! Generate command implementation.
//!
//! Lays out one flag from command-line directives and writes it as SVG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{local_manifest, Naming};
use crate::error::Result;
use crate::layout::layout;
use crate::output::{display_path, plural, Printer};
use crate::parser::SpecArgs;
use crate::render::{to_svg, write_svg};
use crate::types::{FlagDocument, FlagSpec};
use crate::validation::{print_diagnostics, validate_spec};

/// Generate one flag SVG
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Output directory (default: `output` from ./flags.yaml, else public/flags)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Name the file by ISO 3166-1 alpha-2 code instead of country name
    #[arg(long)]
    pub iso: bool,

    /// Print the SVG to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "iso"])]
    pub stdout: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let spec = args.spec.to_spec()?;
    let document = prepare(&spec, printer)?;

    if args.stdout {
        print!("{}", to_svg(&document));
        return Ok(());
    }

    let defaults = local_manifest(Path::new("."))?.unwrap_or_default();
    let dir = args.output.unwrap_or(defaults.output);
    let naming = if args.iso { Naming::Iso } else { defaults.naming };
    let stem = naming.stem(&spec.country)?;

    let path = write_svg(&document, &dir, &stem)?;
    printer.status("Wrote", &display_path(&path));

    Ok(())
}

/// Lay out and validate a spec, reporting diagnostics.
///
/// Nothing is written here; a spec with validation errors fails before any
/// output exists.
pub(crate) fn prepare(spec: &FlagSpec, printer: &Printer) -> Result<FlagDocument> {
    let document = layout(spec)?;

    let validation = validate_spec(spec);
    print_diagnostics(&validation, printer);
    validation.into_result()?;

    printer.status(
        "Generated",
        &format!(
            "{} ({}x{}, {}): {}",
            spec.country,
            spec.width,
            spec.height,
            plural(document.len(), "element", "elements"),
            spec.describe()
        ),
    );

    Ok(document)
}
