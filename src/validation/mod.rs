//! Validation of flag specifications.
//!
//! Runs geometry and colour checks against a `FlagSpec` and reports errors
//! and warnings. Used by `vexil validate`, and by `vexil generate` and
//! `vexil build` before anything is written.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::FlagSpec;

/// Run all validation checks against a spec.
pub fn validate_spec(spec: &FlagSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_canvas(spec));
    result.merge(checks::check_directives(spec));
    result.merge(checks::check_colours(spec));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        eprintln!("  {}[{}]: {}", label, d.code, d);
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Directive, Orientation};

    #[test]
    fn test_valid_spec() {
        let spec = FlagSpec::new("FRANCE", 3.0, 2.0)
            .with(Directive::StripeSet {
                orientation: Orientation::Vertical,
                ratios: vec![1.0; 3],
            })
            .with_colours([
                Colour::from_hex("000091").unwrap(),
                Colour::WHITE,
                Colour::from_hex("E1000F").unwrap(),
            ]);
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_solid_flag_is_valid() {
        let spec = FlagSpec::new("laos", 18.0, 15.0).with_colours([Colour::BLACK]);
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_collects_all_problems() {
        let spec = FlagSpec::new("x", -1.0, 20.0).with(Directive::Circle {
            cx: 5.0,
            cy: 5.0,
            r: 0.0,
        });
        let result = validate_spec(&spec);
        // canvas width, circle radius, centre outside a negative-width canvas, colours
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn test_fixture_manifest_has_no_errors() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/flags.yaml");
        let manifest = crate::discovery::Manifest::load(&path).unwrap();

        for spec in &manifest.flags {
            let result = validate_spec(spec);
            assert!(!result.has_errors(), "{}: {:?}", spec.country, result);
            crate::layout::layout(spec).unwrap();
        }
    }
}
