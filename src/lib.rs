//! vexil - Geometric flag SVG generator
//!
//! A library for laying out simple geometric flags (stripes, crosses,
//! circles, stars, crescents and insets) from ordered drawing directives and
//! serializing them as SVG, plus the recolour model used by the flag viewer.

pub mod cli;
pub mod country;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;
pub mod viewer;

pub use discovery::{discover, LoadedManifest, Manifest, Naming};
pub use error::{FlagError, Result};
pub use layout::layout;
pub use parser::parse_spec_args;
pub use render::{to_svg, write_svg};
pub use types::{
    Alignment, Colour, Directive, Element, FillRule, FlagDocument, FlagSpec, Orientation,
    PathCommand, Point, Shape,
};
pub use validation::{validate_spec, Diagnostic, Severity, ValidationResult};
pub use viewer::{FlagView, PlaceholderPalette, ViewerSession};
