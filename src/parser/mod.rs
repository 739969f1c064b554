//! Parsing of flag specifications from the command line.
//!
//! # Usage
//!
//! ```ignore
//! use vexil::parser::parse_spec_args;
//!
//! let spec = parse_spec_args(["FRANCE", "-x", "3", "-y", "2", "-v", "3",
//!     "-c", "000091", "FFFFFF", "E1000F"])?;
//! assert_eq!(spec.region_count(), 3);
//! ```

pub mod args;
pub mod values;

pub use args::{parse_spec_args, DirectiveArgs, DirectiveFlag, RawDirective, SpecArgs};
pub use values::{parse_colours, parse_directive, parse_ratios};
