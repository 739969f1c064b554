//! Rendering of flag documents to SVG.
//!
//! Serialization is pure; writing goes through a temporary file so output
//! files are replaced atomically.

mod svg;
mod write;

pub use self::svg::{fmt_num, path_data, to_svg, COMPONENT_CLASS};
pub use write::{write_atomic, write_svg};
