//! Core domain types for vexil.
//!
//! - `Colour` - opaque RGB fill colours
//! - `Directive` - one parsed drawing instruction
//! - `FlagSpec` - canvas, directives and colour list for one flag
//! - `FlagDocument` - laid-out elements ready for serialization

mod colour;
mod directive;
mod document;
mod flag;

pub use colour::Colour;
pub use directive::{Alignment, Directive, Orientation, Point, MAX_COUNT};
pub use document::{Element, FillRule, FlagDocument, PathCommand, Shape};
pub use flag::FlagSpec;
