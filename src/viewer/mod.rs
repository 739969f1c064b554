//! Click-to-recolour model for the flag viewer.
//!
//! The viewer loads a generated flag, paints every identity group with a
//! placeholder colour, and on a click repaints the clicked element's whole
//! group with the selected brush colour. This module holds that state
//! independently of any DOM.

mod session;

use std::collections::HashMap;

pub use session::{LoadTicket, ViewerSession};

use crate::error::{FlagError, Result};
use crate::types::{Colour, FlagDocument};

/// Brush colour selected before the user picks a swatch.
pub const DEFAULT_SWATCH: Colour = Colour::rgb(0xC8, 0x10, 0x2E);

/// Placeholder colours handed to groups in first-appearance order.
///
/// When there are more groups than colours the palette cycles, so group `i`
/// always gets `colours[i % len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderPalette {
    colours: Vec<Colour>,
}

impl PlaceholderPalette {
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        if colours.is_empty() {
            return Err(FlagError::InvalidArgument {
                message: "placeholder palette is empty".to_string(),
                help: Some("Provide at least one placeholder colour".to_string()),
            });
        }
        Ok(Self { colours })
    }

    /// Colour for the group at `index`.
    pub fn colour_for(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for PlaceholderPalette {
    fn default() -> Self {
        Self {
            colours: vec![
                Colour::rgb(0xE0, 0xE0, 0xE0),
                Colour::rgb(0xB0, 0xB0, 0xB0),
                Colour::rgb(0x80, 0x80, 0x80),
                Colour::rgb(0xC8, 0xD4, 0xE0),
                Colour::rgb(0xE0, 0xD4, 0xC8),
            ],
        }
    }
}

/// A loaded flag with its identity groups resolved.
#[derive(Debug, Clone)]
pub struct FlagView {
    document: FlagDocument,
    /// Element indices per group, groups in first-appearance order.
    groups: Vec<Vec<usize>>,
    /// Group index per element.
    membership: Vec<usize>,
    brush: Colour,
}

impl FlagView {
    /// Resolve groups and paint each with its placeholder colour.
    pub fn load(document: FlagDocument, palette: &PlaceholderPalette) -> Self {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut membership = Vec::with_capacity(document.len());
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for (index, element) in document.elements().iter().enumerate() {
            let group = match element.group.as_deref() {
                Some(id) => *by_id.entry(id.to_string()).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                }),
                None => {
                    groups.push(Vec::new());
                    groups.len() - 1
                }
            };
            groups[group].push(index);
            membership.push(group);
        }

        let mut document = document;
        for (i, members) in groups.iter().enumerate() {
            let colour = palette.colour_for(i);
            for &index in members {
                document.set_fill(index, colour);
            }
        }

        Self {
            document,
            groups,
            membership,
            brush: DEFAULT_SWATCH,
        }
    }

    /// Set the brush colour used by subsequent clicks.
    pub fn select_colour(&mut self, colour: Colour) {
        self.brush = colour;
    }

    pub fn brush(&self) -> Colour {
        self.brush
    }

    /// Repaint the clicked element's group with the brush colour.
    ///
    /// Returns the number of elements repainted.
    pub fn click(&mut self, element: usize) -> Result<usize> {
        let group = self.group_of(element).ok_or_else(|| FlagError::InvalidArgument {
            message: format!(
                "element {} is out of range (flag has {} elements)",
                element,
                self.document.len()
            ),
            help: None,
        })?;

        let members = &self.groups[group];
        for &index in members {
            self.document.set_fill(index, self.brush);
        }
        Ok(members.len())
    }

    /// Group index of an element.
    pub fn group_of(&self, element: usize) -> Option<usize> {
        self.membership.get(element).copied()
    }

    pub fn fill_of(&self, element: usize) -> Option<Colour> {
        self.document.elements().get(element).map(|e| e.fill)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Element indices in a group.
    pub fn members(&self, group: usize) -> Option<&[usize]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// The document as currently painted.
    pub fn document(&self) -> &FlagDocument {
        &self.document
    }
}
