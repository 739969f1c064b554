//! Flag document: the laid-out, colour-assigned output of the generator.

use super::{Colour, Point};

/// SVG fill rule for path elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// One segment of an outline path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    /// Circular arc to `to`, with SVG's large-arc and sweep flags.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

impl PathCommand {
    /// A closed circle as two half arcs, starting at its leftmost point.
    pub fn circle(cx: f64, cy: f64, r: f64) -> [PathCommand; 4] {
        let left = Point::new(cx - r, cy);
        let right = Point::new(cx + r, cy);
        [
            PathCommand::MoveTo(left),
            PathCommand::Arc {
                radius: r,
                large_arc: false,
                sweep: true,
                to: right,
            },
            PathCommand::Arc {
                radius: r,
                large_arc: false,
                sweep: true,
                to: left,
            },
            PathCommand::Close,
        ]
    }
}

/// Element geometry in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Polygon(Vec<Point>),
    Path {
        commands: Vec<PathCommand>,
        fill_rule: FillRule,
    },
}

/// A filled shape in the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub fill: Colour,
    /// Identity group shared with sibling elements that recolour together.
    pub group: Option<String>,
}

/// The complete flag, elements in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagDocument {
    pub width: f64,
    pub height: f64,
    elements: Vec<Element>,
}

impl FlagDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Repaint a single element. Returns false if the index is out of range.
    pub fn set_fill(&mut self, index: usize, fill: Colour) -> bool {
        match self.elements.get_mut(index) {
            Some(element) => {
                element.fill = fill;
                true
            }
            None => false,
        }
    }
}
