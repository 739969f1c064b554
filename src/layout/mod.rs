//! Layout engine: turns a flag specification into a flag document.
//!
//! Layout is a pure function of the directives and the colour list. Each
//! directive is expanded into regions (one or more shapes sharing a fill),
//! and each region claims the next colour through a [`ColourCursor`].
//! Paint order is declaration order, so later directives draw on top.

mod geometry;
mod moon;
mod star;

use std::collections::HashMap;

pub use geometry::{cross, division_edges, side, stripes, wedge, Canvas};
pub use moon::{crescent_path, overlap, Overlap};
pub use star::{star_vertices, INNER_RADIUS_RATIO};

use crate::error::{FlagError, Result};
use crate::types::{Colour, Directive, Element, FillRule, FlagDocument, FlagSpec, Shape, MAX_COUNT};

/// Hands out colours from the colour list in order.
#[derive(Debug)]
pub struct ColourCursor<'a> {
    colours: &'a [Colour],
    next: usize,
}

impl<'a> ColourCursor<'a> {
    pub fn new(colours: &'a [Colour]) -> Self {
        Self { colours, next: 0 }
    }

    /// Claim the next unclaimed colour.
    pub fn claim(&mut self) -> Result<Colour> {
        let colour = self
            .colours
            .get(self.next)
            .copied()
            .ok_or(FlagError::InsufficientColours {
                required: self.next + 1,
                supplied: self.colours.len(),
            })?;
        self.next += 1;
        Ok(colour)
    }
}

/// Lay out a flag.
///
/// Fails with `InsufficientColours` before laying anything out if the colour
/// list is shorter than the number of regions the directives demand.
pub fn layout(spec: &FlagSpec) -> Result<FlagDocument> {
    let required = spec.region_count();
    if spec.colours.len() < required {
        return Err(FlagError::InsufficientColours {
            required,
            supplied: spec.colours.len(),
        });
    }

    let canvas = Canvas::new(spec.width, spec.height);
    let mut document = FlagDocument::new(spec.width, spec.height);
    let mut cursor = ColourCursor::new(&spec.colours);

    if spec.needs_background() {
        document.push(Element {
            shape: canvas.full(),
            fill: cursor.claim()?,
            group: None,
        });
    }

    for (i, directive) in spec.directives.iter().enumerate() {
        let regions = regions(canvas, directive)?;
        let fills = regions
            .iter()
            .map(|_| cursor.claim())
            .collect::<Result<Vec<Colour>>>()?;
        let groups = group_ids(directive.kind(), i + 1, &regions, &fills);

        for ((shapes, fill), group) in regions.into_iter().zip(fills).zip(groups) {
            for shape in shapes {
                document.push(Element {
                    shape,
                    fill,
                    group: group.clone(),
                });
            }
        }
    }

    Ok(document)
}

/// Expand a directive into its regions; each inner vec shares one colour.
fn regions(canvas: Canvas, directive: &Directive) -> Result<Vec<Vec<Shape>>> {
    let regions = match directive {
        Directive::StripeSet {
            orientation,
            ratios,
        } => {
            if ratios.iter().sum::<f64>() <= 0.0 {
                return Err(FlagError::Validation {
                    message: format!("{}: stripe ratios must sum to a positive value", directive.flag()),
                    help: None,
                });
            }
            stripes(canvas, *orientation, ratios)
                .into_iter()
                .map(|s| vec![s])
                .collect()
        }
        Directive::Cross {
            arm_x,
            arm_y,
            thickness,
            cross_thickness,
        } => vec![cross(canvas, *arm_x, *arm_y, *thickness, *cross_thickness)],
        Directive::Circle { cx, cy, r } => vec![vec![Shape::Circle {
            cx: *cx,
            cy: *cy,
            r: *r,
        }]],
        Directive::Rect {
            x,
            y,
            width,
            height,
        } => vec![vec![Shape::Rect {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
        }]],
        Directive::Triangle { points } => vec![vec![Shape::Polygon(points.to_vec())]],
        Directive::Canton { width, height } => vec![vec![Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: *width,
            height: *height,
        }]],
        Directive::Side {
            width,
            count,
            alignment,
        } => side(canvas, *width, *count, *alignment)
            .into_iter()
            .map(|s| vec![s])
            .collect(),
        Directive::Wedge {
            width,
            edge,
            alignment,
        } => vec![vec![wedge(canvas, *width, *edge, *alignment)]],
        Directive::Star {
            points,
            cx,
            cy,
            radius,
            rotation,
        } => {
            if *points > MAX_COUNT {
                return Err(FlagError::InvalidArgument {
                    message: format!("--star: {} points exceeds the limit of {}", points, MAX_COUNT),
                    help: None,
                });
            }
            vec![vec![Shape::Polygon(star_vertices(
                *points, *cx, *cy, *radius, *rotation,
            ))]]
        }
        Directive::Moon {
            cx,
            cy,
            radius,
            offset_x,
            offset_y,
            inner_radius,
        } => {
            let commands = crescent_path(*cx, *cy, *radius, *offset_x, *offset_y, *inner_radius)
                .ok_or_else(|| FlagError::Validation {
                    message: format!("--moon at ({},{}): the cutout covers the whole disc", cx, cy),
                    help: Some("Shrink the inner radius or move the cutout off-centre".to_string()),
                })?;
            vec![vec![Shape::Path {
                commands,
                fill_rule: FillRule::EvenOdd,
            }]]
        }
    };

    Ok(regions)
}

/// Identity groups for a directive's regions.
///
/// Within a multi-region directive, regions sharing a colour recolour
/// together (`stripes-1-b22234`). A single region made of several shapes
/// groups its shapes (`cross-2`). Everything else is ungrouped.
fn group_ids(kind: &str, position: usize, regions: &[Vec<Shape>], fills: &[Colour]) -> Vec<Option<String>> {
    if regions.len() > 1 {
        let mut uses: HashMap<Colour, usize> = HashMap::new();
        for fill in fills {
            *uses.entry(*fill).or_insert(0) += 1;
        }
        return fills
            .iter()
            .map(|fill| {
                (uses[fill] > 1).then(|| format!("{}-{}-{}", kind, position, fill.hex_digits()))
            })
            .collect();
    }

    regions
        .iter()
        .map(|shapes| (shapes.len() > 1).then(|| format!("{}-{}", kind, position)))
        .collect()
}
