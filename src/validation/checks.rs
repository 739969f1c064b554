//! Validation checks for flag specifications.
//!
//! Each check takes a `&FlagSpec` and returns a `ValidationResult`.

use crate::layout::{overlap, Overlap};
use crate::types::{Directive, FlagSpec, Orientation, Point, MAX_COUNT};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Canvas dimensions must be positive and finite.
pub fn check_canvas(spec: &FlagSpec) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, value) in [("width", spec.width), ("height", spec.height)] {
        if !(value.is_finite() && value > 0.0) {
            result.push(
                Diagnostic::error(
                    "vexil::validate::canvas",
                    format!("canvas {} must be positive, got {}", name, value),
                )
                .with_help("Pass -x WIDTH -y HEIGHT with positive numbers"),
            );
        }
    }

    result
}

/// Colour supply against region demand.
pub fn check_colours(spec: &FlagSpec) -> ValidationResult {
    let mut result = ValidationResult::new();
    let required = spec.region_count();
    let supplied = spec.colours.len();

    if supplied < required {
        result.push(
            Diagnostic::error(
                "vexil::validate::colours",
                format!("{} region(s) need colours but only {} supplied", required, supplied),
            )
            .with_help(format!("Regions in order: {}", spec.describe())),
        );
    } else if supplied > required {
        result.push(Diagnostic::warning(
            "vexil::validate::surplus-colours",
            format!("{} colour(s) supplied but only {} used", supplied, required),
        ));
    }

    result
}

/// Per-directive geometry checks.
pub fn check_directives(spec: &FlagSpec) -> ValidationResult {
    let mut result = ValidationResult::new();
    let canvas = Bounds {
        width: spec.width,
        height: spec.height,
    };

    for (i, directive) in spec.directives.iter().enumerate() {
        let mut check = DirectiveCheck {
            subject: format!("directive {} ({})", i + 1, directive.flag()),
            canvas,
            result: ValidationResult::new(),
        };
        check.run(directive);
        result.merge(check.result);
    }

    result
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

struct DirectiveCheck {
    subject: String,
    canvas: Bounds,
    result: ValidationResult,
}

impl DirectiveCheck {
    fn run(&mut self, directive: &Directive) {
        let canvas = self.canvas;

        match directive {
            Directive::StripeSet {
                orientation,
                ratios,
            } => {
                if ratios.is_empty() {
                    self.error("ratios", "a stripe set needs at least one ratio".to_string());
                }
                self.bounded("stripes", ratios.len());
                for ratio in ratios {
                    self.positive("ratio", *ratio);
                }
                let length = match orientation {
                    Orientation::Vertical => canvas.width,
                    Orientation::Horizontal => canvas.height,
                };
                self.check_even_stripes(length, ratios);
            }
            Directive::Cross {
                arm_x,
                arm_y,
                thickness,
                cross_thickness,
            } => {
                self.positive("thickness", *thickness);
                if *cross_thickness < 0.0 {
                    self.error(
                        "size",
                        format!("cross thickness must not be negative, got {}", cross_thickness),
                    );
                }
                self.inside(Point::new(*arm_x, *arm_y), "arm centre");
            }
            Directive::Circle { cx, cy, r } => {
                self.positive("radius", *r);
                self.inside(Point::new(*cx, *cy), "centre");
            }
            Directive::Rect {
                x,
                y,
                width,
                height,
            } => {
                self.positive("width", *width);
                self.positive("height", *height);
                let corners = [Point::new(*x, *y), Point::new(x + width, y + height)];
                if !corners.iter().all(|p| canvas.contains(*p)) {
                    self.error(
                        "outside-canvas",
                        format!(
                            "rectangle {}x{} at ({},{}) extends past the {}x{} canvas",
                            width, height, x, y, canvas.width, canvas.height
                        ),
                    );
                }
            }
            Directive::Triangle { points } => {
                for (n, p) in points.iter().enumerate() {
                    self.inside(*p, &format!("point {}", n + 1));
                }
            }
            Directive::Canton { width, height } => {
                self.positive("width", *width);
                self.positive("height", *height);
                self.smaller(*width, canvas.width, "width");
                self.smaller(*height, canvas.height, "height");
            }
            Directive::Side { width, count, .. } => {
                self.positive("width", *width);
                self.smaller(*width, canvas.width, "width");
                if *count == 0 {
                    self.error("size", "side needs at least one division".to_string());
                }
                self.bounded("divisions", *count as usize);
            }
            Directive::Wedge { width, edge, .. } => {
                self.positive("width", *width);
                self.smaller(*width, canvas.width, "width");
                if *edge < 0.0 {
                    self.error("size", format!("wedge edge must not be negative, got {}", edge));
                } else if *edge > canvas.height {
                    self.error(
                        "size",
                        format!("wedge edge {} is longer than the canvas height ({})", edge, canvas.height),
                    );
                }
            }
            Directive::Star {
                points,
                cx,
                cy,
                radius,
                ..
            } => {
                if *points < 3 {
                    self.error("star-points", format!("a star needs at least 3 points, got {}", points));
                } else if *points > MAX_COUNT {
                    self.error(
                        "star-points",
                        format!("a star has at most {} points, got {}", MAX_COUNT, points),
                    );
                }
                self.positive("radius", *radius);
                self.inside(Point::new(*cx, *cy), "centre");
            }
            Directive::Moon {
                cx,
                cy,
                radius,
                offset_x,
                offset_y,
                inner_radius,
            } => {
                self.positive("radius", *radius);
                self.positive("inner radius", *inner_radius);
                self.inside(Point::new(*cx, *cy), "centre");
                let distance = offset_x.hypot(*offset_y);
                if overlap(*radius, *inner_radius, distance) == Overlap::Covered {
                    self.result.push(
                        Diagnostic::error(
                            "vexil::validate::moon-covered",
                            "the cutout covers the whole disc",
                        )
                        .with_subject(self.subject.clone())
                        .with_help("Shrink the inner radius or move the cutout off-centre"),
                    );
                }
            }
        }
    }

    /// Equal stripes should land on whole units.
    fn check_even_stripes(&mut self, length: f64, ratios: &[f64]) {
        let Some(first) = ratios.first() else {
            return;
        };
        if !ratios.iter().all(|r| r == first) {
            return;
        }
        let size = length / ratios.len() as f64;
        if size.fract().abs() > 1e-9 {
            self.result.push(
                Diagnostic::warning(
                    "vexil::validate::uneven-stripes",
                    format!(
                        "{} equal stripes over {} units are {} units each",
                        ratios.len(),
                        length,
                        crate::render::fmt_num(size)
                    ),
                )
                .with_subject(self.subject.clone())
                .with_help("Pick a canvas size divisible by the stripe count"),
            );
        }
    }

    fn positive(&mut self, name: &str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.error("size", format!("{} must be positive, got {}", name, value));
        }
    }

    fn bounded(&mut self, name: &str, count: usize) {
        if count > MAX_COUNT as usize {
            self.error(
                "size",
                format!("{} {} exceeds the limit of {}", count, name, MAX_COUNT),
            );
        }
    }

    fn smaller(&mut self, value: f64, limit: f64, name: &str) {
        if value >= limit {
            self.error(
                "size",
                format!("{} {} is not smaller than the canvas ({})", name, value, limit),
            );
        }
    }

    fn inside(&mut self, p: Point, what: &str) {
        if !self.canvas.contains(p) {
            self.error(
                "outside-canvas",
                format!("{} ({},{}) lies outside the canvas", what, p.x, p.y),
            );
        }
    }

    fn error(&mut self, code: &str, message: String) {
        self.result.push(
            Diagnostic::error(format!("vexil::validate::{}", code), message)
                .with_subject(self.subject.clone()),
        );
    }
}
