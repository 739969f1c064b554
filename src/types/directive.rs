//! Drawing directives.
//!
//! A directive is one parsed drawing instruction. Directives are laid out in
//! declaration order, each claiming one colour per fillable region.
//!
//! In a manifest, directives are tagged by `type`:
//!
//! ```yaml
//! directives:
//!   - { type: stripe-set, orientation: horizontal, ratios: [1, 1, 1] }
//!   - { type: star, points: 5, cx: 10, cy: 10, radius: 4, rotation: 0 }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stripe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Which canvas edge a side strip or wedge hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Right => write!(f, "right"),
        }
    }
}

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Upper bound on star points, stripe counts and side divisions.
pub const MAX_COUNT: u32 = 1000;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Directive {
    /// Stripes across the whole canvas, sized proportionally to `ratios`.
    StripeSet {
        orientation: Orientation,
        ratios: Vec<f64>,
    },

    /// A full-length cross. `arm_x` is the centre line of the vertical arm,
    /// `arm_y` the centre line of the horizontal arm. A `cross_thickness` of
    /// zero reuses `thickness` for the horizontal arm.
    Cross {
        arm_x: f64,
        arm_y: f64,
        thickness: f64,
        #[serde(default)]
        cross_thickness: f64,
    },

    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },

    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// Triangle with its points taken verbatim.
    Triangle {
        points: [Point; 3],
    },

    /// Top-left inset.
    Canton {
        width: f64,
        height: f64,
    },

    /// Full-height strip at one edge, split into `count` stacked divisions.
    Side {
        width: f64,
        count: u32,
        alignment: Alignment,
    },

    /// Hoist shape at one edge. `edge` is the length of the inner edge:
    /// the full height gives a bar, zero a triangle, anything else a trapezoid.
    Wedge {
        width: f64,
        edge: f64,
        alignment: Alignment,
    },

    /// Regular star; `rotation` is in degrees clockwise from straight up.
    Star {
        points: u32,
        cx: f64,
        cy: f64,
        radius: f64,
        rotation: f64,
    },

    /// Crescent: a disc with a second, offset disc cut out of it.
    Moon {
        cx: f64,
        cy: f64,
        radius: f64,
        offset_x: f64,
        offset_y: f64,
        inner_radius: f64,
    },
}

impl Directive {
    /// Number of colours this directive claims.
    pub fn region_count(&self) -> usize {
        match self {
            Directive::StripeSet { ratios, .. } => ratios.len(),
            Directive::Side { count, .. } => *count as usize,
            _ => 1,
        }
    }

    /// The command-line flag that produces this directive.
    pub fn flag(&self) -> &'static str {
        match self {
            Directive::StripeSet {
                orientation: Orientation::Vertical,
                ..
            } => "--vertical",
            Directive::StripeSet {
                orientation: Orientation::Horizontal,
                ..
            } => "--horizontal",
            Directive::Cross { .. } => "--cross",
            Directive::Circle { .. } => "--circle",
            Directive::Rect { .. } => "--rect",
            Directive::Triangle { .. } => "--triangle",
            Directive::Canton { .. } => "--canton",
            Directive::Side { .. } => "--side",
            Directive::Wedge { .. } => "--wedge",
            Directive::Star { .. } => "--star",
            Directive::Moon { .. } => "--moon",
        }
    }

    /// Short kind name used in group ids.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::StripeSet { .. } => "stripes",
            Directive::Cross { .. } => "cross",
            Directive::Circle { .. } => "circle",
            Directive::Rect { .. } => "rect",
            Directive::Triangle { .. } => "triangle",
            Directive::Canton { .. } => "canton",
            Directive::Side { .. } => "side",
            Directive::Wedge { .. } => "wedge",
            Directive::Star { .. } => "star",
            Directive::Moon { .. } => "moon",
        }
    }

    pub fn is_stripe_set(&self) -> bool {
        matches!(self, Directive::StripeSet { .. })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::StripeSet { orientation, ratios } => {
                let dir = match orientation {
                    Orientation::Vertical => "vertical",
                    Orientation::Horizontal => "horizontal",
                };
                let equal = ratios.windows(2).all(|w| w[0] == w[1]);
                if equal {
                    write!(f, "{} {} stripes", ratios.len(), dir)
                } else {
                    let list: Vec<String> = ratios.iter().map(|r| r.to_string()).collect();
                    write!(f, "{} {} stripes ({})", ratios.len(), dir, list.join(":"))
                }
            }
            Directive::Cross {
                arm_x,
                arm_y,
                thickness,
                ..
            } => write!(f, "cross at ({},{}) width {}", arm_x, arm_y, thickness),
            Directive::Circle { cx, cy, r } => {
                write!(f, "circle at ({},{}) radius {}", cx, cy, r)
            }
            Directive::Rect {
                x,
                y,
                width,
                height,
            } => write!(f, "rect {}x{} at ({},{})", width, height, x, y),
            Directive::Triangle { points: [a, b, c] } => write!(
                f,
                "triangle ({},{})-({},{})-({},{})",
                a.x, a.y, b.x, b.y, c.x, c.y
            ),
            Directive::Canton { width, height } => write!(f, "canton ({}x{})", width, height),
            Directive::Side {
                width,
                count,
                alignment,
            } => write!(f, "{} side strip ({} wide, {} divisions)", alignment, width, count),
            Directive::Wedge {
                width,
                edge,
                alignment,
            } => write!(f, "{} wedge (width {}, edge {})", alignment, width, edge),
            Directive::Star {
                points,
                cx,
                cy,
                radius,
                rotation,
            } => write!(
                f,
                "{}-point star at ({},{}) radius {} angle {}°",
                points, cx, cy, radius, rotation
            ),
            Directive::Moon {
                cx,
                cy,
                radius,
                offset_x,
                offset_y,
                inner_radius,
            } => write!(
                f,
                "moon at ({},{}) radius {} cut ({},{}) radius {}",
                cx, cy, radius, offset_x, offset_y, inner_radius
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_counts() {
        let stripes = Directive::StripeSet {
            orientation: Orientation::Horizontal,
            ratios: vec![1.0, 1.0, 1.0],
        };
        let side = Directive::Side {
            width: 4.0,
            count: 2,
            alignment: Alignment::Left,
        };
        let circle = Directive::Circle {
            cx: 1.0,
            cy: 1.0,
            r: 1.0,
        };

        assert_eq!(stripes.region_count(), 3);
        assert_eq!(side.region_count(), 2);
        assert_eq!(circle.region_count(), 1);
    }

    #[test]
    fn test_display() {
        let stripes = Directive::StripeSet {
            orientation: Orientation::Vertical,
            ratios: vec![1.0, 1.0, 1.0],
        };
        assert_eq!(stripes.to_string(), "3 vertical stripes");

        let custom = Directive::StripeSet {
            orientation: Orientation::Horizontal,
            ratios: vec![2.0, 1.0, 1.0],
        };
        assert_eq!(custom.to_string(), "3 horizontal stripes (2:1:1)");
    }

    #[test]
    fn test_yaml_tagging() {
        let yaml = r#"
- { type: stripe-set, orientation: vertical, ratios: [1, 2] }
- { type: cross, arm_x: 15, arm_y: 10, thickness: 4 }
- { type: triangle, points: [[0, 0], [10, 7.5], [0, 15]] }
- { type: side, width: 8, count: 3, alignment: right }
"#;
        let directives: Vec<Directive> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(directives.len(), 4);
        assert_eq!(directives[0].flag(), "--vertical");
        assert_eq!(
            directives[1],
            Directive::Cross {
                arm_x: 15.0,
                arm_y: 10.0,
                thickness: 4.0,
                cross_thickness: 0.0,
            }
        );
        assert_eq!(
            directives[2],
            Directive::Triangle {
                points: [Point::new(0.0, 0.0), Point::new(10.0, 7.5), Point::new(0.0, 15.0)],
            }
        );
        assert_eq!(directives[3].region_count(), 3);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let yaml = "- { type: diagonal, width: 3 }";
        assert!(serde_yaml::from_str::<Vec<Directive>>(yaml).is_err());
    }
}
