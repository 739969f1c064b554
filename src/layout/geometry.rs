//! Rectilinear directive geometry: stripes, crosses, side strips and wedges.

use crate::types::{Alignment, Orientation, Point, Shape};

/// Canvas size in abstract units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The whole canvas as a rectangle.
    pub fn full(&self) -> Shape {
        Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Division edges for proportional segments along `length`.
///
/// Returns `ratios.len() + 1` edges from 0 to `length`. The last edge is
/// pinned to `length`, so the segments always tile it without a gap.
pub fn division_edges(length: f64, ratios: &[f64]) -> Vec<f64> {
    let total: f64 = ratios.iter().sum();
    let mut edges = Vec::with_capacity(ratios.len() + 1);
    edges.push(0.0);

    let mut acc = 0.0;
    for (i, ratio) in ratios.iter().enumerate() {
        acc += ratio;
        if i + 1 == ratios.len() {
            edges.push(length);
        } else {
            edges.push(length * acc / total);
        }
    }

    edges
}

/// One rectangle per stripe, in reading order (left to right, top to bottom).
pub fn stripes(canvas: Canvas, orientation: Orientation, ratios: &[f64]) -> Vec<Shape> {
    let length = match orientation {
        Orientation::Vertical => canvas.width,
        Orientation::Horizontal => canvas.height,
    };

    division_edges(length, ratios)
        .windows(2)
        .map(|edge| match orientation {
            Orientation::Vertical => Shape::Rect {
                x: edge[0],
                y: 0.0,
                width: edge[1] - edge[0],
                height: canvas.height,
            },
            Orientation::Horizontal => Shape::Rect {
                x: 0.0,
                y: edge[0],
                width: canvas.width,
                height: edge[1] - edge[0],
            },
        })
        .collect()
}

/// Vertical and horizontal bars of a full-length cross.
pub fn cross(canvas: Canvas, arm_x: f64, arm_y: f64, thickness: f64, cross_thickness: f64) -> Vec<Shape> {
    let horizontal = if cross_thickness > 0.0 {
        cross_thickness
    } else {
        thickness
    };

    vec![
        Shape::Rect {
            x: arm_x - thickness / 2.0,
            y: 0.0,
            width: thickness,
            height: canvas.height,
        },
        Shape::Rect {
            x: 0.0,
            y: arm_y - horizontal / 2.0,
            width: canvas.width,
            height: horizontal,
        },
    ]
}

/// Equal stacked divisions of a full-height strip at one edge.
pub fn side(canvas: Canvas, width: f64, count: u32, alignment: Alignment) -> Vec<Shape> {
    let x = match alignment {
        Alignment::Left => 0.0,
        Alignment::Right => canvas.width - width,
    };
    let ratios = vec![1.0; count as usize];

    division_edges(canvas.height, &ratios)
        .windows(2)
        .map(|edge| Shape::Rect {
            x,
            y: edge[0],
            width,
            height: edge[1] - edge[0],
        })
        .collect()
}

/// Hoist bar, triangle or trapezoid depending on the inner edge length.
pub fn wedge(canvas: Canvas, width: f64, edge: f64, alignment: Alignment) -> Shape {
    let h = canvas.height;

    if edge >= h {
        let x = match alignment {
            Alignment::Left => 0.0,
            Alignment::Right => canvas.width - width,
        };
        return Shape::Rect {
            x,
            y: 0.0,
            width,
            height: h,
        };
    }

    // Outer edge x and inner edge x.
    let (outer, inner) = match alignment {
        Alignment::Left => (0.0, width),
        Alignment::Right => (canvas.width, canvas.width - width),
    };

    if edge <= 0.0 {
        return Shape::Polygon(vec![
            Point::new(outer, 0.0),
            Point::new(inner, h / 2.0),
            Point::new(outer, h),
        ]);
    }

    let top = (h - edge) / 2.0;
    Shape::Polygon(vec![
        Point::new(outer, 0.0),
        Point::new(inner, top),
        Point::new(inner, top + edge),
        Point::new(outer, h),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_spans(shapes: &[Shape], orientation: Orientation) -> Vec<(f64, f64)> {
        shapes
            .iter()
            .map(|s| match (s, orientation) {
                (Shape::Rect { x, width, .. }, Orientation::Vertical) => (*x, *width),
                (Shape::Rect { y, height, .. }, Orientation::Horizontal) => (*y, *height),
                _ => panic!("expected rect"),
            })
            .collect()
    }

    #[test]
    fn test_equal_stripes() {
        let shapes = stripes(Canvas::new(5.0, 3.0), Orientation::Horizontal, &[1.0; 3]);
        assert_eq!(
            rect_spans(&shapes, Orientation::Horizontal),
            vec![(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]
        );
    }

    #[test]
    fn test_ratio_stripes() {
        let shapes = stripes(Canvas::new(30.0, 18.0), Orientation::Horizontal, &[9.0, 6.0, 3.0]);
        assert_eq!(
            rect_spans(&shapes, Orientation::Horizontal),
            vec![(0.0, 9.0), (9.0, 6.0), (15.0, 3.0)]
        );
    }

    #[test]
    fn test_stripes_tile_dimension() {
        let cases: &[(f64, &[f64])] = &[
            (5.0, &[1.0, 1.0, 1.0]),
            (7.0, &[1.0; 13]),
            (10.0, &[0.3, 2.7, 1.1]),
            (1.0, &[1.0]),
            (21.0, &[2.0, 1.0, 2.0, 1.0, 3.0, 1.0, 7.0]),
        ];

        for (length, ratios) in cases {
            let shapes = stripes(Canvas::new(*length, 1.0), Orientation::Vertical, ratios);
            let spans = rect_spans(&shapes, Orientation::Vertical);

            assert_eq!(spans.len(), ratios.len());
            assert_eq!(spans[0].0, 0.0);
            for pair in spans.windows(2) {
                assert!((pair[0].0 + pair[0].1 - pair[1].0).abs() < 1e-9);
            }
            let (last_x, last_w) = spans[spans.len() - 1];
            assert!((last_x + last_w - length).abs() < 1e-9);

            let total: f64 = spans.iter().map(|(_, w)| w).sum();
            assert!((total - length).abs() < 1e-9, "{total} != {length}");
        }
    }

    #[test]
    fn test_division_edges_pin_last_edge() {
        let edges = division_edges(1.0, &[1.0; 3]);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], 1.0);
    }

    #[test]
    fn test_cross_bars() {
        let shapes = cross(Canvas::new(30.0, 20.0), 12.0, 10.0, 4.0, 0.0);
        assert_eq!(
            shapes,
            vec![
                Shape::Rect {
                    x: 10.0,
                    y: 0.0,
                    width: 4.0,
                    height: 20.0
                },
                Shape::Rect {
                    x: 0.0,
                    y: 8.0,
                    width: 30.0,
                    height: 4.0
                },
            ]
        );

        let shapes = cross(Canvas::new(30.0, 20.0), 12.0, 10.0, 4.0, 2.0);
        assert_eq!(
            shapes[1],
            Shape::Rect {
                x: 0.0,
                y: 9.0,
                width: 30.0,
                height: 2.0
            }
        );
    }

    #[test]
    fn test_side_right() {
        let shapes = side(Canvas::new(30.0, 20.0), 8.0, 2, Alignment::Right);
        assert_eq!(
            shapes,
            vec![
                Shape::Rect {
                    x: 22.0,
                    y: 0.0,
                    width: 8.0,
                    height: 10.0
                },
                Shape::Rect {
                    x: 22.0,
                    y: 10.0,
                    width: 8.0,
                    height: 10.0
                },
            ]
        );
    }

    #[test]
    fn test_wedge_variants() {
        let canvas = Canvas::new(30.0, 20.0);

        assert!(matches!(wedge(canvas, 10.0, 20.0, Alignment::Left), Shape::Rect { .. }));

        assert_eq!(
            wedge(canvas, 15.0, 0.0, Alignment::Left),
            Shape::Polygon(vec![
                Point::new(0.0, 0.0),
                Point::new(15.0, 10.0),
                Point::new(0.0, 20.0),
            ])
        );

        assert_eq!(
            wedge(canvas, 8.0, 10.0, Alignment::Right),
            Shape::Polygon(vec![
                Point::new(30.0, 0.0),
                Point::new(22.0, 5.0),
                Point::new(22.0, 15.0),
                Point::new(30.0, 20.0),
            ])
        );
    }
}
