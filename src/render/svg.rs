//! SVG serialization for flag documents.

use ::svg::node::element::path::{Data, Number};
use ::svg::node::element::{Circle, Path, Polygon, Rectangle as Rect};
use ::svg::node::Value;
use ::svg::{Document, Node};

use crate::types::{Element, FillRule, FlagDocument, PathCommand, Point, Shape};

/// Class carried by every flag element; the viewer selects on it.
pub const COMPONENT_CLASS: &str = "flag-component";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize a flag document as an SVG string.
///
/// One child element per line, in paint order. Output is byte-identical for
/// identical documents.
pub fn to_svg(document: &FlagDocument) -> String {
    let mut svg = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", fmt_num(document.width), fmt_num(document.height)),
        )
        .set("xmlns", SVG_NAMESPACE);

    for element in document.elements() {
        svg = match &element.shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => svg.add(decorate(
                Rect::new(),
                element,
                vec![
                    ("x", fmt_num(*x).into()),
                    ("y", fmt_num(*y).into()),
                    ("width", fmt_num(*width).into()),
                    ("height", fmt_num(*height).into()),
                ],
            )),
            Shape::Circle { cx, cy, r } => svg.add(decorate(
                Circle::new(),
                element,
                vec![
                    ("cx", fmt_num(*cx).into()),
                    ("cy", fmt_num(*cy).into()),
                    ("r", fmt_num(*r).into()),
                ],
            )),
            Shape::Polygon(points) => {
                let points = points.iter().map(|p| fmt_point(*p)).collect::<Vec<_>>().join(" ");
                svg.add(decorate(Polygon::new(), element, vec![("points", points.into())]))
            }
            Shape::Path {
                commands,
                fill_rule,
            } => {
                let mut attributes = vec![("d", Value::from(path_data(commands)))];
                if *fill_rule == FillRule::EvenOdd {
                    attributes.push(("fill-rule", "evenodd".into()));
                }
                svg.add(decorate(Path::new(), element, attributes))
            }
        };
    }

    format!("{}\n", svg)
}

/// Attach the shared attributes and assign everything in name order.
fn decorate<N: Node>(mut node: N, element: &Element, mut attributes: Vec<(&'static str, Value)>) -> N {
    attributes.push(("class", COMPONENT_CLASS.into()));
    attributes.push(("fill", element.fill.to_string().into()));
    if let Some(group) = &element.group {
        attributes.push(("data-group", group.clone().into()));
    }

    attributes.sort_by_key(|(name, _)| *name);
    for (name, value) in attributes {
        node.assign(name, value);
    }
    node
}

/// SVG path data for a command list.
pub fn path_data(commands: &[PathCommand]) -> Data {
    commands.iter().fold(Data::new(), |data, command| match command {
        PathCommand::MoveTo(p) => data.move_to(vec![coord(p.x), coord(p.y)]),
        PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            to,
        } => data.elliptical_arc_to(vec![
            coord(*radius),
            coord(*radius),
            0.0,
            Number::from(u8::from(*large_arc)),
            Number::from(u8::from(*sweep)),
            coord(to.x),
            coord(to.y),
        ]),
        PathCommand::Close => data.close(),
    })
}

/// Path coordinates carry the same four decimals as `fmt_num`.
fn coord(value: f64) -> Number {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded as Number
    }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a coordinate: integers without a decimal point, everything else
/// with at most four decimals.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}
