//! Conversion of raw directive values into typed directives.

use crate::error::{FlagError, Result};
use crate::types::{Alignment, Colour, Directive, Orientation, Point, MAX_COUNT};

use super::args::{DirectiveFlag, RawDirective};

/// Turn one raw command-line occurrence into a directive.
pub fn parse_directive(raw: &RawDirective) -> Result<Directive> {
    let flag = raw.flag;

    let Some(arity) = flag.arity() else {
        return Err(unsupported(flag));
    };

    if raw.values.len() != arity {
        return Err(FlagError::InvalidArgument {
            message: format!(
                "--{} expects {} value(s), got {}",
                flag.id(),
                arity,
                raw.values.len()
            ),
            help: Some(format!("Usage: --{} {}", flag.id(), flag.value_names().join(" "))),
        });
    }

    let v = &raw.values;
    let num = |i: usize| parse_number(flag, flag.value_names()[i], &v[i]);

    let directive = match flag {
        DirectiveFlag::Vertical => Directive::StripeSet {
            orientation: Orientation::Vertical,
            ratios: parse_ratios(flag, &v[0])?,
        },
        DirectiveFlag::Horizontal => Directive::StripeSet {
            orientation: Orientation::Horizontal,
            ratios: parse_ratios(flag, &v[0])?,
        },
        DirectiveFlag::Cross => Directive::Cross {
            arm_x: num(0)?,
            arm_y: num(1)?,
            thickness: num(2)?,
            cross_thickness: num(3)?,
        },
        DirectiveFlag::Circle => Directive::Circle {
            cx: num(0)?,
            cy: num(1)?,
            r: num(2)?,
        },
        DirectiveFlag::Rect => Directive::Rect {
            x: num(0)?,
            y: num(1)?,
            width: num(2)?,
            height: num(3)?,
        },
        DirectiveFlag::Triangle => Directive::Triangle {
            points: parse_triangle(flag, &v[0])?,
        },
        DirectiveFlag::Canton => Directive::Canton {
            width: num(0)?,
            height: num(1)?,
        },
        DirectiveFlag::Side => Directive::Side {
            width: num(0)?,
            count: parse_count(flag, flag.value_names()[1], &v[1])?,
            alignment: parse_alignment(flag, &v[2])?,
        },
        DirectiveFlag::Wedge => Directive::Wedge {
            width: num(0)?,
            edge: num(1)?,
            alignment: parse_alignment(flag, &v[2])?,
        },
        DirectiveFlag::Star => Directive::Star {
            points: parse_count(flag, flag.value_names()[0], &v[0])?,
            cx: num(1)?,
            cy: num(2)?,
            radius: num(3)?,
            rotation: num(4)?,
        },
        DirectiveFlag::Moon => Directive::Moon {
            cx: num(0)?,
            cy: num(1)?,
            radius: num(2)?,
            offset_x: num(3)?,
            offset_y: num(4)?,
            inner_radius: num(5)?,
        },
        DirectiveFlag::Diagonal | DirectiveFlag::Saltire | DirectiveFlag::Emblem => {
            return Err(unsupported(flag));
        }
    };

    Ok(directive)
}

/// Parse a colour list, reporting the first bad entry.
pub fn parse_colours(values: &[String]) -> Result<Vec<Colour>> {
    values.iter().map(|v| Colour::parse(v)).collect()
}

fn unsupported(flag: DirectiveFlag) -> FlagError {
    FlagError::UnsupportedDirective {
        directive: format!("--{}", flag.id()),
        help: Some(unsupported_help(flag).to_string()),
    }
}

fn unsupported_help(flag: DirectiveFlag) -> &'static str {
    match flag {
        DirectiveFlag::Diagonal => "Diagonal bands are not supported; flags that need them are out of scope",
        DirectiveFlag::Saltire => "Saltires are not supported; only upright crosses can be generated",
        _ => "Emblems and non-circular cutouts are not supported",
    }
}

/// Parse a stripe spec: either a count (`3`) or comma-separated ratios (`9,6,3`).
pub fn parse_ratios(flag: DirectiveFlag, value: &str) -> Result<Vec<f64>> {
    let value = value.trim();

    if value.contains(',') {
        let ratios = value
            .split(',')
            .map(|part| parse_number(flag, "RATIO", part))
            .collect::<Result<Vec<f64>>>()?;

        if let Some(bad) = ratios.iter().find(|r| **r <= 0.0) {
            return Err(FlagError::InvalidArgument {
                message: format!("--{}: stripe ratio {} must be positive", flag.id(), bad),
                help: None,
            });
        }
        return Ok(ratios);
    }

    let count = parse_count(flag, "N", value)?;
    Ok(vec![1.0; count as usize])
}

/// Parse `"x1,y1 x2,y2 x3,y3"`.
fn parse_triangle(flag: DirectiveFlag, value: &str) -> Result<[Point; 3]> {
    let points = value
        .split_whitespace()
        .map(|pair| parse_point(flag, pair))
        .collect::<Result<Vec<Point>>>()?;

    <[Point; 3]>::try_from(points).map_err(|points| FlagError::InvalidArgument {
        message: format!("--{} needs exactly 3 points, got {}", flag.id(), points.len()),
        help: Some("Quote the point list: --triangle \"0,0 10,7.5 0,15\"".to_string()),
    })
}

fn parse_point(flag: DirectiveFlag, pair: &str) -> Result<Point> {
    let (x, y) = pair.split_once(',').ok_or_else(|| FlagError::InvalidArgument {
        message: format!("--{}: point '{}' is not of the form x,y", flag.id(), pair),
        help: None,
    })?;
    Ok(Point::new(
        parse_number(flag, "X", x)?,
        parse_number(flag, "Y", y)?,
    ))
}

fn parse_number(flag: DirectiveFlag, name: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FlagError::InvalidArgument {
            message: format!("--{}: {} '{}' is not a number", flag.id(), name, value),
            help: None,
        }),
    }
}

fn parse_count(flag: DirectiveFlag, name: &str, value: &str) -> Result<u32> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 && n <= u64::from(MAX_COUNT) => Ok(n as u32),
        Ok(n) if n > 0 => Err(FlagError::InvalidArgument {
            message: format!("--{}: {} {} exceeds the limit of {}", flag.id(), name, n, MAX_COUNT),
            help: None,
        }),
        _ => Err(FlagError::InvalidArgument {
            message: format!(
                "--{}: {} '{}' must be a positive whole number",
                flag.id(),
                name,
                value
            ),
            help: None,
        }),
    }
}

fn parse_alignment(flag: DirectiveFlag, value: &str) -> Result<Alignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" => Ok(Alignment::Left),
        "right" => Ok(Alignment::Right),
        _ => Err(FlagError::InvalidArgument {
            message: format!("--{}: position must be 'left' or 'right', got '{}'", flag.id(), value),
            help: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(flag: DirectiveFlag, values: &[&str]) -> RawDirective {
        RawDirective {
            flag,
            values: values.iter().map(|s| s.to_string()).collect(),
            index: 0,
        }
    }

    #[test]
    fn test_ratios_count() {
        assert_eq!(parse_ratios(DirectiveFlag::Vertical, "3").unwrap(), vec![1.0; 3]);
        assert_eq!(parse_ratios(DirectiveFlag::Vertical, "1").unwrap(), vec![1.0]);
    }

    #[test]
    fn test_ratios_list() {
        assert_eq!(
            parse_ratios(DirectiveFlag::Horizontal, "9, 6,3").unwrap(),
            vec![9.0, 6.0, 3.0]
        );
        assert_eq!(
            parse_ratios(DirectiveFlag::Horizontal, "1.5,1").unwrap(),
            vec![1.5, 1.0]
        );
    }

    #[test]
    fn test_ratios_invalid() {
        assert!(parse_ratios(DirectiveFlag::Vertical, "0").is_err());
        assert!(parse_ratios(DirectiveFlag::Vertical, "2.5").is_err());
        assert!(parse_ratios(DirectiveFlag::Vertical, "1,-2").is_err());
        assert!(parse_ratios(DirectiveFlag::Vertical, "1,,2").is_err());
        assert!(parse_ratios(DirectiveFlag::Vertical, "three").is_err());
    }

    #[test]
    fn test_counts_are_bounded() {
        let limit = MAX_COUNT.to_string();
        assert_eq!(parse_ratios(DirectiveFlag::Horizontal, &limit).unwrap().len(), 1000);

        let err = parse_ratios(DirectiveFlag::Horizontal, "4000000000").unwrap_err();
        match err {
            FlagError::InvalidArgument { message, .. } => assert!(message.contains("exceeds")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_ratios(DirectiveFlag::Vertical, "1001").is_err());

        let err =
            parse_directive(&raw(DirectiveFlag::Star, &["3000000000", "5", "5", "3", "0"])).unwrap_err();
        assert!(matches!(err, FlagError::InvalidArgument { .. }));

        let err = parse_directive(&raw(DirectiveFlag::Side, &["8", "99999999999", "left"])).unwrap_err();
        assert!(matches!(err, FlagError::InvalidArgument { .. }));
    }

    #[test]
    fn test_parse_star() {
        let d = parse_directive(&raw(DirectiveFlag::Star, &["5", "6", "3", "2", "-18"])).unwrap();
        assert_eq!(
            d,
            Directive::Star {
                points: 5,
                cx: 6.0,
                cy: 3.0,
                radius: 2.0,
                rotation: -18.0,
            }
        );
    }

    #[test]
    fn test_parse_triangle() {
        let d = parse_directive(&raw(DirectiveFlag::Triangle, &["0,0 10,7.5 0,15"])).unwrap();
        assert_eq!(
            d,
            Directive::Triangle {
                points: [Point::new(0.0, 0.0), Point::new(10.0, 7.5), Point::new(0.0, 15.0)],
            }
        );

        let err = parse_directive(&raw(DirectiveFlag::Triangle, &["0,0 10,7.5"])).unwrap_err();
        assert!(matches!(err, FlagError::InvalidArgument { .. }));

        let err = parse_directive(&raw(DirectiveFlag::Triangle, &["0;0 1,1 2,2"])).unwrap_err();
        assert!(matches!(err, FlagError::InvalidArgument { .. }));
    }

    #[test]
    fn test_parse_side_alignment() {
        let d = parse_directive(&raw(DirectiveFlag::Side, &["8", "3", "RIGHT"])).unwrap();
        assert_eq!(
            d,
            Directive::Side {
                width: 8.0,
                count: 3,
                alignment: Alignment::Right,
            }
        );

        let err = parse_directive(&raw(DirectiveFlag::Side, &["8", "3", "top"])).unwrap_err();
        assert!(matches!(err, FlagError::InvalidArgument { .. }));
    }

    #[test]
    fn test_arity_mismatch() {
        let err = parse_directive(&raw(DirectiveFlag::Circle, &["1", "2"])).unwrap_err();
        match err {
            FlagError::InvalidArgument { message, .. } => {
                assert!(message.contains("--circle expects 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric() {
        let err = parse_directive(&raw(DirectiveFlag::Rect, &["1", "2", "wide", "4"])).unwrap_err();
        match err {
            FlagError::InvalidArgument { message, .. } => assert!(message.contains("'wide'")),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(parse_directive(&raw(DirectiveFlag::Circle, &["1", "NaN", "2"])).is_err());
    }

    #[test]
    fn test_unsupported() {
        let err = parse_directive(&raw(DirectiveFlag::Diagonal, &[])).unwrap_err();
        match err {
            FlagError::UnsupportedDirective { directive, .. } => assert_eq!(directive, "--diagonal"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_colours() {
        let colours = parse_colours(&["FFB81C".to_string(), "navy".to_string()]).unwrap();
        assert_eq!(colours, vec![Colour::rgb(0xFF, 0xB8, 0x1C), Colour::rgb(0, 0, 128)]);

        assert!(parse_colours(&["#12".to_string()]).is_err());
    }
}
