//! Command-line argument parsing for flag specifications.
//!
//! Directive flags may be repeated and interleaved, and their order on the
//! command line is the paint order. Clap groups values per argument, so the
//! directive flags are registered by hand and their occurrences are put back
//! in command-line order using each value's index.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};

use crate::error::{FlagError, Result};
use crate::types::{Directive, FlagSpec};

use super::values::{parse_colours, parse_directive};

/// Every directive flag the command line recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveFlag {
    Vertical,
    Horizontal,
    Cross,
    Circle,
    Rect,
    Triangle,
    Canton,
    Side,
    Wedge,
    Star,
    Moon,
    // Recognized only to be rejected.
    Diagonal,
    Saltire,
    Emblem,
}

impl DirectiveFlag {
    pub const ALL: [DirectiveFlag; 14] = [
        DirectiveFlag::Vertical,
        DirectiveFlag::Horizontal,
        DirectiveFlag::Cross,
        DirectiveFlag::Circle,
        DirectiveFlag::Rect,
        DirectiveFlag::Triangle,
        DirectiveFlag::Canton,
        DirectiveFlag::Side,
        DirectiveFlag::Wedge,
        DirectiveFlag::Star,
        DirectiveFlag::Moon,
        DirectiveFlag::Diagonal,
        DirectiveFlag::Saltire,
        DirectiveFlag::Emblem,
    ];

    /// Clap id and long flag name.
    pub fn id(self) -> &'static str {
        match self {
            DirectiveFlag::Vertical => "vertical",
            DirectiveFlag::Horizontal => "horizontal",
            DirectiveFlag::Cross => "cross",
            DirectiveFlag::Circle => "circle",
            DirectiveFlag::Rect => "rect",
            DirectiveFlag::Triangle => "triangle",
            DirectiveFlag::Canton => "canton",
            DirectiveFlag::Side => "side",
            DirectiveFlag::Wedge => "wedge",
            DirectiveFlag::Star => "star",
            DirectiveFlag::Moon => "moon",
            DirectiveFlag::Diagonal => "diagonal",
            DirectiveFlag::Saltire => "saltire",
            DirectiveFlag::Emblem => "emblem",
        }
    }

    /// Value names, one per expected value. Empty for unsupported flags.
    pub fn value_names(self) -> &'static [&'static str] {
        match self {
            DirectiveFlag::Vertical | DirectiveFlag::Horizontal => &["N|RATIOS"],
            DirectiveFlag::Cross => &["ARM_X", "ARM_Y", "THICK_A", "THICK_B"],
            DirectiveFlag::Circle => &["CX", "CY", "R"],
            DirectiveFlag::Rect => &["X", "Y", "W", "H"],
            DirectiveFlag::Triangle => &["POINTS"],
            DirectiveFlag::Canton => &["W", "H"],
            DirectiveFlag::Side => &["WIDTH", "COUNT", "left|right"],
            DirectiveFlag::Wedge => &["WIDTH", "EDGE", "left|right"],
            DirectiveFlag::Star => &["POINTS", "CX", "CY", "R", "ROTATION"],
            DirectiveFlag::Moon => &["CX", "CY", "R", "DX", "DY", "INNER_R"],
            DirectiveFlag::Diagonal | DirectiveFlag::Saltire | DirectiveFlag::Emblem => &[],
        }
    }

    /// Number of values per occurrence, or `None` if the directive is unsupported.
    pub fn arity(self) -> Option<usize> {
        match self.value_names().len() {
            0 => None,
            n => Some(n),
        }
    }

    fn help(self) -> &'static str {
        match self {
            DirectiveFlag::Vertical => "Vertical stripes: a count (3) or comma-separated width ratios (\"10,8,12\")",
            DirectiveFlag::Horizontal => "Horizontal stripes: a count (3) or comma-separated height ratios (\"9,6,3\")",
            DirectiveFlag::Cross => "Cross with arms centred at ARM_X/ARM_Y; THICK_B=0 reuses THICK_A for the horizontal arm",
            DirectiveFlag::Circle => "Circle at (CX, CY) with radius R",
            DirectiveFlag::Rect => "Rectangle at (X, Y) sized W x H",
            DirectiveFlag::Triangle => "Triangle from a quoted point list (\"x1,y1 x2,y2 x3,y3\")",
            DirectiveFlag::Canton => "Top-left canton sized W x H",
            DirectiveFlag::Side => "Full-height edge strip split into COUNT stacked divisions",
            DirectiveFlag::Wedge => "Hoist bar (EDGE=height), triangle (EDGE=0) or trapezoid",
            DirectiveFlag::Star => "Star with POINTS points, outer radius R, rotated ROTATION degrees",
            DirectiveFlag::Moon => "Crescent: disc of radius R with a disc of INNER_R cut out at offset (DX, DY)",
            DirectiveFlag::Diagonal | DirectiveFlag::Saltire | DirectiveFlag::Emblem => "Not supported",
        }
    }

    fn arg(self) -> Arg {
        let arg = Arg::new(self.id())
            .long(self.id())
            .action(ArgAction::Append)
            .value_parser(value_parser!(String))
            .help(self.help());

        let arg = if self == DirectiveFlag::Vertical {
            arg.short('v')
        } else {
            arg
        };

        match self.arity() {
            Some(n) => arg
                .num_args(n)
                .value_names(self.value_names().iter().copied())
                .allow_negative_numbers(true),
            None => arg.num_args(0..).hide(true),
        }
    }
}

/// One occurrence of a directive flag, before its values are typed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDirective {
    pub flag: DirectiveFlag,
    pub values: Vec<String>,
    /// Position of the first value on the command line.
    pub index: usize,
}

/// Directive flags in command-line order.
#[derive(Debug, Clone, Default)]
pub struct DirectiveArgs {
    raw: Vec<RawDirective>,
}

impl DirectiveArgs {
    pub fn raw(&self) -> &[RawDirective] {
        &self.raw
    }

    /// Type every occurrence, stopping at the first bad one.
    pub fn directives(&self) -> Result<Vec<Directive>> {
        self.raw.iter().map(parse_directive).collect()
    }
}

impl Args for DirectiveArgs {
    fn augment_args(cmd: Command) -> Command {
        DirectiveFlag::ALL
            .iter()
            .fold(cmd, |cmd, flag| cmd.arg(flag.arg()))
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

impl FromArgMatches for DirectiveArgs {
    fn from_arg_matches(matches: &ArgMatches) -> std::result::Result<Self, clap::Error> {
        let mut raw = Vec::new();

        for flag in DirectiveFlag::ALL {
            let id = flag.id();
            if matches.value_source(id) != Some(ValueSource::CommandLine) {
                continue;
            }

            let values: Vec<String> = matches
                .get_many::<String>(id)
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            let indices: Vec<usize> = matches
                .indices_of(id)
                .map(|i| i.collect())
                .unwrap_or_default();

            match flag.arity() {
                Some(n) => {
                    for (chunk, at) in values.chunks(n).zip(indices.chunks(n)) {
                        raw.push(RawDirective {
                            flag,
                            values: chunk.to_vec(),
                            index: at[0],
                        });
                    }
                }
                None => raw.push(RawDirective {
                    flag,
                    values,
                    index: matches.index_of(id).unwrap_or(0),
                }),
            }
        }

        raw.sort_by_key(|r| r.index);
        Ok(Self { raw })
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> std::result::Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

/// Arguments describing one flag: country, canvas, directives and colours.
#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Country name (also names the output file)
    pub country: String,

    /// Canvas width in units
    #[arg(short = 'x', long = "width", value_name = "WIDTH", allow_negative_numbers = true)]
    pub width: f64,

    /// Canvas height in units
    #[arg(short = 'y', long = "height", value_name = "HEIGHT", allow_negative_numbers = true)]
    pub height: f64,

    #[command(flatten)]
    pub directives: DirectiveArgs,

    /// Colours in directive order (hex codes or CSS colour names)
    #[arg(short = 'c', long = "colours", visible_alias = "colors", num_args = 1.., value_name = "COLOUR")]
    pub colours: Vec<String>,
}

impl SpecArgs {
    /// Type the directives and colours into a flag specification.
    pub fn to_spec(&self) -> Result<FlagSpec> {
        Ok(FlagSpec {
            country: self.country.clone(),
            width: self.width,
            height: self.height,
            directives: self.directives.directives()?,
            colours: parse_colours(&self.colours)?,
        })
    }
}

/// Parse a flat argument list (without a program name) into a flag specification.
///
/// ```ignore
/// let spec = parse_spec_args(["LITHUANIA", "-x", "5", "-y", "3", "--horizontal", "3",
///     "-c", "FFB81C", "046A38", "BE3A34"])?;
/// ```
pub fn parse_spec_args<I, T>(args: I) -> Result<FlagSpec>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = SpecArgs::augment_args(Command::new("generate").no_binary_name(true));
    let matches = cmd.try_get_matches_from(args).map_err(from_clap)?;
    let args = SpecArgs::from_arg_matches(&matches).map_err(from_clap)?;
    args.to_spec()
}

/// Convert a clap error into an `InvalidArgument`, keeping clap's first line.
fn from_clap(err: clap::Error) -> FlagError {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();

    FlagError::InvalidArgument {
        message,
        help: Some("Run `vexil generate --help` for usage".to_string()),
    }
}
