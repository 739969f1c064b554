//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, Result};

/// An opaque RGB fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (expanded to 6 digits) and `#RRGGBB`. The leading
    /// `#` is optional, so `FFB81C` and `#FFB81C` are equivalent.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let digits = hex.as_bytes();
                let r = parse_hex_digit(digits[0] as char)?;
                let g = parse_hex_digit(digits[1] as char)?;
                let b = parse_hex_digit(digits[2] as char)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Look up a CSS colour keyword (`navy`, `white`, `forestgreen`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        palette::named::from_str(&name.trim().to_ascii_lowercase())
            .map(|c| Self::rgb(c.red, c.green, c.blue))
    }

    /// Parse either a hex code or a colour name.
    pub fn parse(s: &str) -> Result<Self> {
        match Self::from_hex(s) {
            Ok(colour) => Ok(colour),
            Err(err) => Self::from_name(s).ok_or(err),
        }
    }

    /// Lower-case hex digits without the leading `#`, used in group ids.
    pub fn hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = FlagError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> FlagError {
    FlagError::InvalidArgument {
        message: format!("Invalid colour: {}", s),
        help: Some("Use #RGB or #RRGGBB hex codes, or a CSS colour name".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| FlagError::invalid(format!("Invalid hex digit: {}", c)))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| FlagError::invalid(format!("Invalid hex byte: {}", s)))
}
