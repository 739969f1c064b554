//! Flag specification: the parsed input to the layout engine.

use serde::{Deserialize, Serialize};

use super::{Colour, Directive};

/// Everything needed to lay out one flag.
///
/// Parsed once from command-line arguments or a manifest entry, then
/// consumed by [`crate::layout::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Country name as given by the user.
    pub country: String,

    /// Canvas width in abstract units.
    pub width: f64,

    /// Canvas height in abstract units.
    pub height: f64,

    /// Directives in declaration order.
    #[serde(default)]
    pub directives: Vec<Directive>,

    /// Colours, consumed positionally.
    #[serde(default)]
    pub colours: Vec<Colour>,
}

impl FlagSpec {
    pub fn new(country: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            country: country.into(),
            width,
            height,
            directives: Vec::new(),
            colours: Vec::new(),
        }
    }

    /// Append a directive (builder style).
    pub fn with(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Replace the colour list (builder style).
    pub fn with_colours(mut self, colours: impl IntoIterator<Item = Colour>) -> Self {
        self.colours = colours.into_iter().collect();
        self
    }

    /// Whether a full-canvas background is laid out before the directives.
    ///
    /// Stripe sets cover the canvas themselves; anything else is drawn over
    /// a background that claims the first colour.
    pub fn needs_background(&self) -> bool {
        !self.directives.iter().any(Directive::is_stripe_set)
    }

    /// Total number of colours the directive sequence demands.
    pub fn region_count(&self) -> usize {
        let background = usize::from(self.needs_background());
        background
            + self
                .directives
                .iter()
                .map(Directive::region_count)
                .sum::<usize>()
    }

    /// Human-readable summary, e.g. "background + 5-point star at (10,10) ...".
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.needs_background() {
            parts.push(if self.directives.is_empty() {
                "solid rectangle".to_string()
            } else {
                "background".to_string()
            });
        }
        parts.extend(self.directives.iter().map(|d| d.to_string()));
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, Orientation};

    #[test]
    fn test_region_count_with_stripes() {
        let spec = FlagSpec::new("lithuania", 5.0, 3.0).with(Directive::StripeSet {
            orientation: Orientation::Horizontal,
            ratios: vec![1.0; 3],
        });

        assert!(!spec.needs_background());
        assert_eq!(spec.region_count(), 3);
    }

    #[test]
    fn test_region_count_adds_background() {
        let spec = FlagSpec::new("madagascar", 30.0, 20.0)
            .with(Directive::Side {
                width: 10.0,
                count: 1,
                alignment: Alignment::Left,
            })
            .with(Directive::Circle {
                cx: 20.0,
                cy: 10.0,
                r: 3.0,
            });

        assert!(spec.needs_background());
        assert_eq!(spec.region_count(), 3);
    }

    #[test]
    fn test_empty_spec_is_solid() {
        let spec = FlagSpec::new("laos", 18.0, 15.0);
        assert_eq!(spec.region_count(), 1);
        assert_eq!(spec.describe(), "solid rectangle");
    }
}
