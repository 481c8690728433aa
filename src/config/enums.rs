//! Configuration enum types.

use crate::draw::{Rgb, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// base_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// background = [240, 240, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to an [`Rgb`] triple.
    ///
    /// Unknown color names fall back to `fallback` with a warning.
    pub fn to_rgb(&self, fallback: Rgb) -> Rgb {
        match self {
            ColorSpec::Name(name) => name_to_color(name).map(Rgb::from).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {:?}", name, fallback);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Rgb::new(i32::from(*r), i32::from(*g), i32::from(*b)),
        }
    }

    /// Returns `true` if this is a name that does not map to a known color.
    pub(crate) fn is_unknown_name(&self) -> bool {
        matches!(self, ColorSpec::Name(name) if name_to_color(name).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_rgb_specs_convert() {
        let fallback = Rgb::new(1, 2, 3);
        assert_eq!(
            ColorSpec::Name("white".to_string()).to_rgb(fallback),
            Rgb::new(255, 255, 255)
        );
        assert_eq!(
            ColorSpec::Rgb([10, 20, 30]).to_rgb(fallback),
            Rgb::new(10, 20, 30)
        );
        assert_eq!(
            ColorSpec::Name("mauve".to_string()).to_rgb(fallback),
            fallback
        );
    }
}
