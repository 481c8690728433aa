//! Colour types: the integer RGB triple carried by instructions and the
//! floating-point RGBA colour handed to Cairo.

use serde::{Deserialize, Serialize};

/// An RGB triple exactly as the caller supplied it.
///
/// Components are expected in `0..=255` but are never validated here; whatever
/// the caller passed travels unchanged to the canvas primitive, which decides
/// how out-of-range values render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Converts to a [`Color`] by scaling each component by 1/255.
    ///
    /// No clamping is applied; Cairo clamps source colours itself.
    pub fn to_color(self) -> Color {
        Color {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: 1.0,
        }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Self {
            r: (color.r * 255.0).round() as i32,
            g: (color.g * 255.0).round() as i32,
            b: (color.b * 255.0).round() as i32,
        }
    }
}

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use scriptgfx::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default pen and brush colour.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
/// Matching is case-insensitive; unknown names return `None`.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_scales_without_clamping() {
        let color = Rgb::new(255, 0, 510).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 2.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn color_converts_back_to_rgb() {
        assert_eq!(Rgb::from(WHITE), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from(BLACK), Rgb::new(0, 0, 0));
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(name_to_color("Red"), Some(RED));
        assert_eq!(name_to_color("BLACK"), Some(BLACK));
        assert!(name_to_color("chartreuse").is_none());
    }
}
