//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing defaults applied at the start of every replay pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen and brush color - a named color or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_base_color")]
    pub base_color: ColorSpec,

    /// Initial pen width in pixels (valid range: 1 - 64)
    #[serde(default = "default_line_width")]
    pub line_width: i32,

    /// Font family name for text (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (valid range: 4.0 - 96.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            line_width: default_line_width(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Title used when a script opens a surface with an empty title
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Color every frame is cleared to before replay
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_base_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> i32 {
    1
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    10.0
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_title() -> String {
    "ScriptStack GFX".to_string()
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
