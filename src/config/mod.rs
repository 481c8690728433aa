//! Configuration file support for scriptgfx.
//!
//! Settings are read from `~/.config/scriptgfx/config.toml` and cover the
//! drawing defaults (base colour, pen width, font) and surface defaults
//! (fallback title, background). If no config file exists, defaults are used.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use crate::draw::{BLACK, DrawingDefaults, FontDescriptor, Rgb, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// base_color = "black"
/// line_width = 1
/// font_family = "Sans"
/// font_size = 10.0
///
/// [surface]
/// default_title = "ScriptStack GFX"
/// background = [255, 255, 255]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Drawing defaults (colour, pen width, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface defaults (title, background)
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `line_width`: 1 - 64
    /// - `font_size`: 4.0 - 96.0
    fn validate_and_clamp(&mut self) {
        if !(1..=64).contains(&self.drawing.line_width) {
            warn!(
                "Invalid line_width {}, clamping to 1-64 range",
                self.drawing.line_width
            );
            self.drawing.line_width = self.drawing.line_width.clamp(1, 64);
        }

        if !(4.0..=96.0).contains(&self.drawing.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 4.0-96.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = self.drawing.font_size.clamp(4.0, 96.0);
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.drawing.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = "Sans".to_string();
        }

        if self.drawing.base_color.is_unknown_name() {
            warn!(
                "Unknown base_color {:?}, falling back to black",
                self.drawing.base_color
            );
            self.drawing.base_color = ColorSpec::Name("black".to_string());
        }

        if self.surface.background.is_unknown_name() {
            warn!(
                "Unknown background {:?}, falling back to white",
                self.surface.background
            );
            self.surface.background = ColorSpec::Name("white".to_string());
        }
    }

    /// Drawing defaults every replay pass starts from.
    pub fn drawing_defaults(&self) -> DrawingDefaults {
        DrawingDefaults {
            color: self.drawing.base_color.to_rgb(Rgb::from(BLACK)),
            line_width: self.drawing.line_width,
        }
    }

    /// The fixed session font.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
            self.drawing.font_size,
        )
    }

    /// Background colour surfaces clear to before each paint.
    pub fn background(&self) -> Rgb {
        self.surface.background.to_rgb(Rgb::from(WHITE))
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scriptgfx");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
