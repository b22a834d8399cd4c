//! Editor settings, optionally loaded from TOML.

use crate::error::Result;
#[cfg(feature = "toml")]
use crate::error::Error;
use crate::sizing::{GridGeometry, DEFAULT_DISPLAY_BUDGET};
use crate::Rgb;

/// Start-up settings for a [`FrameSequenceController`](crate::FrameSequenceController).
///
/// Every field has a default, so a config file only needs to name the
/// settings it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Cells per side of a new canvas
    pub grid_size: u32,
    /// Canvas side length in pixels; cells are `display_budget / grid_size` wide
    pub display_budget: u32,
    /// Playback rate in frames per second
    pub frame_rate: u32,
    pub pen_color: String,
    pub grid_color: String,
    /// GIF quantizer speed, 1 (best) to 30 (fastest)
    pub gif_quality: u8,
    pub still_file_name: String,
    pub animation_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 16,
            display_budget: DEFAULT_DISPLAY_BUDGET,
            frame_rate: 10,
            pen_color: "#000000".to_string(),
            grid_color: "#cccccc".to_string(),
            gif_quality: 10,
            still_file_name: "pixel-art.png".to_string(),
            animation_file_name: "pixel-art.gif".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a TOML document into an `EditorConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Grid layout for the configured size and budget.
    pub fn geometry(&self) -> Result<GridGeometry> {
        GridGeometry::new(self.grid_size, self.display_budget)
    }

    pub fn pen_rgb(&self) -> Result<Rgb> {
        self.pen_color.parse()
    }

    pub fn grid_rgb(&self) -> Result<Rgb> {
        self.grid_color.parse()
    }
}
