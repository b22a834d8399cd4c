//! Drawing tools and pen settings.

use crate::render::BACKGROUND;
use crate::Rgb;

/// The active drawing tool. Exactly one is selected at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tool {
    /// Paint cells with the pen color
    #[default]
    Pen,
    /// Paint cells with the background
    Eraser,
}

/// Current tool, pen color and playback rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolState {
    pub tool: Tool,
    pub pen_color: Rgb,
    frame_rate: u32,
}

impl ToolState {
    pub fn new(pen_color: Rgb, frame_rate: u32) -> Self {
        Self {
            tool: Tool::Pen,
            pen_color,
            frame_rate: frame_rate.max(1),
        }
    }

    /// Color a cell is filled with under the current tool.
    #[inline]
    pub fn fill_color(&self) -> Rgb {
        match self.tool {
            Tool::Pen => self.pen_color,
            Tool::Eraser => BACKGROUND,
        }
    }

    /// Playback rate in frames per second, always at least 1.
    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn set_frame_rate(&mut self, fps: u32) {
        self.frame_rate = fps.max(1);
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Rgb::BLACK, 10)
    }
}
