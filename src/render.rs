//! The drawing surface: an RGBA raster divided into grid cells.

use image::{imageops, RgbaImage};

use crate::codec;
use crate::data::Frame;
use crate::error::Result;
use crate::sizing::GridGeometry;
use crate::Rgb;

/// Background fill for blank canvases and the eraser.
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Pixel-art drawing surface.
///
/// Cells are filled as solid squares and a one-pixel grid overlay is
/// drawn along every cell boundary. The overlay is part of the raster,
/// so it is captured in snapshots and exports.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    geometry: GridGeometry,
    grid_color: Rgb,
    pixels: RgbaImage,
}

impl PixelCanvas {
    /// Create a blank canvas with the grid overlay drawn.
    pub fn new(geometry: GridGeometry, grid_color: Rgb) -> Self {
        let size = geometry.canvas_size();
        let mut canvas = Self {
            geometry,
            grid_color,
            pixels: RgbaImage::from_pixel(size, size, BACKGROUND.to_rgba()),
        };
        canvas.draw_grid();
        canvas
    }

    /// Resize to `geometry`, fill with the background and redraw the grid.
    pub fn reset(&mut self, geometry: GridGeometry) {
        let size = geometry.canvas_size();
        self.geometry = geometry;
        self.pixels = RgbaImage::from_pixel(size, size, BACKGROUND.to_rgba());
        self.draw_grid();
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Raster width and height in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// The current raster, overlay included.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Fill one grid cell. Cells outside the grid are ignored.
    ///
    /// The overlay is not redrawn; call [`draw_grid`](Self::draw_grid) after.
    pub fn fill_cell(&mut self, cx: u32, cy: u32, color: Rgb) {
        let grid = self.geometry.grid_size();
        if cx >= grid || cy >= grid {
            return;
        }
        let (x0, y0) = self.geometry.cell_origin(cx, cy);
        let cell = self.geometry.cell_size();
        let pixel = color.to_rgba();
        for y in y0..y0 + cell {
            for x in x0..x0 + cell {
                self.pixels.put_pixel(x, y, pixel);
            }
        }
    }

    /// Draw the grid lines at every cell boundary in both axes.
    ///
    /// The closing boundary falls one pixel past the raster and is drawn on
    /// the last row/column instead.
    pub fn draw_grid(&mut self) {
        let (width, height) = self.pixels.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let cell = self.geometry.cell_size();
        let pixel = self.grid_color.to_rgba();
        for i in 0..=self.geometry.grid_size() {
            let x = (i * cell).min(width - 1);
            for y in 0..height {
                self.pixels.put_pixel(x, y, pixel);
            }
            let y = (i * cell).min(height - 1);
            for x in 0..width {
                self.pixels.put_pixel(x, y, pixel);
            }
        }
    }

    /// Color at the middle of a cell.
    pub fn cell_color(&self, cx: u32, cy: u32) -> Option<Rgb> {
        let grid = self.geometry.grid_size();
        if cx >= grid || cy >= grid {
            return None;
        }
        let (x, y) = self.geometry.cell_center(cx, cy);
        Some(Rgb::from_rgba(*self.pixels.get_pixel(x, y)))
    }

    /// Capture the current content as an immutable frame.
    pub fn encode_snapshot(&self) -> Result<Frame> {
        let asset = codec::encode_png(&self.pixels)?;
        Ok(Frame::new(asset, self.pixels.width(), self.pixels.height()))
    }

    /// Replace the content with a decoded snapshot, scaled to fit, then
    /// redraw the overlay.
    pub fn draw_image(&mut self, image: &RgbaImage) {
        let (width, height) = self.pixels.dimensions();
        if image.dimensions() == (width, height) {
            self.pixels.clone_from(image);
        } else {
            self.pixels = imageops::resize(image, width, height, imageops::FilterType::Nearest);
        }
        self.draw_grid();
    }
}
