//! Grid geometry: how an N×N pixel-art grid is laid out on the canvas.

use crate::error::{Error, Result};

/// Physical canvas budget, in pixels per side.
pub const DEFAULT_DISPLAY_BUDGET: u32 = 512;

/// Largest canvas side a grid may be laid out on.
pub const MAX_DISPLAY_BUDGET: u32 = 4096;

/// Layout of the drawing grid.
///
/// The cell size is derived from the display budget and must be
/// recomputed whenever the grid dimension changes.
///
/// ```rust
/// use pixel_frames_core::GridGeometry;
///
/// let geometry = GridGeometry::new(16, 512).unwrap();
/// assert_eq!(geometry.cell_size(), 32);
/// assert_eq!(geometry.pointer_to_cell(70.0, 100.5), Some((2, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    grid_size: u32,
    cell_size: u32,
}

impl GridGeometry {
    /// Lay out `grid_size` cells per side inside `budget` pixels.
    ///
    /// Cell size is `budget / grid_size`, floored. Fails when the grid is
    /// empty, has more cells than the budget has pixels, or the budget
    /// exceeds [`MAX_DISPLAY_BUDGET`].
    pub fn new(grid_size: u32, budget: u32) -> Result<Self> {
        if grid_size == 0 || grid_size > budget || budget > MAX_DISPLAY_BUDGET {
            return Err(Error::InvalidGridSize { grid_size, budget });
        }
        Ok(Self {
            grid_size,
            cell_size: budget / grid_size,
        })
    }

    /// Number of cells per side.
    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Width and height of a single cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Side length of the raster in pixels.
    #[inline]
    pub fn canvas_size(&self) -> u32 {
        self.grid_size * self.cell_size
    }

    /// Convert pointer coordinates (relative to the surface's top-left corner)
    /// into a cell index.
    ///
    /// Returns `None` when the pointer lies outside the grid.
    pub fn pointer_to_cell(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let cell = self.cell_size as f64;
        let cx = (x / cell).floor() as u32;
        let cy = (y / cell).floor() as u32;
        (cx < self.grid_size && cy < self.grid_size).then_some((cx, cy))
    }

    /// Pixel origin of a cell.
    #[inline]
    pub fn cell_origin(&self, cx: u32, cy: u32) -> (u32, u32) {
        (cx * self.cell_size, cy * self.cell_size)
    }

    /// Pixel at the middle of a cell, clear of the grid overlay.
    #[inline]
    pub fn cell_center(&self, cx: u32, cy: u32) -> (u32, u32) {
        let (x, y) = self.cell_origin(cx, cy);
        (x + self.cell_size / 2, y + self.cell_size / 2)
    }
}
