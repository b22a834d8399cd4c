//! Frames and the ordered frame list.

use image::RgbaImage;

use crate::codec::{self, EncodedAsset};
use crate::error::Result;

/// One captured snapshot of the drawing surface.
///
/// Frames are immutable once captured; editing the surface afterwards
/// never changes a stored frame unless it is re-captured into its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    asset: EncodedAsset,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(asset: EncodedAsset, width: u32, height: u32) -> Self {
        Self {
            asset,
            width,
            height,
        }
    }

    /// The encoded still image.
    #[inline]
    pub fn asset(&self) -> &EncodedAsset {
        &self.asset
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decode back to an RGBA raster.
    pub fn decode(&self) -> Result<RgbaImage> {
        codec::decode_rgba(self.asset.bytes())
    }
}

/// A frame as shown in the frame strip.
#[derive(Clone, Debug)]
pub struct FrameEntry {
    pub index: usize,
    pub frame: Frame,
    /// Whether this is the frame currently loaded for editing
    pub active: bool,
}

/// What [`FrameList::remove`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Index was out of range; nothing changed
    Ignored,
    /// The last remaining frame was removed; the list is now empty
    Emptied,
    /// A frame was removed and others remain
    Removed { active: Option<usize> },
}

/// Ordered frames (insertion order is playback order) plus the
/// edit-active cursor.
///
/// The active index is always `None` or a valid index into the list.
#[derive(Clone, Debug, Default)]
pub struct FrameList {
    frames: Vec<Frame>,
    active: Option<usize>,
}

impl FrameList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the frame loaded for editing, if any.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Insert right after the active frame (or append when none is
    /// active) and make the new frame active.
    ///
    /// Returns the index of the inserted frame.
    pub fn insert_after_active(&mut self, frame: Frame) -> usize {
        let index = match self.active {
            Some(active) => active + 1,
            None => self.frames.len(),
        };
        self.frames.insert(index, frame);
        self.active = Some(index);
        index
    }

    /// Remove the frame at `index`.
    ///
    /// Removing from a list with one frame (or none) empties it no matter
    /// which index was given. Otherwise an active index at or after the
    /// removed one moves back by one; removing frame 0 while it is active
    /// leaves no frame active.
    pub fn remove(&mut self, index: usize) -> Removal {
        if self.frames.len() <= 1 {
            self.clear();
            return Removal::Emptied;
        }
        if index >= self.frames.len() {
            return Removal::Ignored;
        }
        self.frames.remove(index);
        if let Some(active) = self.active {
            if active >= index {
                self.active = active.checked_sub(1);
            }
        }
        Removal::Removed {
            active: self.active,
        }
    }

    /// Mark `index` as active. Returns `false` if it is out of range.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Overwrite the active frame. Returns `false` when no frame is active.
    pub fn replace_active(&mut self, frame: Frame) -> bool {
        match self.active.and_then(|i| self.frames.get_mut(i)) {
            Some(slot) => {
                *slot = frame;
                true
            }
            None => false,
        }
    }

    /// Drop every frame and the active cursor.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.active = None;
    }

    /// Frame strip contents with the selected marker.
    pub fn entries(&self) -> Vec<FrameEntry> {
        self.frames
            .iter()
            .enumerate()
            .map(|(index, frame)| FrameEntry {
                index,
                frame: frame.clone(),
                active: self.active == Some(index),
            })
            .collect()
    }
}
