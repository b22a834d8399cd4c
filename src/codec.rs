//! Still-image encoding for snapshots and exports.
//!
//! Snapshots are stored as PNG so a captured frame decodes back to the
//! exact raster it was taken from.

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;

/// MIME type of PNG snapshots and still exports.
pub const PNG_MIME: &str = "image/png";
/// MIME type of animated exports.
pub const GIF_MIME: &str = "image/gif";

/// An encoded image blob tagged with its MIME type.
///
/// The byte payload is opaque to the frame-sequence core and shared, so
/// cloning an asset never copies the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedAsset {
    bytes: Arc<[u8]>,
    mime: &'static str,
}

impl EncodedAsset {
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime: &'static str) -> Self {
        Self {
            bytes: bytes.into(),
            mime,
        }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode a raster as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<EncodedAsset> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(EncodedAsset::new(cursor.into_inner(), PNG_MIME))
}

/// Decode an encoded still back into an RGBA raster.
///
/// The format is sniffed from the bytes rather than trusted from the MIME tag.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}
