//! Animated GIF encoding.
//!
//! Quantizing every frame is slow, so [`GifAnimationEncoder::render`] moves
//! the work onto a blocking worker and hands back a job to await.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{imageops, Delay, RgbaImage};
use tokio::task::{self, JoinHandle};
use tracing::debug;

use crate::codec::{EncodedAsset, GIF_MIME};
use crate::error::{Error, Result};

/// Per-frame delay for a playback rate, exact for any rate.
#[inline]
pub fn frame_delay(fps: u32) -> Delay {
    Delay::from_numer_denom_ms(1000, fps.max(1))
}

/// Collects frames and encodes them as a looping GIF.
pub struct GifAnimationEncoder {
    width: u32,
    height: u32,
    speed: i32,
    frames: Vec<(RgbaImage, Delay)>,
}

impl GifAnimationEncoder {
    /// Configure output size and quality.
    ///
    /// `quality` is the quantizer speed: 1 is the best and slowest, 30 the
    /// fastest. Values outside that range are clamped.
    pub fn new(width: u32, height: u32, quality: u8) -> Self {
        Self {
            width,
            height,
            speed: i32::from(quality.clamp(1, 30)),
            frames: Vec::new(),
        }
    }

    /// Queue a frame. Images of another size are scaled to the output size.
    pub fn add_frame(&mut self, image: RgbaImage, delay: Delay) {
        let image = if image.dimensions() == (self.width, self.height) {
            image
        } else {
            imageops::resize(&image, self.width, self.height, imageops::FilterType::Nearest)
        };
        self.frames.push((image, delay));
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode on the current thread.
    pub fn encode(self) -> Result<EncodedAsset> {
        if self.frames.is_empty() {
            return Err(Error::EmptySequence);
        }
        let count = self.frames.len();
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, self.speed);
            encoder.set_repeat(Repeat::Infinite)?;
            for (buffer, delay) in self.frames {
                encoder.encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))?;
            }
        }
        debug!(
            frames = count,
            width = self.width,
            height = self.height,
            bytes = bytes.len(),
            "gif encoded"
        );
        Ok(EncodedAsset::new(bytes, GIF_MIME))
    }

    /// Encode on a blocking worker. Must be called within a tokio runtime.
    pub fn render(self) -> RenderJob {
        RenderJob {
            handle: task::spawn_blocking(move || self.encode()),
        }
    }
}

/// An in-flight GIF encode.
///
/// Dropping the job does not cancel the encode.
pub struct RenderJob {
    handle: JoinHandle<Result<EncodedAsset>>,
}

impl RenderJob {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the single terminal result.
    pub async fn finished(self) -> Result<EncodedAsset> {
        self.handle.await?
    }
}
