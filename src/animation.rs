//! Preview playback: a timer that cycles through the frame list.
//!
//! Playback only ever reads the frame list and writes to a separate
//! preview sink, so it can run alongside editing without coordination.

use std::sync::Arc;
use std::time::Duration;

use image::RgbaImage;
use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::data::{Frame, FrameList};
use crate::error::Result;

/// Receives the frame under the playback cursor on every tick.
pub trait PreviewSink: Send + 'static {
    fn show(&mut self, index: usize, frame: &Frame) -> Result<()>;
}

/// Preview sink shared between the controller and the playback task.
pub type SharedPreview = Arc<Mutex<dyn PreviewSink>>;

/// Preview surface that keeps the last frame shown.
///
/// The frame is stored encoded and decoded on demand, so ticks never
/// decode while the preview lock is held.
#[derive(Clone, Debug, Default)]
pub struct PreviewCanvas {
    shown: Option<usize>,
    frame: Option<Frame>,
}

impl PreviewCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the frame currently displayed.
    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Decode the displayed frame.
    pub fn image(&self) -> Result<Option<RgbaImage>> {
        self.frame.as_ref().map(Frame::decode).transpose()
    }
}

impl PreviewSink for PreviewCanvas {
    fn show(&mut self, index: usize, frame: &Frame) -> Result<()> {
        self.frame = Some(frame.clone());
        self.shown = Some(index);
        Ok(())
    }
}

/// Whether a playback timer is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Circular cursor over the frame list.
///
/// ```rust
/// use pixel_frames_core::PlaybackCursor;
///
/// let mut cursor = PlaybackCursor::new();
/// assert_eq!(cursor.advance(3), Some(0));
/// assert_eq!(cursor.advance(3), Some(1));
/// assert_eq!(cursor.advance(3), Some(2));
/// assert_eq!(cursor.position(), 0);
/// assert_eq!(cursor.advance(0), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackCursor {
    position: usize,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next frame to render.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Step over a list of `len` frames, wrapping at the end.
    ///
    /// Returns the index to render on this tick, or `None` for an empty list
    /// (the cursor does not move). A cursor left past the end by a shrinking
    /// list wraps back into range.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = self.position % len;
        self.position = (index + 1) % len;
        Some(index)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Time between playback ticks.
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Owner of the playback timer task.
///
/// At most one timer runs at a time: starting again cancels the previous
/// one, and the new timer begins from cursor position 0.
pub struct Playback {
    preview: SharedPreview,
    fps: u32,
    task: Option<JoinHandle<()>>,
    position: watch::Receiver<usize>,
}

impl Playback {
    /// Create a stopped playback that renders into `preview`.
    pub fn new(preview: SharedPreview) -> Self {
        let (_, position) = watch::channel(0);
        Self {
            preview,
            fps: 1,
            task: None,
            position,
        }
    }

    /// Start (or restart) the timer at `fps` frames per second.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, frames: Arc<RwLock<FrameList>>, fps: u32) {
        self.stop();
        self.fps = fps.max(1);

        let (tx, rx) = watch::channel(0);
        self.position = rx;
        let period = frame_interval(self.fps);
        let preview = Arc::clone(&self.preview);
        self.task = Some(tokio::spawn(run_playback(frames, preview, period, tx)));
        info!(fps = self.fps, ?period, "playback started");
    }

    /// Cancel the timer, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn state(&self) -> PlaybackState {
        match &self.task {
            Some(task) if !task.is_finished() => PlaybackState::Playing,
            _ => PlaybackState::Stopped,
        }
    }

    /// Rate of the current (or last) timer.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Cursor position: the index of the next frame the timer will render.
    pub fn position(&self) -> usize {
        *self.position.borrow()
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_playback(
    frames: Arc<RwLock<FrameList>>,
    preview: SharedPreview,
    period: Duration,
    position: watch::Sender<usize>,
) {
    // First tick lands one period after start.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cursor = PlaybackCursor::new();

    loop {
        ticker.tick().await;

        let next = {
            let list = frames.read();
            cursor
                .advance(list.len())
                .and_then(|index| list.get(index).cloned().map(|frame| (index, frame)))
        };
        let Some((index, frame)) = next else {
            continue;
        };

        if let Err(err) = preview.lock().show(index, &frame) {
            warn!(index, error = %err, "preview render failed");
        }
        position.send_replace(cursor.position());
    }
}
