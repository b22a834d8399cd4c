//! The frame sequence controller.
//!
//! Owns the drawing surface, the frame list, tool settings and the
//! playback timer, and is the only place the frame list is mutated.
//!
//! Operations that decode a stored frame suspend while the decode runs on a
//! blocking worker. They take `&mut self`, so a second load can never start
//! against the surface while one is in flight.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task;
use tracing::{debug, info};

use crate::animation::{Playback, PlaybackState, SharedPreview};
use crate::codec::{self, EncodedAsset};
use crate::config::EditorConfig;
use crate::data::{Frame, FrameEntry, FrameList, Removal};
use crate::encoder::{frame_delay, GifAnimationEncoder};
use crate::error::{Error, Result};
use crate::export::{ExportJob, ExportSink};
use crate::render::PixelCanvas;
use crate::sizing::GridGeometry;
use crate::tool::{Tool, ToolState};
use crate::Rgb;

/// Pixel-art animation editor state.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use pixel_frames_core::{
///     DirectorySink, EditorConfig, FrameSequenceController, PreviewCanvas, SharedPreview,
/// };
///
/// # async fn run() -> pixel_frames_core::Result<()> {
/// let preview: SharedPreview = Arc::new(Mutex::new(PreviewCanvas::new()));
/// let sink = Arc::new(DirectorySink::new("exports"));
/// let mut editor = FrameSequenceController::open(EditorConfig::default(), preview, sink).await?;
///
/// editor.pointer_down(70.0, 100.0);
/// editor.pointer_up()?;
/// editor.add_frame().await?;
/// editor.export_animated()?.finished().await?;
/// # Ok(())
/// # }
/// ```
pub struct FrameSequenceController {
    config: EditorConfig,
    canvas: PixelCanvas,
    frames: Arc<RwLock<FrameList>>,
    tools: ToolState,
    drawing: bool,
    playback: Playback,
    sink: Arc<dyn ExportSink>,
}

impl FrameSequenceController {
    /// Build the editor: blank canvas, one blank frame, playback running.
    ///
    /// Must be called within a tokio runtime.
    pub async fn open(
        config: EditorConfig,
        preview: SharedPreview,
        sink: Arc<dyn ExportSink>,
    ) -> Result<Self> {
        let geometry = config.geometry()?;
        let tools = ToolState::new(config.pen_rgb()?, config.frame_rate);
        let canvas = PixelCanvas::new(geometry, config.grid_rgb()?);

        let mut controller = Self {
            config,
            canvas,
            frames: Arc::new(RwLock::new(FrameList::new())),
            tools,
            drawing: false,
            playback: Playback::new(preview),
            sink,
        };
        controller.add_frame().await?;
        controller.start_playback();
        Ok(controller)
    }

    /// Lay out a `grid_size` grid, blank the surface and discard every frame.
    ///
    /// Frames captured at another resolution cannot be reinterpreted, so
    /// the frame list is emptied and nothing is active afterwards. On error
    /// the editor is left unchanged.
    pub fn initialize_canvas(&mut self, grid_size: u32) -> Result<()> {
        let geometry = GridGeometry::new(grid_size, self.config.display_budget)?;
        self.canvas.reset(geometry);
        self.config.grid_size = grid_size;
        self.frames.write().clear();
        info!(
            grid_size,
            cell_size = geometry.cell_size(),
            "canvas initialized, frames cleared"
        );
        Ok(())
    }

    /// Blank the surface at the current grid size. Frames are kept.
    pub fn clear_canvas(&mut self) {
        let geometry = self.canvas.geometry();
        self.canvas.reset(geometry);
    }

    /// Pointer pressed on the surface: start a gesture and paint.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.drawing = true;
        self.draw_at_pointer(x, y)
    }

    /// Pointer moved over the surface.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.draw_at_pointer(x, y)
    }

    /// Pointer released: end the gesture and keep the edit in the active frame.
    pub fn pointer_up(&mut self) -> Result<bool> {
        self.drawing = false;
        self.commit_active_frame_edit()
    }

    /// Pointer left the surface: end the gesture without committing.
    pub fn pointer_leave(&mut self) {
        self.drawing = false;
    }

    /// Paint the cell under the pointer with the current tool.
    ///
    /// Does nothing unless a gesture is in progress or when the pointer is
    /// outside the grid. Returns whether a cell was painted.
    pub fn draw_at_pointer(&mut self, x: f64, y: f64) -> bool {
        if !self.drawing {
            return false;
        }
        let Some((cx, cy)) = self.canvas.geometry().pointer_to_cell(x, y) else {
            return false;
        };
        self.canvas.fill_cell(cx, cy, self.tools.fill_color());
        self.canvas.draw_grid();
        true
    }

    /// Re-capture the surface into the active frame.
    ///
    /// With no active frame the surface is scratch space and nothing is
    /// stored. Returns whether a frame was overwritten.
    pub fn commit_active_frame_edit(&mut self) -> Result<bool> {
        let Some(active) = self.frames.read().active() else {
            return Ok(false);
        };
        let frame = self.canvas.encode_snapshot()?;
        let replaced = self.frames.write().replace_active(frame);
        debug!(active, "active frame updated");
        Ok(replaced)
    }

    /// Capture the surface as a new frame right after the active one and
    /// make it active. Returns the new frame's index.
    pub async fn add_frame(&mut self) -> Result<usize> {
        let frame = self.canvas.encode_snapshot()?;
        let (index, len) = {
            let mut frames = self.frames.write();
            let index = frames.insert_after_active(frame);
            (index, frames.len())
        };
        debug!(index, len, "frame added");
        self.load_frame(index).await?;
        Ok(index)
    }

    /// Remove a frame.
    ///
    /// Removing the only frame empties the list and blanks the surface.
    /// Out-of-range indices are ignored.
    pub async fn delete_frame(&mut self, index: usize) -> Result<Removal> {
        let removal = self.frames.write().remove(index);
        match removal {
            Removal::Emptied => {
                self.clear_canvas();
                debug!(index, "last frame deleted");
            }
            Removal::Removed { active } => {
                debug!(index, ?active, "frame deleted");
                if let Some(active) = active {
                    self.load_frame(active).await?;
                }
            }
            Removal::Ignored => {}
        }
        Ok(removal)
    }

    /// Decode a stored frame onto the surface and make it active.
    ///
    /// Returns `false` without touching anything when `index` is out of range.
    pub async fn load_frame(&mut self, index: usize) -> Result<bool> {
        let frame = self.frames.read().get(index).cloned();
        let Some(frame) = frame else {
            return Ok(false);
        };
        let image = task::spawn_blocking(move || frame.decode()).await??;
        self.canvas.draw_image(&image);
        self.frames.write().set_active(index);
        Ok(true)
    }

    /// (Re)start the preview timer at the current frame rate, from cursor 0.
    pub fn start_playback(&mut self) {
        self.playback
            .start(Arc::clone(&self.frames), self.tools.frame_rate());
    }

    /// Change the playback rate; playback restarts from the first frame.
    pub fn set_frame_rate(&mut self, fps: u32) {
        self.tools.set_frame_rate(fps);
        self.start_playback();
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Index of the next frame the preview will show.
    pub fn playback_position(&self) -> usize {
        self.playback.position()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool
    }

    pub fn set_pen_color(&mut self, color: Rgb) {
        self.tools.pen_color = color;
    }

    /// Set the pen color from a color-input value such as `#ff0000`.
    pub fn set_pen_color_str(&mut self, color: &str) -> Result<()> {
        self.tools.pen_color = color.parse()?;
        Ok(())
    }

    pub fn pen_color(&self) -> Rgb {
        self.tools.pen_color
    }

    pub fn frame_rate(&self) -> u32 {
        self.tools.frame_rate()
    }

    /// Encode the surface as PNG and hand it to the export sink.
    pub fn export_still(&self) -> Result<EncodedAsset> {
        let asset = codec::encode_png(self.canvas.pixels())?;
        self.sink.save(&asset, &self.config.still_file_name)?;
        Ok(asset)
    }

    /// Start encoding every frame into a looping GIF in the background.
    ///
    /// Returns immediately; the sink receives the GIF when encoding
    /// finishes. The frame list is snapshotted up front, so later edits do
    /// not affect an export in progress.
    pub fn export_animated(&self) -> Result<ExportJob> {
        let frames: Vec<Frame> = self.frames.read().frames().to_vec();
        if frames.is_empty() {
            return Err(Error::EmptySequence);
        }
        let (width, height) = self.canvas.dimensions();
        let delay = frame_delay(self.tools.frame_rate());
        let quality = self.config.gif_quality;
        let sink = Arc::clone(&self.sink);
        let file_name = self.config.animation_file_name.clone();

        info!(frames = frames.len(), width, height, "animated export started");
        Ok(ExportJob::spawn(async move {
            let images = task::spawn_blocking(move || {
                frames.iter().map(Frame::decode).collect::<Result<Vec<_>>>()
            })
            .await??;

            let mut encoder = GifAnimationEncoder::new(width, height, quality);
            for image in images {
                encoder.add_frame(image, delay);
            }
            let asset = encoder.render().finished().await?;
            sink.save(&asset, &file_name)?;
            info!(file_name = %file_name, bytes = asset.len(), "animated export finished");
            Ok(asset)
        }))
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn geometry(&self) -> GridGeometry {
        self.canvas.geometry()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn frame_count(&self) -> usize {
        self.frames.read().len()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.frames.read().active()
    }

    pub fn frame(&self, index: usize) -> Option<Frame> {
        self.frames.read().get(index).cloned()
    }

    /// Frame strip contents with the selected marker.
    pub fn frame_entries(&self) -> Vec<FrameEntry> {
        self.frames.read().entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PreviewSink;
    use crate::codec::{GIF_MIME, PNG_MIME};
    use parking_lot::Mutex;
    use std::time::Duration;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[derive(Default)]
    struct Recorder {
        shown: Vec<usize>,
    }

    impl PreviewSink for Recorder {
        fn show(&mut self, index: usize, _frame: &Frame) -> Result<()> {
            self.shown.push(index);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemorySink {
        saved: Mutex<Vec<(String, EncodedAsset)>>,
    }

    impl ExportSink for MemorySink {
        fn save(&self, asset: &EncodedAsset, file_name: &str) -> Result<()> {
            self.saved.lock().push((file_name.to_string(), asset.clone()));
            Ok(())
        }
    }

    struct Harness {
        editor: FrameSequenceController,
        preview: Arc<Mutex<Recorder>>,
        sink: Arc<MemorySink>,
    }

    async fn harness() -> Harness {
        let preview = Arc::new(Mutex::new(Recorder::default()));
        let sink = Arc::new(MemorySink::default());
        let shared: SharedPreview = preview.clone();
        let editor = FrameSequenceController::open(EditorConfig::default(), shared, sink.clone())
            .await
            .unwrap();
        Harness {
            editor,
            preview,
            sink,
        }
    }

    /// Pointer position at the middle of a cell on the default 16×16 grid.
    fn at(cx: u32, cy: u32) -> (f64, f64) {
        (cx as f64 * 32.0 + 16.0, cy as f64 * 32.0 + 16.0)
    }

    fn paint(editor: &mut FrameSequenceController, cx: u32, cy: u32, color: Rgb) {
        editor.set_pen_color(color);
        let (x, y) = at(cx, cy);
        assert!(editor.pointer_down(x, y));
        editor.pointer_up().unwrap();
    }

    fn frame_cell(editor: &FrameSequenceController, index: usize, cx: u32, cy: u32) -> Rgb {
        let image = editor.frame(index).unwrap().decode().unwrap();
        let (x, y) = editor.geometry().cell_center(cx, cy);
        Rgb::from_rgba(*image.get_pixel(x, y))
    }

    fn assert_blank(editor: &FrameSequenceController) {
        let grid = editor.geometry().grid_size();
        for cy in 0..grid {
            for cx in 0..grid {
                assert_eq!(editor.canvas().cell_color(cx, cy), Some(Rgb::WHITE));
            }
        }
    }

    #[tokio::test]
    async fn opens_with_one_blank_frame() {
        let h = harness().await;
        assert_eq!(h.editor.frame_count(), 1);
        assert_eq!(h.editor.active_index(), Some(0));
        assert_eq!(h.editor.playback_state(), PlaybackState::Playing);
        assert_eq!(h.editor.tool(), Tool::Pen);
        assert_eq!(h.editor.frame_rate(), 10);
        assert_blank(&h.editor);
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let preview: SharedPreview = Arc::new(Mutex::new(Recorder::default()));
        let config = EditorConfig {
            grid_size: 0,
            ..Default::default()
        };
        let sink = Arc::new(MemorySink::default());
        let result = FrameSequenceController::open(config, preview, sink).await;
        assert!(matches!(result, Err(Error::InvalidGridSize { .. })));
    }

    #[tokio::test]
    async fn initialize_canvas_discards_frames() {
        let mut h = harness().await;
        for n in [1, 8, 16, 20, 64] {
            paint(&mut h.editor, 0, 0, RED);
            h.editor.add_frame().await.unwrap();

            h.editor.initialize_canvas(n).unwrap();
            assert_eq!(h.editor.frame_count(), 0);
            assert_eq!(h.editor.active_index(), None);
            assert_eq!(h.editor.geometry().grid_size(), n);
            assert_blank(&h.editor);
        }
        assert!(h.editor.initialize_canvas(0).is_err());
        assert_eq!(h.editor.geometry().grid_size(), 64);
    }

    #[tokio::test]
    async fn initialize_canvas_at_new_size_leaves_no_stale_frames() {
        let mut h = harness().await;
        paint(&mut h.editor, 3, 3, RED);
        h.editor.add_frame().await.unwrap();

        h.editor.initialize_canvas(20).unwrap();
        assert_eq!(h.editor.frame_count(), 0);
        assert_eq!(h.editor.active_index(), None);
        assert_eq!(h.editor.canvas().dimensions(), (500, 500));

        // Frames captured afterwards match the new surface
        h.editor.add_frame().await.unwrap();
        let frame = h.editor.frame(0).unwrap();
        assert_eq!((frame.width(), frame.height()), (500, 500));
        let job = h.editor.export_animated().unwrap();
        job.finished().await.unwrap();
    }

    #[tokio::test]
    async fn add_frame_inserts_after_active() {
        let mut h = harness().await;
        assert_eq!(h.editor.add_frame().await.unwrap(), 1);
        assert_eq!(h.editor.add_frame().await.unwrap(), 2);

        assert!(h.editor.load_frame(0).await.unwrap());
        assert_eq!(h.editor.add_frame().await.unwrap(), 1);
        assert_eq!(h.editor.frame_count(), 4);
        assert_eq!(h.editor.active_index(), Some(1));

        let marks: Vec<bool> = h.editor.frame_entries().iter().map(|e| e.active).collect();
        assert_eq!(marks, vec![false, true, false, false]);
    }

    #[tokio::test]
    async fn add_frame_on_empty_list_appends_at_zero() {
        let mut h = harness().await;
        h.editor.initialize_canvas(8).unwrap();
        assert_eq!(h.editor.add_frame().await.unwrap(), 0);
        assert_eq!(h.editor.frame_count(), 1);
        assert_eq!(h.editor.active_index(), Some(0));
    }

    #[tokio::test]
    async fn add_then_load_round_trips() {
        let mut h = harness().await;
        paint(&mut h.editor, 5, 6, BLUE);
        let captured = h.editor.canvas().pixels().clone();

        let index = h.editor.add_frame().await.unwrap();
        h.editor.clear_canvas();
        assert!(h.editor.load_frame(index).await.unwrap());
        assert_eq!(h.editor.canvas().pixels(), &captured);
    }

    #[tokio::test]
    async fn deleting_only_frame_resets() {
        for index in [0, 3] {
            let mut h = harness().await;
            paint(&mut h.editor, 1, 1, RED);

            let removal = h.editor.delete_frame(index).await.unwrap();
            assert_eq!(removal, Removal::Emptied);
            assert_eq!(h.editor.frame_count(), 0);
            assert_eq!(h.editor.active_index(), None);
            assert_blank(&h.editor);
        }
    }

    #[tokio::test]
    async fn delete_then_load_shows_surviving_frame() {
        let mut h = harness().await;
        // Frame 0: red (0,0). Frame 1: blue (0,0). Frame 2: blue (0,0), red (1,0).
        paint(&mut h.editor, 0, 0, RED);
        h.editor.add_frame().await.unwrap();
        paint(&mut h.editor, 0, 0, BLUE);
        h.editor.add_frame().await.unwrap();
        paint(&mut h.editor, 1, 0, RED);
        assert_eq!(h.editor.active_index(), Some(2));

        let removal = h.editor.delete_frame(1).await.unwrap();
        assert_eq!(removal, Removal::Removed { active: Some(1) });
        assert_eq!(frame_cell(&h.editor, 0, 0, 0), RED);
        assert_eq!(frame_cell(&h.editor, 1, 0, 0), BLUE);
        assert_eq!(frame_cell(&h.editor, 1, 1, 0), RED);

        let expected = h.editor.frame(1).unwrap().decode().unwrap();
        assert!(h.editor.load_frame(1).await.unwrap());
        assert_eq!(h.editor.canvas().pixels(), &expected);
    }

    #[tokio::test]
    async fn deleting_active_first_frame_leaves_none_active() {
        let mut h = harness().await;
        h.editor.add_frame().await.unwrap();
        h.editor.load_frame(0).await.unwrap();

        let removal = h.editor.delete_frame(0).await.unwrap();
        assert_eq!(removal, Removal::Removed { active: None });
        assert_eq!(h.editor.frame_count(), 1);

        // Scratch edits are not retained without an active frame
        paint(&mut h.editor, 2, 2, RED);
        assert_eq!(frame_cell(&h.editor, 0, 2, 2), Rgb::WHITE);
    }

    #[tokio::test]
    async fn out_of_range_indices_are_ignored() {
        let mut h = harness().await;
        h.editor.add_frame().await.unwrap();
        paint(&mut h.editor, 3, 3, RED);
        let before = h.editor.canvas().pixels().clone();

        assert!(!h.editor.load_frame(2).await.unwrap());
        assert_eq!(h.editor.delete_frame(9).await.unwrap(), Removal::Ignored);
        assert_eq!(h.editor.frame_count(), 2);
        assert_eq!(h.editor.active_index(), Some(1));
        assert_eq!(h.editor.canvas().pixels(), &before);
    }

    #[tokio::test]
    async fn drawing_requires_pointer_down() {
        let mut h = harness().await;
        let (x, y) = at(4, 4);
        assert!(!h.editor.draw_at_pointer(x, y));
        assert!(!h.editor.pointer_move(x, y));
        assert_eq!(h.editor.canvas().cell_color(4, 4), Some(Rgb::WHITE));

        h.editor.set_pen_color(RED);
        assert!(h.editor.pointer_down(x, y));
        assert!(h.editor.is_drawing());
        let (x2, y2) = at(5, 4);
        assert!(h.editor.pointer_move(x2, y2));
        assert!(!h.editor.pointer_move(-3.0, 10.0));
        h.editor.pointer_leave();
        assert!(!h.editor.is_drawing());
        assert!(!h.editor.pointer_move(x, y + 32.0));

        assert_eq!(h.editor.canvas().cell_color(4, 4), Some(RED));
        assert_eq!(h.editor.canvas().cell_color(5, 4), Some(RED));
        assert_eq!(h.editor.canvas().cell_color(4, 5), Some(Rgb::WHITE));
        // Leaving does not commit
        assert_eq!(frame_cell(&h.editor, 0, 4, 4), Rgb::WHITE);
    }

    #[tokio::test]
    async fn eraser_paints_background() {
        let mut h = harness().await;
        paint(&mut h.editor, 7, 7, RED);
        h.editor.select_tool(Tool::Eraser);
        let (x, y) = at(7, 7);
        h.editor.pointer_down(x, y);
        h.editor.pointer_up().unwrap();
        assert_eq!(h.editor.canvas().cell_color(7, 7), Some(Rgb::WHITE));
        assert_eq!(frame_cell(&h.editor, 0, 7, 7), Rgb::WHITE);
    }

    #[tokio::test]
    async fn commit_without_active_frame_is_scratch() {
        let mut h = harness().await;
        h.editor.initialize_canvas(16).unwrap();
        h.editor.set_pen_color(RED);
        let (x, y) = at(1, 1);
        h.editor.pointer_down(x, y);
        assert!(!h.editor.pointer_up().unwrap());
        assert_eq!(h.editor.frame_count(), 0);
        assert_eq!(h.editor.canvas().cell_color(1, 1), Some(RED));
    }

    #[tokio::test]
    async fn clear_canvas_keeps_frames() {
        let mut h = harness().await;
        paint(&mut h.editor, 2, 2, RED);
        h.editor.clear_canvas();
        assert_blank(&h.editor);
        assert_eq!(h.editor.frame_count(), 1);
        assert_eq!(frame_cell(&h.editor, 0, 2, 2), RED);
    }

    #[tokio::test]
    async fn pen_color_from_input_value() {
        let mut h = harness().await;
        h.editor.set_pen_color_str("#00ff00").unwrap();
        assert_eq!(h.editor.pen_color(), Rgb::new(0, 255, 0));
        assert!(h.editor.set_pen_color_str("nope").is_err());
        assert_eq!(h.editor.pen_color(), Rgb::new(0, 255, 0));
    }

    #[tokio::test]
    async fn paint_add_delete_scenario() {
        let mut h = harness().await;

        paint(&mut h.editor, 2, 3, RED);
        assert_eq!(frame_cell(&h.editor, 0, 2, 3), RED);

        assert_eq!(h.editor.add_frame().await.unwrap(), 1);
        assert_eq!(h.editor.frame_count(), 2);
        assert_eq!(h.editor.active_index(), Some(1));
        assert_eq!(frame_cell(&h.editor, 1, 2, 3), RED);

        h.editor.delete_frame(0).await.unwrap();
        assert_eq!(h.editor.frame_count(), 1);
        assert_eq!(h.editor.active_index(), Some(0));
        assert_eq!(h.editor.canvas().cell_color(2, 3), Some(RED));
    }

    #[tokio::test(start_paused = true)]
    async fn frame_rate_change_restarts_playback() {
        let mut h = harness().await;
        h.editor.add_frame().await.unwrap();
        h.editor.add_frame().await.unwrap();
        assert_eq!(h.editor.frame_count(), 3);

        h.editor.set_frame_rate(10);
        assert_eq!(h.editor.playback_position(), 0);
        h.preview.lock().shown.clear();

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(h.preview.lock().shown, vec![0, 1, 2]);
        assert_eq!(h.editor.playback_position(), 0);
        assert_eq!(h.editor.active_index(), Some(2));
        assert_eq!(h.editor.frame_count(), 3);
    }

    #[tokio::test]
    async fn export_still_saves_png() {
        let mut h = harness().await;
        paint(&mut h.editor, 0, 0, RED);
        let asset = h.editor.export_still().unwrap();
        assert_eq!(asset.mime(), PNG_MIME);

        let saved = h.sink.saved.lock();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "pixel-art.png");
        let image = codec::decode_rgba(saved[0].1.bytes()).unwrap();
        assert_eq!(&image, h.editor.canvas().pixels());
    }

    #[tokio::test]
    async fn export_animated_saves_gif() {
        use image::codecs::gif::GifDecoder;
        use image::AnimationDecoder;

        let mut h = harness().await;
        paint(&mut h.editor, 0, 0, RED);
        h.editor.add_frame().await.unwrap();
        paint(&mut h.editor, 1, 1, BLUE);

        let job = h.editor.export_animated().unwrap();
        // Editing stays available while the export runs
        paint(&mut h.editor, 2, 2, RED);
        let asset = job.finished().await.unwrap();
        assert_eq!(asset.mime(), GIF_MIME);

        let saved = h.sink.saved.lock();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "pixel-art.gif");

        let frames = GifDecoder::new(std::io::Cursor::new(asset.bytes()))
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].buffer().dimensions(), (512, 512));
        assert_eq!(Duration::from(frames[0].delay()), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn export_animated_requires_frames() {
        let mut h = harness().await;
        h.editor.initialize_canvas(16).unwrap();
        assert!(matches!(h.editor.export_animated(), Err(Error::EmptySequence)));
        assert!(h.sink.saved.lock().is_empty());
    }
}
