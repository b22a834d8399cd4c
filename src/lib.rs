//! # pixel-frames-core
//!
//! Core frame-sequence model for pixel-art sprite animators.
//!
//! This crate provides the editing state behind a grid-based pixel editor:
//! - A drawing surface divided into square cells with a grid overlay
//! - An ordered list of captured frames with an edit-active cursor
//! - A preview playback timer that cycles through the frames
//! - PNG still export and looping GIF export, encoded off the caller's task
//!
//! Hosts supply the preview surface ([`PreviewSink`]) and the download
//! target ([`ExportSink`]) and forward pointer events to the controller.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for [`EditorConfig`] and [`Tool`]
//! - `toml` - Load [`EditorConfig`] from TOML (enabled by default)
//!
//! ## Example
//!
//! ```rust,ignore
//! use pixel_frames_core::{EditorConfig, FrameSequenceController, PreviewCanvas, DirectorySink};
//!
//! let config = EditorConfig::from_toml_str(&std::fs::read_to_string("editor.toml")?)?;
//! let preview = Arc::new(Mutex::new(PreviewCanvas::new()));
//! let mut editor = FrameSequenceController::open(config, preview, Arc::new(DirectorySink::new("out"))).await?;
//!
//! // Paint the cell under the pointer and keep it in the active frame
//! editor.pointer_down(70.0, 100.0);
//! editor.pointer_up()?;
//!
//! // Duplicate it as the next frame and export the animation
//! editor.add_frame().await?;
//! editor.export_animated()?.finished().await?;
//! ```

mod animation;
mod codec;
mod color;
mod config;
mod controller;
mod data;
mod encoder;
mod error;
mod export;
pub mod render;
mod sizing;
mod tool;

pub use animation::{
    frame_interval, Playback, PlaybackCursor, PlaybackState, PreviewCanvas, PreviewSink,
    SharedPreview,
};
pub use codec::{decode_rgba, encode_png, EncodedAsset, GIF_MIME, PNG_MIME};
pub use color::{parse_color, Rgb};
pub use config::EditorConfig;
pub use controller::FrameSequenceController;
pub use data::{Frame, FrameEntry, FrameList, Removal};
pub use encoder::{frame_delay, GifAnimationEncoder, RenderJob};
pub use error::{Error, Result};
pub use export::{DirectorySink, ExportJob, ExportSink};
pub use render::PixelCanvas;
pub use sizing::{GridGeometry, DEFAULT_DISPLAY_BUDGET, MAX_DISPLAY_BUDGET};
pub use tool::{Tool, ToolState};
