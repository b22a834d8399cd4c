//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by the frame-sequence core.
///
/// Out-of-range frame indices are not errors: those operations are
/// silently ignored and report it through their return value.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding or decoding a raster failed
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing an exported asset failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid dimension cannot be laid out inside the display budget
    #[error("invalid grid size {grid_size} for a {budget}px canvas")]
    InvalidGridSize { grid_size: u32, budget: u32 },

    /// Color string is neither hex nor a known name
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Animated export requested with no frames
    #[error("frame sequence is empty")]
    EmptySequence,

    /// A background worker panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
