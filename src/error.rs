//! Error types for the file-facing parts of the crate.
//!
//! State-file corruption is not an error at this level: `store::load`
//! swallows it and falls back to the initial state. What remains are real
//! I/O failures and the exporter's missing-input case.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while running a battle step.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while turning the board text into an image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The board text file has not been produced yet.
    #[error("{} does not exist!", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The text at the configured scale and padding is too big to draw.
    #[error("text needs a {width}x{height} image, over the {max}px limit", max = crate::export::raster::MAX_IMAGE_SIDE)]
    TooLarge { width: u64, height: u64 },

    #[error("failed to save {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
