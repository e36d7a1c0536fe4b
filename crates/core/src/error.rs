//! Error type for image loading and resampling.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("resize {src_w}x{src_h} -> {dst_w}x{dst_h} failed: {reason}")]
    Resize {
        src_w: u32,
        src_h: u32,
        dst_w: u32,
        dst_h: u32,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
