use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read image {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template has no pixels")]
    Empty,

    #[error("template row {row} has {got} pixels, expected {want}")]
    RaggedRow { row: usize, got: usize, want: usize },
}

/// A search task that died mid-scan, reported as text from its panic payload.
#[derive(Debug, Clone, Error)]
#[error("search task panicked: {0}")]
pub struct TaskFailure(pub String);
