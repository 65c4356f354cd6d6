//! Conversion backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust decode and
//! resize via the `image` crate, lossy WebP encode via libwebp. Everything is
//! statically linked into the binary.

use super::params::EncodeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The source could not be opened or decoded as an image. Carries the
    /// path and the codec's own detail so callers can report and move on.
    #[error("cannot read image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for conversion backends.
///
/// Every backend must implement both operations — identify and encode — so
/// the rest of the codebase is backend-agnostic.
pub trait ImageBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a resolved encode job: decode source, resize if requested,
    /// write the output file.
    fn encode(&self, params: &EncodeParams) -> Result<(), BackendError>;
}
