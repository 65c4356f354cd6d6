//! Pure Rust conversion backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (JPEG, PNG, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP | `webp::Encoder` (libwebp, lossy with quality) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::needs_resize;
use super::params::{EncodeParams, TargetFormat};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem plus libwebp for
/// lossy WebP output.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// Decode failures are reported as [`BackendError::Decode`] with the path
/// attached — the caller treats them as a per-file skip, not a fatal error.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    // Open errors fold into Decode so every per-file failure carries its path.
    ImageReader::open(path)
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Normalize the pixel buffer for encoding.
///
/// Both encoders only accept 8-bit RGB/RGBA. CMYK JPEG data is already
/// mapped to RGB by the decoder; grayscale, 16-bit, and other modes are
/// converted here. Alpha survives for WebP and is flattened for JPEG
/// (the format has no alpha channel).
fn normalize_color(img: DynamicImage, format: TargetFormat) -> DynamicImage {
    match format {
        TargetFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        TargetFormat::WebP => match img {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        },
    }
}

/// Encode and save as lossy WebP at the given quality.
fn save_webp(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {}", e)))?;
    let encoded = encoder.encode(quality as f32);
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

/// Encode and save as JPEG with the encoder's default quality.
fn save_jpeg(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new(writer);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Dimensions { width, height })
    }

    fn encode(&self, params: &EncodeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        // resize_exact: the target dimensions are the contract, even for the
        // square branch where they do not preserve aspect ratio.
        let img = match params.resize_to {
            Some(target) if needs_resize((img.width(), img.height()), target) => {
                img.resize_exact(target.0, target.1, FilterType::Lanczos3)
            }
            _ => img,
        };

        let img = normalize_color(img, params.format);
        match params.format {
            TargetFormat::WebP => save_webp(&img, &params.output, params.quality.value()),
            TargetFormat::Jpeg => save_jpeg(&img, &params.output),
        }
    }
}
