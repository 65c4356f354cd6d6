//! High-level conversion operations.
//!
//! These functions combine calculations with backend execution.
//! They take a conversion task, compute the encode job, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::resize_target;
use super::params::{ConvertParams, EncodeParams, TargetFormat};
use std::path::Path;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// What happened to a single conversion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertStatus {
    /// The output file was written.
    Converted,
    /// The output already existed; nothing was touched.
    SkippedExisting,
}

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan the encode job for a task without executing it.
///
/// WebP targets get the resize rules applied to the source dimensions;
/// JPEG targets are a straight re-encode. Useful for testing parameter
/// generation.
pub fn plan_encode(params: &ConvertParams, dims: Option<Dimensions>) -> EncodeParams {
    let resize_to = match (params.format, dims) {
        (TargetFormat::WebP, Some(d)) => Some(resize_target(d.width, d.height)),
        _ => None,
    };

    EncodeParams {
        source: params.source.clone(),
        output: params.output.clone(),
        resize_to,
        quality: params.quality,
        format: params.format,
    }
}

/// Execute one conversion task.
///
/// If the output path already exists the task is a no-op — existing files
/// are never overwritten. Otherwise the source is identified (WebP targets
/// need its dimensions for the resize rules), encoded, and written. Exactly
/// one new file per [`ConvertStatus::Converted`] return; the source is never
/// deleted or mutated.
pub fn convert(backend: &impl ImageBackend, params: &ConvertParams) -> Result<ConvertStatus> {
    if params.output.exists() {
        return Ok(ConvertStatus::SkippedExisting);
    }

    let dims = match params.format {
        TargetFormat::WebP => Some(backend.identify(&params.source)?),
        TargetFormat::Jpeg => None,
    };

    backend.encode(&plan_encode(params, dims))?;
    Ok(ConvertStatus::Converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Quality;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use std::path::PathBuf;

    fn webp_task(source: &str, output: &str) -> ConvertParams {
        ConvertParams {
            source: PathBuf::from(source),
            output: PathBuf::from(output),
            quality: Quality::default(),
            format: TargetFormat::WebP,
        }
    }

    #[test]
    fn get_dimensions_calls_backend() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1920,
            height: 1080,
        }]);

        let dims = get_dimensions(&backend, Path::new("/test.jpg")).unwrap();
        assert_eq!(dims, (1920, 1080));
    }

    #[test]
    fn plan_encode_applies_resize_rules_for_webp() {
        let params = webp_task("/a.png", "/a.webp");
        let job = plan_encode(
            &params,
            Some(Dimensions {
                width: 4500,
                height: 3000,
            }),
        );

        assert_eq!(job.resize_to, Some((2250, 1500)));
        assert_eq!(job.format, TargetFormat::WebP);
        assert_eq!(job.quality.value(), 80);
    }

    #[test]
    fn plan_encode_square_source_targets_800() {
        let params = webp_task("/a.png", "/a.webp");
        let job = plan_encode(
            &params,
            Some(Dimensions {
                width: 1000,
                height: 1000,
            }),
        );

        assert_eq!(job.resize_to, Some((800, 800)));
    }

    #[test]
    fn plan_encode_jpeg_never_resizes() {
        let params = ConvertParams {
            source: PathBuf::from("/a.webp"),
            output: PathBuf::from("/a.jpg"),
            quality: Quality::default(),
            format: TargetFormat::Jpeg,
        };

        assert_eq!(plan_encode(&params, None).resize_to, None);
    }

    #[test]
    fn convert_webp_identifies_then_encodes() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 2400,
            height: 1600,
        }]);
        let params = webp_task("/photos/a.png", "/photos/a.webp");

        let status = convert(&backend, &params).unwrap();
        assert_eq!(status, ConvertStatus::Converted);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/photos/a.png"));
        assert!(matches!(
            &ops[1],
            RecordedOp::Encode {
                resize_to: Some((1920, 1280)),
                quality: 80,
                format: TargetFormat::WebP,
                ..
            }
        ));
    }

    #[test]
    fn convert_jpeg_skips_identify() {
        let backend = MockBackend::new();
        let params = ConvertParams {
            source: PathBuf::from("/photos/a.webp"),
            output: PathBuf::from("/photos/a.jpg"),
            quality: Quality::default(),
            format: TargetFormat::Jpeg,
        };

        convert(&backend, &params).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Encode {
                resize_to: None,
                format: TargetFormat::Jpeg,
                ..
            }
        ));
    }

    #[test]
    fn convert_existing_output_is_noop() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("existing.webp");
        std::fs::write(&output, b"already here").unwrap();

        let backend = MockBackend::new();
        let params = ConvertParams {
            source: tmp.path().join("source.png"),
            output: output.clone(),
            quality: Quality::default(),
            format: TargetFormat::WebP,
        };

        let status = convert(&backend, &params).unwrap();
        assert_eq!(status, ConvertStatus::SkippedExisting);
        assert!(backend.get_operations().is_empty());
        assert_eq!(std::fs::read(&output).unwrap(), b"already here");
    }

    #[test]
    fn convert_propagates_identify_failure() {
        // Mock with no queued dimensions → identify errors out.
        let backend = MockBackend::new();
        let params = webp_task("/missing.png", "/missing.webp");

        assert!(convert(&backend, &params).is_err());
    }
}
