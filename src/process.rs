//! Conversion driving: one file or a whole tree, skip-on-error.
//!
//! Sits between the interactive menu and the imaging layer. Each source file
//! becomes one WebP task (and, when JPEG re-conversion is enabled, a chained
//! WebP → JPEG task). Outcomes are streamed to the caller through a callback
//! as they happen, so directory runs report progressively.
//!
//! A failed file is reported and skipped — it never aborts the run. No
//! retries: the failure left no destination behind, so a later run will
//! simply attempt the file again.

use crate::imaging::{
    BackendError, ConvertParams, ConvertStatus, ImageBackend, Quality, TargetFormat, convert,
};
use crate::scan;
use std::path::{Path, PathBuf};

/// Session-wide conversion settings.
///
/// The WebP quality lives here and nowhere else; call sites never hardcode
/// it. JPEG re-conversion is a parameter threaded through the calls, not
/// global state.
#[derive(Debug, Clone, Copy)]
pub struct ConvertConfig {
    pub quality: Quality,
    /// Also convert each produced WebP back to a sibling `.jpg`.
    pub jpeg_chain: bool,
}

impl ConvertConfig {
    pub fn new(quality: Quality) -> Self {
        Self {
            quality,
            jpeg_chain: false,
        }
    }

    pub fn with_jpeg_chain(self) -> Self {
        Self {
            jpeg_chain: true,
            ..self
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(Quality::default())
    }
}

/// Outcome of one conversion task, streamed to the caller as it happens.
#[derive(Debug)]
pub enum FileEvent {
    /// Destination written.
    Converted(PathBuf),
    /// Destination already existed; nothing was touched.
    Skipped(PathBuf),
    /// Source could not be converted; the run continues.
    Failed {
        source: PathBuf,
        error: BackendError,
    },
}

fn run_task(
    backend: &impl ImageBackend,
    params: ConvertParams,
    report: &mut impl FnMut(FileEvent),
) -> bool {
    let source = params.source.clone();
    let output = params.output.clone();
    match convert(backend, &params) {
        Ok(ConvertStatus::Converted) => {
            report(FileEvent::Converted(output));
            true
        }
        Ok(ConvertStatus::SkippedExisting) => {
            report(FileEvent::Skipped(output));
            true
        }
        Err(error) => {
            report(FileEvent::Failed { source, error });
            false
        }
    }
}

/// Convert a single source image to its sibling `.webp`, chaining a WebP →
/// JPEG re-conversion when configured. The chain only runs if the WebP
/// destination is actually there (fresh or pre-existing).
pub fn convert_file(
    backend: &impl ImageBackend,
    source: &Path,
    config: &ConvertConfig,
    report: &mut impl FnMut(FileEvent),
) {
    let webp_path = scan::webp_sibling(source);
    let webp_ok = run_task(
        backend,
        ConvertParams {
            source: source.to_path_buf(),
            output: webp_path.clone(),
            quality: config.quality,
            format: TargetFormat::WebP,
        },
        report,
    );

    if config.jpeg_chain && webp_ok {
        run_task(
            backend,
            ConvertParams {
                source: webp_path.clone(),
                output: scan::jpeg_sibling(&webp_path),
                quality: config.quality,
                format: TargetFormat::Jpeg,
            },
            report,
        );
    }
}

/// Convert every image under `root`, recursively.
pub fn convert_tree(
    backend: &impl ImageBackend,
    root: &Path,
    config: &ConvertConfig,
    report: &mut impl FnMut(FileEvent),
) {
    for source in scan::scan(root) {
        convert_file(backend, &source, config, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn collect_events(
        backend: &MockBackend,
        source: &Path,
        config: &ConvertConfig,
    ) -> Vec<FileEvent> {
        let mut events = Vec::new();
        convert_file(backend, source, config, &mut |e| events.push(e));
        events
    }

    #[test]
    fn single_file_produces_webp_sibling() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 750,
        }]);

        let events = collect_events(
            &backend,
            Path::new("/pics/a.png"),
            &ConvertConfig::default(),
        );

        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            FileEvent::Converted(p) if p == Path::new("/pics/a.webp")
        ));
    }

    #[test]
    fn jpeg_chain_reconverts_the_webp() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 640,
            height: 480,
        }]);
        let config = ConvertConfig::default().with_jpeg_chain();

        collect_events(&backend, Path::new("/pics/x.png"), &config);

        let ops = backend.get_operations();
        // identify + webp encode + jpeg encode
        assert_eq!(ops.len(), 3);
        assert!(matches!(
            &ops[1],
            RecordedOp::Encode { output, format: TargetFormat::WebP, .. }
                if output == "/pics/x.webp"
        ));
        assert!(matches!(
            &ops[2],
            RecordedOp::Encode { source, output, format: TargetFormat::Jpeg, resize_to: None, .. }
                if source == "/pics/x.webp" && output == "/pics/x.jpg"
        ));
    }

    #[test]
    fn failed_webp_skips_the_jpeg_chain() {
        // Mock with no queued dimensions → identify fails.
        let backend = MockBackend::new();
        let config = ConvertConfig::default().with_jpeg_chain();

        let events = collect_events(&backend, Path::new("/pics/broken.png"), &config);

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], FileEvent::Failed { source, .. }
            if source == Path::new("/pics/broken.png")));
    }

    #[test]
    fn tree_failure_continues_with_remaining_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("bad.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("good.png"), b"x").unwrap();

        // One queued dimension: exactly one of the two identify calls
        // succeeds, the other reports a failure — and both files are visited.
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 100,
            height: 50,
        }]);

        let mut events = Vec::new();
        convert_tree(
            &backend,
            tmp.path(),
            &ConvertConfig::default(),
            &mut |e| events.push(e),
        );

        assert_eq!(events.len(), 2);
        let failures = events
            .iter()
            .filter(|e| matches!(e, FileEvent::Failed { .. }))
            .count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn quality_flows_from_config_to_tasks() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 300,
            height: 200,
        }]);
        let config = ConvertConfig::new(Quality::new(55));

        collect_events(&backend, Path::new("/pics/q.jpg"), &config);

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Encode { quality: 55, .. }
        ));
    }
}
