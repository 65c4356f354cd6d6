//! CLI output formatting.
//!
//! Format functions are pure — no I/O, no side effects — and `print_*`
//! wrappers write to stdout. Tests assert on the format functions (after
//! stripping ANSI codes); the interactive loop goes through the wrappers.
//!
//! # Output contract
//!
//! - A successful conversion prints exactly the destination path, nothing
//!   else. Scripts can pipe the output and get a list of produced files.
//! - A skipped destination (already exists) prints nothing.
//! - A failure prints a single red line with the path and the codec detail,
//!   then the run continues.

use crate::imaging::Quality;
use crate::process::FileEvent;
use console::style;

/// One output line per event, or `None` for events that print nothing.
pub fn event_line(event: &FileEvent) -> Option<String> {
    match event {
        FileEvent::Converted(path) => Some(path.display().to_string()),
        FileEvent::Skipped(_) => None,
        FileEvent::Failed { error, .. } => Some(error_line(&error.to_string())),
    }
}

/// Red-styled error line, used for conversion failures and prompt rejections.
pub fn error_line(message: &str) -> String {
    style(message).red().to_string()
}

/// Startup banner: tool name plus the resize rules, so the fixed thresholds
/// are visible to the operator before the first conversion.
pub fn banner_lines(quality: Quality) -> Vec<String> {
    vec![
        style("webp-drop — drop an image or a folder, get WebP back")
            .green()
            .bold()
            .to_string(),
        String::new(),
        format!(
            "  square images        → 800×800\n  \
               width/height ≥ 4000  → halved\n  \
               width/height ≥ 2000  → scaled to 80%\n  \
               WebP quality         → {}",
            quality.value()
        ),
        String::new(),
    ]
}

pub fn print_event(event: &FileEvent) {
    if let Some(line) = event_line(event) {
        println!("{}", line);
    }
}

pub fn print_banner(quality: Quality) {
    for line in banner_lines(quality) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::BackendError;
    use console::strip_ansi_codes;
    use std::path::PathBuf;

    #[test]
    fn converted_prints_bare_destination_path() {
        let event = FileEvent::Converted(PathBuf::from("/pics/a.webp"));
        assert_eq!(event_line(&event).as_deref(), Some("/pics/a.webp"));
    }

    #[test]
    fn skipped_prints_nothing() {
        let event = FileEvent::Skipped(PathBuf::from("/pics/a.webp"));
        assert_eq!(event_line(&event), None);
    }

    #[test]
    fn failed_line_carries_the_codec_detail() {
        let event = FileEvent::Failed {
            source: PathBuf::from("/pics/broken.jpg"),
            error: BackendError::ProcessingFailed("truncated data".into()),
        };
        let line = event_line(&event).unwrap();
        assert!(strip_ansi_codes(&line).contains("truncated data"));
    }

    #[test]
    fn decode_failure_line_names_the_path() {
        let event = FileEvent::Failed {
            source: PathBuf::from("/pics/broken.jpg"),
            error: BackendError::Decode {
                path: PathBuf::from("/pics/broken.jpg"),
                source: image::ImageError::IoError(std::io::Error::other("bad header")),
            },
        };
        let line = event_line(&event).unwrap();
        let plain = strip_ansi_codes(&line).to_string();
        assert!(plain.contains("/pics/broken.jpg"));
        assert!(plain.contains("bad header"));
    }

    #[test]
    fn banner_shows_rules_and_quality() {
        let text = banner_lines(Quality::new(65)).join("\n");
        let text = strip_ansi_codes(&text).to_string();
        assert!(text.contains("800×800"));
        assert!(text.contains("4000"));
        assert!(text.contains("80%"));
        assert!(text.contains("65"));
    }
}
