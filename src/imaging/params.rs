//! Parameter types for conversion operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what to convert and to which dimensions) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing conversion logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy WebP encoding quality (1–100, default 80). Clamped on construction.
//! - [`TargetFormat`] — Output format of a conversion (WebP or JPEG).
//! - [`ConvertParams`] — One conversion task: source, output path, quality, format.
//! - [`EncodeParams`] — Resolved backend job: task plus the computed resize, if any.

use std::path::PathBuf;

/// Quality setting for lossy WebP encoding (1-100).
///
/// JPEG output ignores this and uses the encoder default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Output format of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    /// Lossy WebP at the task's [`Quality`]; dimensions follow the resize rules.
    WebP,
    /// Straight JPEG re-encode — no resize, encoder-default quality.
    Jpeg,
}

/// One conversion task. Created per file encountered, immutable once
/// constructed, discarded after processing.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub quality: Quality,
    pub format: TargetFormat,
}

/// A fully resolved encode job for the backend: the task plus the target
/// dimensions computed from the source's decoded size (None = keep as-is).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub resize_to: Option<(u32, u32)>,
    pub quality: Quality,
    pub format: TargetFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }
}
