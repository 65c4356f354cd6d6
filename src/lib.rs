//! # webp-drop
//!
//! An interactive PNG/JPEG → WebP converter. Drop an image or a folder onto
//! the terminal, get WebP back — with fixed, dimension-driven downscaling
//! rules and optional WebP → JPEG re-conversion.
//!
//! # Architecture: A Thin Sequential Pipeline
//!
//! There is deliberately no concurrency, no persistent state, and no
//! configuration file here. Each file flows through the same four steps:
//!
//! ```text
//! 1. Check     destination exists?  →  no-op (outputs are never overwritten)
//! 2. Decode    image crate (PNG, JPEG, WebP)
//! 3. Resize    fixed threshold rules (square→800², ≥4000→½, ≥2000→80%)
//! 4. Encode    lossy WebP at quality 80 (or JPEG for re-conversion)
//! ```
//!
//! Every conversion is independent and idempotent, so a directory run can be
//! interrupted and repeated freely; already-produced files are skipped and a
//! file that failed to decode is reported and passed over, never fatal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Codec boundary: resize rules, [`imaging::ImageBackend`] trait, pure-Rust backend |
//! | [`scan`] | Recursive traversal, extension allowlist, destination derivation |
//! | [`process`] | Per-file/per-tree driving with streamed outcomes and skip-on-error |
//! | [`menu`] | Interactive finite-state menu over stdin |
//! | [`output`] | CLI output formatting — pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Backend Trait at the Codec Seam
//!
//! All pixel work sits behind [`imaging::ImageBackend`] (identify + encode).
//! The production [`imaging::RustBackend`] is pure Rust — `image` crate
//! decoders, Lanczos3 resize, libwebp lossy encode — and statically linked,
//! so the binary has zero system dependencies. Pipeline and menu logic are
//! tested against a mock backend that records operations instead of
//! encoding pixels.
//!
//! ## The Square Rule Is Product Policy
//!
//! Square sources always become 800×800, even when that upscales. It is a
//! standardized output size, kept as a distinct first-match branch in
//! [`imaging::resize_target`] rather than folded into the threshold rules.
//!
//! ## Quality Lives in One Place
//!
//! The default WebP quality (80) is defined once, on
//! [`imaging::Quality::default`], and threaded explicitly through
//! [`process::ConvertConfig`] into every task. The JPEG re-conversion flag
//! travels the same way — a parameter, never global state.

pub mod imaging;
pub mod menu;
pub mod output;
pub mod process;
pub mod scan;
