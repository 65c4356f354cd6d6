//! Filesystem traversal and conversion-task derivation.
//!
//! Directory mode walks an entire tree and converts every image it finds;
//! single-file mode accepts one path at a time. Both derive the destination
//! as a sibling of the source with the extension swapped:
//!
//! ```text
//! photos/
//! ├── a.png           →  photos/a.webp
//! ├── b.jpg           →  photos/b.webp
//! ├── notes.txt           (ignored)
//! └── trips/
//!     └── c.jpeg      →  photos/trips/c.webp
//! ```
//!
//! Extension matching is exact and case-insensitive. Directory mode accepts
//! {png, jpg, jpeg}; single-file mode additionally accepts webp sources so
//! an existing WebP can be re-converted to JPEG.
//!
//! Traversal order is whatever the filesystem walk yields — every file's
//! destination derives purely from its own path, so order never affects the
//! outcome. Unreadable directory entries are skipped, not fatal.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions converted when walking a directory.
pub const DIR_MODE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extensions accepted in single-file mode (webp included, for WebP → JPEG).
pub const FILE_MODE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Exact, case-insensitive extension check against an allowlist.
pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| allowed.iter().any(|a| e.eq_ignore_ascii_case(a)))
}

/// Destination for a WebP conversion: same path, `.webp` extension.
pub fn webp_sibling(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

/// Destination for a JPEG re-conversion: same path, `.jpg` extension.
pub fn jpeg_sibling(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}

/// Recursively collect every convertible image under `root`.
pub fn scan(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_extension(path, DIR_MODE_EXTENSIONS))
        .collect()
}
