//! Pure calculation functions for output dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the output dimensions for a WebP conversion.
///
/// Rules, evaluated in order, first match wins:
///
/// 1. Square images are normalized to 800×800 — a standardized output size,
///    applied regardless of the original dimensions. This is the only branch
///    that may upscale.
/// 2. Width or height ≥ 4000px → halve both edges.
/// 3. Width or height ≥ 2000px → scale both edges to 80%.
/// 4. Anything smaller is left untouched.
///
/// Fractional results truncate (floor), matching integer pixel dimensions.
///
/// # Examples
/// ```
/// # use webp_drop::imaging::resize_target;
/// // Square: always 800×800, even when that means upscaling
/// assert_eq!(resize_target(3000, 3000), (800, 800));
/// assert_eq!(resize_target(120, 120), (800, 800));
///
/// // Large landscape: halved
/// assert_eq!(resize_target(4500, 3000), (2250, 1500));
///
/// // Medium: 80%
/// assert_eq!(resize_target(2000, 1400), (1600, 1120));
///
/// // Small: unchanged
/// assert_eq!(resize_target(1024, 768), (1024, 768));
/// ```
pub fn resize_target(width: u32, height: u32) -> (u32, u32) {
    if width == height {
        (800, 800)
    } else if width >= 4000 || height >= 4000 {
        (width / 2, height / 2)
    } else if width >= 2000 || height >= 2000 {
        ((width as f64 * 0.8) as u32, (height as f64 * 0.8) as u32)
    } else {
        (width, height)
    }
}

/// Whether a conversion needs an actual resize, or can re-encode as-is.
pub fn needs_resize(original: (u32, u32), target: (u32, u32)) -> bool {
    original != target
}
