//! Image conversion — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode (JPEG, PNG, WebP)** | `image` crate |
//! | **Resize** | Lanczos3, exact target dimensions |
//! | **Encode → WebP** | libwebp (lossy, quality parameter) |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for the resize rules (unit testable)
//! - **Parameters**: Data structures describing conversion tasks
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{needs_resize, resize_target};
pub use operations::{ConvertStatus, convert, get_dimensions, plan_encode};
pub use params::{ConvertParams, EncodeParams, Quality, TargetFormat};
pub use rust_backend::RustBackend;
