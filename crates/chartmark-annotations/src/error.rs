//! Error types for the annotation crate.
//!
//! Shape operations never fail; only host-facing resources such as raster
//! surfaces have a fallible constructor.

use thiserror::Error;

/// Raster surface error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The requested pixmap size is zero or too large to allocate
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}
