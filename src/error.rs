//! Error types for the crate.
//!
//! The simulation loop itself is total and has no error paths; failures
//! only exist at the edges, currently PNG export from the raster surface.

use std::fmt;

/// Errors that can occur when exporting a raster surface.
#[derive(Debug)]
pub enum RasterError {
    /// Failed to create the output directory.
    Io(std::io::Error),
    /// Failed to encode or write the image.
    Encode(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Io(e) => write!(f, "Failed to prepare output path: {}", e),
            RasterError::Encode(e) => write!(f, "Failed to write image: {}", e),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Io(e) => Some(e),
            RasterError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RasterError {
    fn from(e: std::io::Error) -> Self {
        RasterError::Io(e)
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Encode(e)
    }
}
