//! Utility functions for the image boundary
//!
//! This module provides the pixel-side helpers in front of the decoder:
//! - Grayscale conversion (RGB/RGBA to luminance)
//! - Sampling a rectified luma image into a module grid

/// RGB/RGBA to luma conversion
pub mod grayscale;
/// Rectified image to module grid
pub mod sampling;
