//! Pixel interpolation methods for image transformations.
//!
//! The iris cut samples the source image at sub-pixel positions produced by the
//! radial remap, this module provides the kernels used for that.
//!
//! # Boundary policy
//!
//! Coordinates outside the image are edge-clamped: the nearest edge pixel is reused,
//! the image is neither wrapped nor mirrored.

mod bilinear;

pub use bilinear::bilinear_interpolation_u8;
