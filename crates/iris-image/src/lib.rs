#![deny(missing_docs)]
//! Image types and traits for holding and addressing pixel buffers

/// Fallible allocation of pixel storage.
pub mod allocator;

/// Error types for the image module.
pub mod error;

/// image representation for the iris engine.
pub mod image;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, Rgba8Image};
