#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, decoding failures and the
/// missing decoder case.
pub mod error;

/// The decoder capability.
///
/// See [`decoder::ImageDecoder`] for plugging in another backend.
pub mod decoder;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_rgba8`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
