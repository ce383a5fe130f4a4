#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// crop region bookkeeping for the iris cut.
pub mod crop;

/// Error types for the iris cut.
pub mod error;

/// conversion of user supplied circles into pixel space cut geometry.
pub mod geometry;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// image geometric transformations module.
pub mod warp;

pub use error::IrisCutError;
