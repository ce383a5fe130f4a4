#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use iris_image as image;

#[doc(inline)]
pub use iris_imgproc as imgproc;

#[doc(inline)]
pub use iris_io as io;

/// The stateful engine holding a loaded image.
pub mod engine;

/// Error type of the engine and the file based entry points.
pub mod error;

/// File based entry points: decode, cut and hand the result back.
pub mod pipeline;

pub use crate::engine::IrisEngine;
pub use crate::error::EngineError;
pub use crate::pipeline::{process_iris_cut, process_iris_cut_from_view};
