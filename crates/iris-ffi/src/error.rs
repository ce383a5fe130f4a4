use std::ffi::c_int;

use iris::EngineError;

/// Failures reported across the C boundary.
#[derive(thiserror::Error, Debug)]
pub enum FfiError {
    /// A required pointer argument is null.
    #[error("`{0}` must not be null")]
    NullPointer(&'static str),

    /// Width or height is not positive.
    #[error("Invalid dimensions: {0}x{1}")]
    InvalidDimensions(c_int, c_int),

    /// An output dimension does not fit in `int32_t`.
    #[error("Output dimension {0} does not fit in int32_t")]
    DimensionOverflow(usize),

    /// The path is not valid UTF-8.
    #[error("Image path is not valid UTF-8. {0}")]
    InvalidPath(#[from] std::str::Utf8Error),

    /// Error coming from the engine.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The engine panicked.
    #[error("Engine panicked: {0}")]
    Panic(String),
}
