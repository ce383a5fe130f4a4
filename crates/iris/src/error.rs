use iris_image::{ImageError, ImageSize};
use iris_imgproc::parallel::ParallelError;
use iris_imgproc::IrisCutError;
use iris_io::IoError;

/// An error type for the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The operation needs an image but none was loaded.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The given dimensions describe an empty image.
    #[error("Invalid image dimensions: {0}")]
    InvalidDimensions(ImageSize),

    /// The caller expected another size than the loaded image.
    #[error("Image size mismatch: expected {expected}, loaded {loaded}")]
    SizeMismatch {
        /// Size requested by the caller.
        expected: ImageSize,
        /// Size of the loaded image.
        loaded: ImageSize,
    },

    /// Error coming from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error coming from the iris cut.
    #[error(transparent)]
    Cut(#[from] IrisCutError),

    /// Error coming from decoding or encoding files.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error coming from the parallel execution.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
