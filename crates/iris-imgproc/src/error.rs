use iris_image::ImageError;

use crate::parallel::ParallelError;

/// Errors reported by the iris cut.
///
/// Every variant is a synchronous, final failure: the transform is deterministic so
/// calling again with the same inputs reproduces the same error.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IrisCutError {
    /// A required argument is missing or a dimension is not positive.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The iris or pupil radii do not describe a valid annulus.
    #[error("Invalid geometry: iris radius {iris_radius}, pupil radius {pupil_radius}")]
    InvalidGeometry {
        /// Iris radius in pixels.
        iris_radius: f64,
        /// Pupil radius in pixels.
        pupil_radius: f64,
    },

    /// The destination radial span is not positive after shrinking the pupil.
    #[error("Degenerate annulus: destination radial span {0} <= 0")]
    DegenerateAnnulus(f64),

    /// The crop region clamped to the image bounds is empty.
    #[error("Degenerate crop: {0}x{1}")]
    DegenerateCrop(i64, i64),

    /// The output buffer could not be allocated.
    #[error("Failed to allocate the output buffer. {0}")]
    AllocationFailure(ImageError),

    /// Error coming from the image container.
    #[error(transparent)]
    Image(ImageError),

    /// Error coming from the parallel execution.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

impl From<ImageError> for IrisCutError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::AllocationFailed(_) | ImageError::SizeOverflow(..) => {
                IrisCutError::AllocationFailure(err)
            }
            other => IrisCutError::Image(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_errors_map_to_allocation_failure() {
        assert_eq!(
            IrisCutError::from(ImageError::AllocationFailed(16)),
            IrisCutError::AllocationFailure(ImageError::AllocationFailed(16))
        );
        assert_eq!(
            IrisCutError::from(ImageError::SizeOverflow(1, 2, 4)),
            IrisCutError::AllocationFailure(ImageError::SizeOverflow(1, 2, 4))
        );
    }

    #[test]
    fn shape_errors_stay_image_errors() {
        assert_eq!(
            IrisCutError::from(ImageError::InvalidChannelShape(15, 16)),
            IrisCutError::Image(ImageError::InvalidChannelShape(15, 16))
        );
    }
}
