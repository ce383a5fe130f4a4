use iris_image::Image;

use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Rec. 601 luma of an 8-bit RGB triplet in fixed point.
///
/// Y = (77 * R + 150 * G + 29 * B) >> 8
///
/// # Example
///
/// ```
/// use iris_imgproc::color::luma_u8;
///
/// assert_eq!(luma_u8(255, 255, 255), 255);
/// assert_eq!(luma_u8(255, 0, 0), 76);
/// ```
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = (77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8;
    y.min(255) as u8
}

/// Convert an RGBA8 image to grayscale in place.
///
/// The luma of every pixel is written to its red, green and blue channels, the alpha
/// channel is left untouched.
///
/// # Arguments
///
/// * `image` - The RGBA image to convert.
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use iris_image::{Image, ImageSize};
/// use iris_imgproc::color::gray_from_rgba_inplace;
/// use iris_imgproc::parallel::ExecutionStrategy;
///
/// let mut image = Image::<u8, 4>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![0, 255, 0, 7],
/// ).unwrap();
///
/// gray_from_rgba_inplace(&mut image, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(image.as_slice(), &[149, 149, 149, 7]);
/// ```
pub fn gray_from_rgba_inplace(
    image: &mut Image<u8, 4>,
    strategy: ExecutionStrategy,
) -> Result<(), ParallelError> {
    let width = image.width();
    gray_from_rgba_slice_inplace(image.as_slice_mut(), width, strategy)
}

/// Convert a row-major RGBA8 buffer of the given width to grayscale in place.
///
/// Same as [`gray_from_rgba_inplace`] for buffers owned by someone else. The buffer
/// length must be a multiple of `width * 4`.
pub fn gray_from_rgba_slice_inplace(
    data: &mut [u8],
    width: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ParallelError> {
    if data.is_empty() {
        return Ok(());
    }

    parallel::par_iter_rows_indexed(data, width * 4, strategy, |_, row| {
        row.chunks_exact_mut(4).for_each(|px| {
            let y = luma_u8(px[0], px[1], px[2]);
            px[0] = y;
            px[1] = y;
            px[2] = y;
        });
    })
}
