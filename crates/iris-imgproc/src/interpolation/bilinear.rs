use iris_image::Image;

/// Clamp a signed index into `[0, len - 1]`.
///
/// `len` must be non zero.
#[inline]
fn clamp_index(i: i64, len: usize) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

/// Kernel for bilinear interpolation on 8-bit images.
///
/// The four neighbours are `x0 = floor(x)`, `x1 = x0 + 1` (and the same for `y`), each
/// clamped to the image. The weighted sum is rounded to the nearest integer and
/// clamped to `[0, 255]`.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The x coordinate of the pixel to interpolate.
/// * `y` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, all zeros if the image has no pixels.
///
/// # Example
///
/// ```
/// use iris_image::{Image, ImageSize};
/// use iris_imgproc::interpolation::bilinear_interpolation_u8;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 100]).unwrap();
///
/// assert_eq!(bilinear_interpolation_u8(&image, 0.5, 0.0), [50]);
/// assert_eq!(bilinear_interpolation_u8(&image, -3.0, 0.0), [0]);
/// assert_eq!(bilinear_interpolation_u8(&image, 7.0, 0.0), [100]);
/// ```
pub fn bilinear_interpolation_u8<const C: usize>(image: &Image<u8, C>, x: f64, y: f64) -> [u8; C] {
    let size = image.size();
    if size.is_empty() || !x.is_finite() || !y.is_finite() {
        return [0; C];
    }

    let fx0 = x.floor();
    let fy0 = y.floor();
    let frac_x = x - fx0;
    let frac_y = y - fy0;

    // saturating float to int conversion keeps far away coordinates on the edge
    let (ix0, iy0) = (fx0 as i64, fy0 as i64);

    let x0 = clamp_index(ix0, size.width);
    let y0 = clamp_index(iy0, size.height);
    let x1 = clamp_index(ix0.saturating_add(1), size.width);
    let y1 = clamp_index(iy0.saturating_add(1), size.height);

    let w00 = (1.0 - frac_x) * (1.0 - frac_y);
    let w10 = frac_x * (1.0 - frac_y);
    let w01 = (1.0 - frac_x) * frac_y;
    let w11 = frac_x * frac_y;

    let (Some(p00), Some(p10), Some(p01), Some(p11)) = (
        image.pixel(x0, y0),
        image.pixel(x1, y0),
        image.pixel(x0, y1),
        image.pixel(x1, y1),
    ) else {
        return [0; C];
    };

    let mut pixel = [0u8; C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let v = w00 * p00[k] as f64 + w10 * p10[k] as f64 + w01 * p01[k] as f64 + w11 * p11[k] as f64;
        *out = v.round().clamp(0.0, 255.0) as u8;
    }

    pixel
}
