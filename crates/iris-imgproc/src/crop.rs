use iris_image::ImageSize;

use crate::error::IrisCutError;
use crate::geometry::CutGeometry;

/// A square region of the source image, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// x coordinate of the top-left corner.
    pub x: usize,
    /// y coordinate of the top-left corner.
    pub y: usize,
    /// side length of the square.
    pub side: usize,
}

impl CropRegion {
    /// Size of the output image produced from this region.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.side,
            height: self.side,
        }
    }
}

/// Compute the square crop around the iris, clamped to the image bounds.
///
/// The requested square has side `ceil(2 * iris_radius)` and its top-left corner at
/// `floor(center - iris_radius)`. The corner is clamped into the image, and if the
/// remaining room is smaller than the requested side on either axis the square shrinks
/// to the smaller of the two. Clipping is not an error.
///
/// # Errors
///
/// * [`IrisCutError::InvalidInput`] if the image has no pixels.
/// * [`IrisCutError::DegenerateCrop`] if the clamped region is empty.
///
/// # Example
///
/// ```
/// use iris_image::ImageSize;
/// use iris_imgproc::crop::iris_crop_region;
/// use iris_imgproc::geometry::{Circle, CutGeometry, CutParams};
///
/// let geometry = CutGeometry::new(&CutParams {
///     iris: Circle::new(50.0, 50.0, 40.0),
///     pupil: Circle::new(50.0, 50.0, 10.0),
/// }).unwrap();
///
/// let crop = iris_crop_region(&geometry, ImageSize { width: 100, height: 100 }).unwrap();
/// assert_eq!((crop.x, crop.y, crop.side), (10, 10, 80));
/// ```
pub fn iris_crop_region(geometry: &CutGeometry, image: ImageSize) -> Result<CropRegion, IrisCutError> {
    if image.is_empty() {
        return Err(IrisCutError::InvalidInput(format!(
            "source image must not be empty, got {image}"
        )));
    }

    let (iw, ih) = (image.width as i64, image.height as i64);
    let r = geometry.iris_radius();

    let requested = (2.0 * r).ceil() as i64;
    let crop_x = ((geometry.center_x() - r).floor() as i64).clamp(0, iw - 1);
    let crop_y = ((geometry.center_y() - r).floor() as i64).clamp(0, ih - 1);

    let crop_w = requested.min(iw - crop_x);
    let crop_h = requested.min(ih - crop_y);
    if crop_w <= 0 || crop_h <= 0 {
        return Err(IrisCutError::DegenerateCrop(crop_w, crop_h));
    }

    let side = crop_w.min(crop_h);
    if side < requested {
        log::warn!(
            "iris crop clipped by the image bounds: requested side {requested}, got {side} at ({crop_x}, {crop_y})"
        );
    }

    let region = CropRegion {
        x: crop_x as usize,
        y: crop_y as usize,
        side: side as usize,
    };
    log::debug!("iris crop region: {region:?}");

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, CutParams};

    fn geometry(x: f64, y: f64, r: f64) -> Result<CutGeometry, IrisCutError> {
        CutGeometry::new(&CutParams {
            iris: Circle::new(x, y, r),
            pupil: Circle::new(x, y, r / 4.0),
        })
    }

    #[test]
    fn crop_inside_image() -> Result<(), IrisCutError> {
        let crop = iris_crop_region(&geometry(50.0, 50.0, 40.0)?, [100, 100].into())?;
        assert_eq!(crop, CropRegion { x: 10, y: 10, side: 80 });
        assert_eq!(crop.size(), ImageSize { width: 80, height: 80 });
        Ok(())
    }

    #[test]
    fn crop_fractional_radius_rounds_outwards() -> Result<(), IrisCutError> {
        let crop = iris_crop_region(&geometry(50.5, 40.2, 10.3)?, [100, 100].into())?;
        // floor(40.2) = 40, floor(29.9) = 29, ceil(20.6) = 21
        assert_eq!(crop, CropRegion { x: 40, y: 29, side: 21 });
        Ok(())
    }

    #[test]
    fn crop_clipped_at_top_left() -> Result<(), IrisCutError> {
        // corner at (-10, -5) is clamped to (0, 0), the requested side still fits
        let crop = iris_crop_region(&geometry(20.0, 25.0, 30.0)?, [100, 100].into())?;
        assert_eq!(crop, CropRegion { x: 0, y: 0, side: 60 });
        Ok(())
    }

    #[test]
    fn crop_clipped_at_bottom_right() -> Result<(), IrisCutError> {
        // corner at (70, 60), only 30 columns and 40 rows remain
        let crop = iris_crop_region(&geometry(90.0, 80.0, 20.0)?, [100, 100].into())?;
        assert_eq!(crop, CropRegion { x: 70, y: 60, side: 30 });
        Ok(())
    }

    #[test]
    fn crop_iris_outside_image() -> Result<(), IrisCutError> {
        // corner clamped to the last pixel, a single pixel remains
        let crop = iris_crop_region(&geometry(500.0, 500.0, 10.0)?, [100, 100].into())?;
        assert_eq!(crop, CropRegion { x: 99, y: 99, side: 1 });
        Ok(())
    }

    #[test]
    fn crop_empty_image() -> Result<(), IrisCutError> {
        let res = iris_crop_region(&geometry(5.0, 5.0, 2.0)?, [0, 10].into());
        assert!(matches!(res, Err(IrisCutError::InvalidInput(_))));
        Ok(())
    }
}
