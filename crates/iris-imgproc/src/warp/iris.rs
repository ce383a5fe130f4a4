use iris_image::Image;

use super::radial::RadialRemap;
use crate::crop::iris_crop_region;
use crate::error::IrisCutError;
use crate::geometry::{CutGeometry, CutParams, FitMode, ViewParams};
use crate::interpolation::bilinear_interpolation_u8;
use crate::parallel::{self, ExecutionStrategy};

/// Per call options of the iris cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutOptions {
    /// How the image was fitted into the layout, only used by [`iris_cut_from_view`].
    pub fit: FitMode,
    /// How the output rows are scheduled. The output does not depend on it.
    pub strategy: ExecutionStrategy,
}

/// Cut the iris out of an RGBA image given pixel space circles.
///
/// The iris ring is resampled so the pupil shrinks to half its radius, every pixel
/// outside the iris or inside the shrunken pupil is set to transparent black, and the
/// result is cropped to a square around the iris. The pupil center is ignored, the
/// remap is concentric about the iris center.
///
/// # Arguments
///
/// * `src` - The source RGBA image, never modified.
/// * `params` - The iris and pupil circles in pixel coordinates.
/// * `options` - Execution options.
///
/// # Returns
///
/// A new square RGBA image owned by the caller.
///
/// # Errors
///
/// * [`IrisCutError::InvalidGeometry`] for invalid radii.
/// * [`IrisCutError::InvalidInput`] if the source image is empty.
/// * [`IrisCutError::DegenerateCrop`] if the clamped crop is empty.
/// * [`IrisCutError::AllocationFailure`] if the output could not be allocated.
pub fn iris_cut(
    src: &Image<u8, 4>,
    params: &CutParams,
    options: &CutOptions,
) -> Result<Image<u8, 4>, IrisCutError> {
    let geometry = CutGeometry::new(params)?;
    iris_cut_with_geometry(src, &geometry, options.strategy)
}

/// Cut the iris out of an RGBA image given circles relative to the display layout.
///
/// The circles are converted to pixel space with [`ViewParams::to_pixel_space`] using
/// `options.fit`, then the cut proceeds exactly like [`iris_cut`].
///
/// # Errors
///
/// Same as [`iris_cut`], plus [`IrisCutError::InvalidInput`] for non positive layout
/// dimensions.
pub fn iris_cut_from_view(
    src: &Image<u8, 4>,
    view: &ViewParams,
    options: &CutOptions,
) -> Result<Image<u8, 4>, IrisCutError> {
    let geometry = CutGeometry::from_view(view, src.size(), options.fit)?;
    iris_cut_with_geometry(src, &geometry, options.strategy)
}

/// Cut the iris out of an RGBA image with an already validated geometry.
pub fn iris_cut_with_geometry(
    src: &Image<u8, 4>,
    geometry: &CutGeometry,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, 4>, IrisCutError> {
    let crop = iris_crop_region(geometry, src.size())?;

    // zero initialized, so masked pixels are already transparent black
    let mut dst = Image::<u8, 4>::from_size_val(crop.size(), 0)?;

    let remap = RadialRemap::new(*geometry);
    let row_stride = crop.size().row_stride::<4>();

    parallel::par_iter_rows_indexed(dst.as_slice_mut(), row_stride, strategy, |dy, row| {
        let gy = (crop.y + dy) as f64 + 0.5;
        row.chunks_exact_mut(4).enumerate().for_each(|(dx, dst_pixel)| {
            let gx = (crop.x + dx) as f64 + 0.5;
            if let Some((sx, sy)) = remap.source_point(gx, gy) {
                dst_pixel.copy_from_slice(&bilinear_interpolation_u8(src, sx, sy));
            }
        });
    })?;

    Ok(dst)
}
