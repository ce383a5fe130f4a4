use std::path::Path;

use iris_image::Rgba8Image;
use iris_imgproc::geometry::{CutParams, ViewParams};
use iris_imgproc::warp::{iris_cut, iris_cut_from_view, CutOptions};
use iris_io::functional::read_image_rgba8;

use crate::error::EngineError;

/// Decode an image file and cut the iris out of it with pixel space circles.
///
/// # Arguments
///
/// * `file_path` - The path to any image format the decoder understands.
/// * `params` - The iris and pupil circles in pixel coordinates of the decoded image.
/// * `options` - Execution options.
///
/// # Returns
///
/// The square RGBA cut, see [`iris_cut`].
pub fn process_iris_cut(
    file_path: impl AsRef<Path>,
    params: &CutParams,
    options: &CutOptions,
) -> Result<Rgba8Image, EngineError> {
    let file_path = file_path.as_ref();
    let src = read_image_rgba8(file_path)?;
    log::info!("cutting iris from {} ({})", file_path.display(), src.size());

    Ok(iris_cut(&src, params, options)?)
}

/// Decode an image file and cut the iris out of it with display layout circles.
///
/// The layout is resolved against the decoded image size, see [`iris_cut_from_view`].
pub fn process_iris_cut_from_view(
    file_path: impl AsRef<Path>,
    view: &ViewParams,
    options: &CutOptions,
) -> Result<Rgba8Image, EngineError> {
    let file_path = file_path.as_ref();
    let src = read_image_rgba8(file_path)?;
    log::info!(
        "cutting iris from {} ({}) shown in a {}x{} layout",
        file_path.display(),
        src.size(),
        view.view_width,
        view.view_height
    );

    Ok(iris_cut_from_view(&src, view, options)?)
}
