use std::path::Path;

use iris_image::Rgba8Image;

use crate::decoder::{DefaultDecoder, ImageDecoder};
use crate::error::IoError;

/// Whether this build can decode image files.
pub fn has_decoder() -> bool {
    DefaultDecoder.is_available()
}

/// Reads an image from the given file path as RGBA8.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
///
/// # Errors
///
/// * [`IoError::DecoderUnavailable`] if the build has no decoder.
/// * [`IoError::FileDoesNotExist`] if the file is missing.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<Rgba8Image, IoError> {
    read_image_rgba8_with(&DefaultDecoder, file_path)
}

/// Reads an image from the given file path as RGBA8 using the given decoder.
pub fn read_image_rgba8_with<D: ImageDecoder + ?Sized>(
    decoder: &D,
    file_path: impl AsRef<Path>,
) -> Result<Rgba8Image, IoError> {
    if !decoder.is_available() {
        return Err(IoError::DecoderUnavailable);
    }

    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    decoder.decode_rgba8(file_path)
}

/// Writes a RGBA8 image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to encode.
#[cfg(feature = "image")]
pub fn write_image_png_rgba8(file_path: impl AsRef<Path>, image: &Rgba8Image) -> Result<(), IoError> {
    let (width, height) = png_dimensions(image.size())?;

    image::save_buffer_with_format(
        file_path.as_ref(),
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| IoError::PngEncodingError(e.to_string()))
}

/// PNG dimensions are stored as `u32`, larger sizes are rejected instead of truncated.
#[cfg(feature = "image")]
fn png_dimensions(size: iris_image::ImageSize) -> Result<(u32, u32), IoError> {
    match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(IoError::PngEncodingError(format!(
            "{size} does not fit the PNG dimension range"
        ))),
    }
}

/// Writes a RGBA8 image to the given file path as PNG.
///
/// Always fails with [`IoError::DecoderUnavailable`] since the build has no encoder.
#[cfg(not(feature = "image"))]
pub fn write_image_png_rgba8(_file_path: impl AsRef<Path>, _image: &Rgba8Image) -> Result<(), IoError> {
    Err(IoError::DecoderUnavailable)
}
