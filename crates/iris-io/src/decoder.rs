use std::path::Path;

use iris_image::Rgba8Image;

use crate::error::IoError;

/// A backend able to turn an encoded image file into RGBA pixels.
pub trait ImageDecoder {
    /// Decode the file at `file_path` into an 8-bit RGBA image.
    ///
    /// Grayscale, RGB and 16-bit inputs are converted to RGBA8.
    fn decode_rgba8(&self, file_path: &Path) -> Result<Rgba8Image, IoError>;

    /// Whether this decoder can decode anything at all.
    fn is_available(&self) -> bool;
}

/// The decoder compiled into this build.
///
/// Backed by the `image` crate when the `image` feature is enabled, otherwise every
/// call fails with [`IoError::DecoderUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDecoder;

impl ImageDecoder for DefaultDecoder {
    #[cfg(feature = "image")]
    fn decode_rgba8(&self, file_path: &Path) -> Result<Rgba8Image, IoError> {
        use iris_image::{Image, ImageSize};

        let img = image::ImageReader::open(file_path)?
            .with_guessed_format()?
            .decode()?;

        log::debug!(
            "decoded {} as {:?} {}x{}",
            file_path.display(),
            img.color(),
            img.width(),
            img.height()
        );

        let size = ImageSize {
            width: img.width() as usize,
            height: img.height() as usize,
        };

        Ok(Image::new(size, img.into_rgba8().into_raw())?)
    }

    #[cfg(not(feature = "image"))]
    fn decode_rgba8(&self, _file_path: &Path) -> Result<Rgba8Image, IoError> {
        Err(IoError::DecoderUnavailable)
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "image")
    }
}
