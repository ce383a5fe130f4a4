use std::path::Path;

use iris_image::{Image, ImageSize, Rgba8Image};
use iris_imgproc::color::gray_from_rgba_inplace;
use iris_imgproc::geometry::{CutParams, ViewParams};
use iris_imgproc::parallel::ExecutionStrategy;
use iris_imgproc::warp::{iris_cut, iris_cut_from_view, CutOptions};
use iris_io::functional::read_image_rgba8;

use crate::error::EngineError;

/// Holds at most one RGBA image and runs the engine operations on it.
///
/// # Example
///
/// ```
/// use iris::imgproc::geometry::{Circle, CutParams};
/// use iris::imgproc::warp::CutOptions;
/// use iris::image::ImageSize;
/// use iris::IrisEngine;
///
/// let mut engine = IrisEngine::new();
/// engine.load_rgba(&vec![255u8; 64 * 64 * 4], ImageSize { width: 64, height: 64 }).unwrap();
///
/// let params = CutParams {
///     iris: Circle::new(32.0, 32.0, 20.0),
///     pupil: Circle::new(32.0, 32.0, 5.0),
/// };
/// let cut = engine.cut(&params, &CutOptions::default()).unwrap();
/// assert_eq!(cut.width(), 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IrisEngine {
    image: Option<Rgba8Image>,
    strategy: ExecutionStrategy,
}

impl IrisEngine {
    /// Create an engine with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution strategy used by the in-place operations.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Load a copy of a row-major RGBA buffer, replacing any loaded image.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidDimensions`] if the size is empty.
    /// * [`EngineError::Image`] if `data` is not `width * height * 4` bytes long.
    pub fn load_rgba(&mut self, data: &[u8], size: ImageSize) -> Result<(), EngineError> {
        if size.is_empty() {
            return Err(EngineError::InvalidDimensions(size));
        }
        self.load_image(Image::new(size, data.to_vec())?)
    }

    /// Take ownership of an RGBA image, replacing any loaded image.
    pub fn load_image(&mut self, image: Rgba8Image) -> Result<(), EngineError> {
        if image.size().is_empty() {
            return Err(EngineError::InvalidDimensions(image.size()));
        }
        log::debug!("engine loaded a {} image", image.size());
        self.image = Some(image);
        Ok(())
    }

    /// Decode an image file and load it.
    pub fn load_file(&mut self, file_path: impl AsRef<Path>) -> Result<(), EngineError> {
        let image = read_image_rgba8(file_path)?;
        self.load_image(image)
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Borrow the loaded image.
    pub fn rgba(&self) -> Result<&Rgba8Image, EngineError> {
        self.image.as_ref().ok_or(EngineError::NoImageLoaded)
    }

    /// Copy the loaded image into a caller owned buffer of the given size.
    ///
    /// # Errors
    ///
    /// * [`EngineError::NoImageLoaded`] if nothing is loaded.
    /// * [`EngineError::SizeMismatch`] if `size` differs from the loaded image.
    /// * [`EngineError::Image`] if `out` is not exactly `width * height * 4` bytes long.
    pub fn copy_rgba_into(&self, out: &mut [u8], size: ImageSize) -> Result<(), EngineError> {
        let image = self.rgba()?;
        if image.size() != size {
            return Err(EngineError::SizeMismatch {
                expected: size,
                loaded: image.size(),
            });
        }
        if out.len() != image.as_slice().len() {
            return Err(iris_image::ImageError::InvalidChannelShape(
                out.len(),
                image.as_slice().len(),
            )
            .into());
        }
        out.copy_from_slice(image.as_slice());
        Ok(())
    }

    /// Cut the iris out of the loaded image. The loaded image is left untouched.
    pub fn cut(&self, params: &CutParams, options: &CutOptions) -> Result<Rgba8Image, EngineError> {
        Ok(iris_cut(self.rgba()?, params, options)?)
    }

    /// Cut the iris out of the loaded image given display layout circles.
    pub fn cut_from_view(
        &self,
        view: &ViewParams,
        options: &CutOptions,
    ) -> Result<Rgba8Image, EngineError> {
        Ok(iris_cut_from_view(self.rgba()?, view, options)?)
    }

    /// Convert the loaded image to grayscale in place.
    pub fn grayscale(&mut self) -> Result<(), EngineError> {
        let image = self.image.as_mut().ok_or(EngineError::NoImageLoaded)?;
        gray_from_rgba_inplace(image, self.strategy)?;
        Ok(())
    }

    /// Drop the loaded image and return it, if any.
    pub fn take(&mut self) -> Option<Rgba8Image> {
        self.image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_imgproc::geometry::Circle;

    #[test]
    fn engine_starts_empty() {
        let engine = IrisEngine::new();
        assert!(!engine.is_loaded());
        assert!(matches!(engine.rgba(), Err(EngineError::NoImageLoaded)));
    }

    #[test]
    fn engine_load_and_get() -> Result<(), EngineError> {
        let mut engine = IrisEngine::new();
        let size = ImageSize { width: 2, height: 1 };
        engine.load_rgba(&[1, 2, 3, 4, 5, 6, 7, 8], size)?;

        let mut out = [0u8; 8];
        engine.copy_rgba_into(&mut out, size)?;
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);

        let res = engine.copy_rgba_into(&mut out, ImageSize { width: 1, height: 2 });
        assert!(matches!(res, Err(EngineError::SizeMismatch { .. })));
        Ok(())
    }

    #[test]
    fn engine_rejects_bad_buffers() {
        let mut engine = IrisEngine::new();
        let res = engine.load_rgba(&[], ImageSize { width: 0, height: 3 });
        assert!(matches!(res, Err(EngineError::InvalidDimensions(_))));

        let res = engine.load_rgba(&[0; 7], ImageSize { width: 2, height: 1 });
        assert!(matches!(res, Err(EngineError::Image(_))));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn engine_grayscale() -> Result<(), EngineError> {
        let mut engine = IrisEngine::new().with_strategy(ExecutionStrategy::Serial);
        assert!(matches!(engine.grayscale(), Err(EngineError::NoImageLoaded)));

        engine.load_rgba(&[255, 0, 0, 9], ImageSize { width: 1, height: 1 })?;
        engine.grayscale()?;
        assert_eq!(engine.rgba()?.as_slice(), &[76, 76, 76, 9]);
        Ok(())
    }

    #[test]
    fn engine_cut_keeps_loaded_image() -> Result<(), EngineError> {
        let mut engine = IrisEngine::new();
        let size = ImageSize { width: 30, height: 30 };
        engine.load_rgba(&vec![200u8; 30 * 30 * 4], size)?;

        let params = CutParams {
            iris: Circle::new(15.0, 15.0, 10.0),
            pupil: Circle::new(15.0, 15.0, 2.0),
        };
        let cut = engine.cut(&params, &CutOptions::default())?;
        assert_eq!(cut.size(), ImageSize { width: 20, height: 20 });
        assert_eq!(engine.rgba()?.size(), size);

        let bad = CutParams {
            iris: Circle::new(15.0, 15.0, 2.0),
            pupil: Circle::new(15.0, 15.0, 10.0),
        };
        let res = engine.cut(&bad, &CutOptions::default());
        assert!(matches!(res, Err(EngineError::Cut(_))));
        Ok(())
    }
}
