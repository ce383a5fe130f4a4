use iris_image::ImageSize;

use crate::error::IrisCutError;

/// Fraction of the original pupil radius kept after the cut.
pub const PUPIL_SHRINK: f64 = 0.5;

/// A circle in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// x coordinate of the center.
    pub x: f64,
    /// y coordinate of the center.
    pub y: f64,
    /// radius in pixels.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

/// Iris and pupil circles in image pixel coordinates.
///
/// Only the pupil radius is used by the cut, the remap is always concentric about the
/// iris center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutParams {
    /// The outer iris circle.
    pub iris: Circle,
    /// The pupil circle.
    pub pupil: Circle,
}

/// How the source image was fitted into the on-screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// The whole image is visible, letterboxed inside the layout: `min` of the axis scales.
    #[default]
    Contain,
    /// The image fills the layout and is cropped: `max` of the axis scales.
    Cover,
}

impl FitMode {
    /// Scale factor from image pixels to layout units.
    pub fn scale(&self, layout_width: f64, layout_height: f64, image: ImageSize) -> f64 {
        let sx = layout_width / image.width as f64;
        let sy = layout_height / image.height as f64;
        match self {
            FitMode::Contain => sx.min(sy),
            FitMode::Cover => sx.max(sy),
        }
    }
}

/// Circles expressed relative to the layout the image was displayed in.
///
/// Radii are fractions of the shorter layout dimension, center offsets are fractions of
/// the layout width and height measured from the layout center. None of them are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewParams {
    /// Layout width.
    pub view_width: f64,
    /// Layout height.
    pub view_height: f64,
    /// Normalized iris radius.
    pub outer_radius: f64,
    /// Normalized pupil radius.
    pub inner_radius: f64,
    /// Normalized horizontal offset of the iris center.
    pub outer_dx: f64,
    /// Normalized vertical offset of the iris center.
    pub outer_dy: f64,
    /// Normalized horizontal offset of the pupil center.
    pub inner_dx: f64,
    /// Normalized vertical offset of the pupil center.
    pub inner_dy: f64,
}

impl ViewParams {
    /// Convert the view space circles into image pixel space.
    ///
    /// # Arguments
    ///
    /// * `image` - The size of the source image.
    /// * `fit` - How the image was fitted into the layout.
    ///
    /// # Errors
    ///
    /// Returns [`IrisCutError::InvalidInput`] if the layout or image dimensions are not
    /// positive.
    ///
    /// # Example
    ///
    /// ```
    /// use iris_image::ImageSize;
    /// use iris_imgproc::geometry::{FitMode, ViewParams};
    ///
    /// let view = ViewParams {
    ///     view_width: 100.0,
    ///     view_height: 100.0,
    ///     outer_radius: 0.8,
    ///     inner_radius: 0.2,
    ///     ..Default::default()
    /// };
    ///
    /// let params = view.to_pixel_space(ImageSize { width: 100, height: 100 }, FitMode::Contain).unwrap();
    /// assert_eq!(params.iris.x, 50.0);
    /// assert_eq!(params.iris.radius, 40.0);
    /// assert_eq!(params.pupil.radius, 10.0);
    /// ```
    pub fn to_pixel_space(&self, image: ImageSize, fit: FitMode) -> Result<CutParams, IrisCutError> {
        if image.is_empty() {
            return Err(IrisCutError::InvalidInput(format!(
                "image dimensions must be positive, got {image}"
            )));
        }

        let (vw, vh) = (self.view_width, self.view_height);
        if !(vw.is_finite() && vh.is_finite() && vw > 0.0 && vh > 0.0) {
            return Err(IrisCutError::InvalidInput(format!(
                "view dimensions must be positive, got {vw}x{vh}"
            )));
        }

        let scale = fit.scale(vw, vh, image);
        let shortest = vw.min(vh);
        let (cx, cy) = (image.width as f64 / 2.0, image.height as f64 / 2.0);

        let to_circle = |dx: f64, dy: f64, r: f64| Circle {
            x: cx + (vw * dx) / scale,
            y: cy + (vh * dy) / scale,
            radius: (r * shortest / 2.0) / scale,
        };

        Ok(CutParams {
            iris: to_circle(self.outer_dx, self.outer_dy, self.outer_radius),
            pupil: to_circle(self.inner_dx, self.inner_dy, self.inner_radius),
        })
    }
}

/// The canonical, validated geometry of one cut in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutGeometry {
    center_x: f64,
    center_y: f64,
    iris_radius: f64,
    pupil_radius: f64,
}

impl CutGeometry {
    /// Validate the circles and derive the cut geometry.
    ///
    /// # Errors
    ///
    /// * [`IrisCutError::InvalidGeometry`] if the iris radius is not positive, the pupil
    ///   radius is negative, the pupil is not strictly smaller than the iris or any value
    ///   is not finite.
    /// * [`IrisCutError::DegenerateAnnulus`] if the destination radial span is not positive.
    pub fn new(params: &CutParams) -> Result<Self, IrisCutError> {
        let iris = params.iris;
        let pupil_radius = params.pupil.radius;

        let finite = [iris.x, iris.y, iris.radius, pupil_radius]
            .iter()
            .all(|v| v.is_finite());

        if !finite || iris.radius <= 0.0 || pupil_radius < 0.0 || pupil_radius >= iris.radius {
            return Err(IrisCutError::InvalidGeometry {
                iris_radius: iris.radius,
                pupil_radius,
            });
        }

        let geometry = Self {
            center_x: iris.x,
            center_y: iris.y,
            iris_radius: iris.radius,
            pupil_radius,
        };

        let span = geometry.destination_radial_span();
        if span <= 0.0 {
            return Err(IrisCutError::DegenerateAnnulus(span));
        }

        log::debug!(
            "iris cut geometry: center ({:.3}, {:.3}), iris radius {:.3}, pupil radius {:.3}",
            geometry.center_x,
            geometry.center_y,
            geometry.iris_radius,
            geometry.pupil_radius
        );

        Ok(geometry)
    }

    /// Resolve view space parameters against the source image size and validate them.
    pub fn from_view(view: &ViewParams, image: ImageSize, fit: FitMode) -> Result<Self, IrisCutError> {
        let params = view.to_pixel_space(image, fit)?;
        Self::new(&params)
    }

    /// x coordinate of the iris center.
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// y coordinate of the iris center.
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Radius of the iris in pixels.
    pub fn iris_radius(&self) -> f64 {
        self.iris_radius
    }

    /// Radius of the pupil in the source image.
    pub fn pupil_radius(&self) -> f64 {
        self.pupil_radius
    }

    /// Radius of the pupil in the output.
    pub fn shrunken_pupil_radius(&self) -> f64 {
        PUPIL_SHRINK * self.pupil_radius
    }

    /// Width of the iris ring in the source image.
    pub fn source_radial_span(&self) -> f64 {
        self.iris_radius - self.pupil_radius
    }

    /// Width of the iris ring in the output.
    pub fn destination_radial_span(&self) -> f64 {
        self.iris_radius - self.shrunken_pupil_radius()
    }
}
