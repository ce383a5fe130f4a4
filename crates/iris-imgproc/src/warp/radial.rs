use crate::geometry::CutGeometry;

/// Radial remap from the output annulus back to the source annulus.
///
/// Output radii in `[0.5 * pupil_radius, iris_radius]` are mapped linearly onto source
/// radii in `[pupil_radius, iris_radius]` along the same angle about the iris center.
/// Anything outside that range is masked.
#[derive(Debug, Clone, Copy)]
pub struct RadialRemap {
    geometry: CutGeometry,
}

impl RadialRemap {
    /// Create the remap for a validated cut geometry.
    pub fn new(geometry: CutGeometry) -> Self {
        Self { geometry }
    }

    /// The geometry the remap was built from.
    pub fn geometry(&self) -> &CutGeometry {
        &self.geometry
    }

    /// Map an output radius to the source radius it samples.
    ///
    /// Returns `None` if the radius is masked, i.e. outside the iris or inside the
    /// shrunken pupil.
    ///
    /// # Example
    ///
    /// ```
    /// use iris_imgproc::geometry::{Circle, CutGeometry, CutParams};
    /// use iris_imgproc::warp::RadialRemap;
    ///
    /// let geometry = CutGeometry::new(&CutParams {
    ///     iris: Circle::new(50.0, 50.0, 40.0),
    ///     pupil: Circle::new(50.0, 50.0, 10.0),
    /// }).unwrap();
    /// let remap = RadialRemap::new(geometry);
    ///
    /// assert_eq!(remap.source_radius(5.0), Some(10.0));
    /// assert_eq!(remap.source_radius(40.0), Some(40.0));
    /// assert_eq!(remap.source_radius(4.9), None);
    /// assert_eq!(remap.source_radius(40.1), None);
    /// ```
    pub fn source_radius(&self, r_dst: f64) -> Option<f64> {
        let g = &self.geometry;
        let inner = g.shrunken_pupil_radius();
        if r_dst > g.iris_radius() || r_dst < inner {
            return None;
        }

        let t = ((r_dst - inner) / g.destination_radial_span()).clamp(0.0, 1.0);
        Some(g.pupil_radius() + t * g.source_radial_span())
    }

    /// Map an absolute output sampling position to the absolute source position.
    ///
    /// `(x, y)` is the sampling point in image coordinates, callers pass pixel centers
    /// (`column + 0.5`, `row + 0.5`). Returns `None` if the position is masked.
    pub fn source_point(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (cx, cy) = (self.geometry.center_x(), self.geometry.center_y());
        let (vx, vy) = (x - cx, y - cy);

        let r_dst = (vx * vx + vy * vy).sqrt();
        let r_src = self.source_radius(r_dst)?;

        let theta = vy.atan2(vx);
        Some((cx + r_src * theta.cos(), cy + r_src * theta.sin()))
    }
}

#[cfg(test)]
mod tests {
    use super::RadialRemap;
    use crate::error::IrisCutError;
    use crate::geometry::{Circle, CutGeometry, CutParams};
    use approx::assert_relative_eq;

    fn remap(iris_radius: f64, pupil_radius: f64) -> Result<RadialRemap, IrisCutError> {
        let geometry = CutGeometry::new(&CutParams {
            iris: Circle::new(50.0, 50.0, iris_radius),
            pupil: Circle::new(50.0, 50.0, pupil_radius),
        })?;
        Ok(RadialRemap::new(geometry))
    }

    #[test]
    fn outer_boundary_is_fixed() -> Result<(), IrisCutError> {
        let remap = remap(40.0, 10.0)?;
        assert_eq!(remap.source_radius(40.0), Some(40.0));
        Ok(())
    }

    #[test]
    fn inner_boundary_is_half_pupil() -> Result<(), IrisCutError> {
        let remap = remap(40.0, 10.0)?;
        assert_eq!(remap.source_radius(5.0), Some(10.0));
        assert_eq!(remap.source_radius(5.0 - 1e-9), None);
        Ok(())
    }

    #[test]
    fn remap_is_linear_and_monotonic() -> Result<(), IrisCutError> {
        let remap = remap(40.0, 10.0)?;

        // halfway through the output ring is halfway through the source ring
        let r = remap.source_radius(5.0 + 35.0 / 2.0).unwrap_or_default();
        assert_relative_eq!(r, 25.0, epsilon = 1e-12);

        let mut previous = 0.0;
        for i in 0..=700 {
            let r_dst = 5.0 + i as f64 * 0.05;
            let r_src = remap.source_radius(r_dst).unwrap_or(f64::NAN);
            assert!(r_src >= previous, "r_dst {r_dst}: {r_src} < {previous}");
            assert!((10.0..=40.0).contains(&r_src));
            previous = r_src;
        }
        Ok(())
    }

    #[test]
    fn source_point_keeps_the_angle() -> Result<(), IrisCutError> {
        let remap = remap(40.0, 10.0)?;

        // straight right of the center, at the shrunken pupil edge
        let (sx, sy) = remap.source_point(55.0, 50.0).unwrap_or_default();
        assert_relative_eq!(sx, 60.0, epsilon = 1e-12);
        assert_relative_eq!(sy, 50.0, epsilon = 1e-12);

        // straight up, on the iris boundary
        let (sx, sy) = remap.source_point(50.0, 10.0).unwrap_or_default();
        assert_relative_eq!(sx, 50.0, epsilon = 1e-12);
        assert_relative_eq!(sy, 10.0, epsilon = 1e-12);

        // diagonal
        let d = 20.0 / 2f64.sqrt();
        let (sx, sy) = remap.source_point(50.0 - d, 50.0 + d).unwrap_or_default();
        let r_src = remap.source_radius(20.0).unwrap_or_default();
        assert_relative_eq!(sx, 50.0 - r_src / 2f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(sy, 50.0 + r_src / 2f64.sqrt(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn source_point_masks_outside_and_pupil() -> Result<(), IrisCutError> {
        let remap = remap(40.0, 10.0)?;
        assert_eq!(remap.source_point(50.0, 50.0), None);
        assert_eq!(remap.source_point(53.0, 53.0), None);
        assert_eq!(remap.source_point(91.0, 50.0), None);
        Ok(())
    }

    #[test]
    fn zero_pupil_fills_the_disc() -> Result<(), IrisCutError> {
        let remap = remap(10.0, 0.0)?;
        assert_eq!(remap.source_radius(0.0), Some(0.0));
        assert_eq!(remap.source_point(50.0, 50.0), Some((50.0, 50.0)));
        Ok(())
    }
}
