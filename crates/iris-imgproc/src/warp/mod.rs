//! Geometric image transformations for the iris cut.
//!
//! The cut resamples the iris ring so the pupil shrinks to half its radius while the
//! outer iris boundary stays put, masks everything outside the ring to transparent and
//! crops the result to a square around the iris.
//!
//! - [`RadialRemap`] maps a destination position to the source position it samples.
//! - [`iris_cut`] runs the whole transform from pixel space circles.
//! - [`iris_cut_from_view`] does the same from layout relative circles.
//!
//! # Examples
//!
//! ```
//! use iris_image::{Image, ImageSize};
//! use iris_imgproc::geometry::{Circle, CutParams};
//! use iris_imgproc::warp::{iris_cut, CutOptions};
//!
//! let src = Image::<u8, 4>::from_size_val(ImageSize { width: 64, height: 64 }, 255).unwrap();
//! let params = CutParams {
//!     iris: Circle::new(32.0, 32.0, 20.0),
//!     pupil: Circle::new(32.0, 32.0, 6.0),
//! };
//!
//! let cut = iris_cut(&src, &params, &CutOptions::default()).unwrap();
//! assert_eq!(cut.size(), ImageSize { width: 40, height: 40 });
//! ```

mod iris;
mod radial;

pub use iris::{iris_cut, iris_cut_from_view, iris_cut_with_geometry, CutOptions};
pub use radial::RadialRemap;
