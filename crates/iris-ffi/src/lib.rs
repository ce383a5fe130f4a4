#![deny(missing_docs)]
//! C ABI of the iris engine.
//!
//! Every function returns `1` on success and `0` on failure, the message of the last
//! failure on the calling thread is available through [`iris_engine_last_error`].
//! Buffers handed out by the engine are released with [`iris_engine_free`]. Input
//! buffers stay owned by the caller and are never retained.
//!
//! The matching declarations live in `include/iris_engine.h`.

use std::ffi::{c_char, c_int, CStr};
use std::path::Path;

use iris::imgproc::color::gray_from_rgba_slice_inplace;
use iris::imgproc::geometry::{Circle, CutParams, ViewParams};
use iris::imgproc::parallel::ExecutionStrategy;
use iris::imgproc::warp::CutOptions;
use iris::{EngineError, IrisEngine};

mod boundary;

/// Errors reported across the C boundary.
pub mod error;

use boundary::{ffi_call, image_size, rgba_len, OutImage};
use error::FfiError;

unsafe fn path_from_c<'a>(path: *const c_char) -> Result<&'a Path, FfiError> {
    if path.is_null() {
        return Err(FfiError::NullPointer("image_path_utf8"));
    }
    Ok(Path::new(CStr::from_ptr(path).to_str()?))
}

fn cut_params(
    iris_cx: f64,
    iris_cy: f64,
    iris_r: f64,
    pupil_cx: f64,
    pupil_cy: f64,
    pupil_r: f64,
) -> CutParams {
    CutParams {
        iris: Circle::new(iris_cx, iris_cy, iris_r),
        pupil: Circle::new(pupil_cx, pupil_cy, pupil_r),
    }
}

/// Convert a RGBA buffer to grayscale in place, alpha is left untouched.
///
/// # Safety
///
/// `rgba` must point to `width * height * 4` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn iris_engine_grayscale(rgba: *mut u8, width: c_int, height: c_int) -> c_int {
    ffi_call("iris_engine_grayscale", || {
        if rgba.is_null() {
            return Err(FfiError::NullPointer("rgba"));
        }
        let size = image_size(width, height)?;
        let data = std::slice::from_raw_parts_mut(rgba, rgba_len(size)?);

        gray_from_rgba_slice_inplace(data, size.width, ExecutionStrategy::default())
            .map_err(EngineError::from)?;
        Ok(())
    })
}

/// Create an engine with no image loaded. Release it with [`iris_engine_destroy`].
#[no_mangle]
pub extern "C" fn iris_engine_create() -> *mut IrisEngine {
    Box::into_raw(Box::new(IrisEngine::new()))
}

/// Destroy an engine created by [`iris_engine_create`]. Null is ignored.
///
/// # Safety
///
/// `handle` must come from [`iris_engine_create`] and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn iris_engine_destroy(handle: *mut IrisEngine) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Load a copy of a RGBA buffer into the engine.
///
/// # Safety
///
/// `handle` must be a live engine, `rgba` must point to `width * height * 4` bytes.
#[no_mangle]
pub unsafe extern "C" fn iris_engine_load_rgba(
    handle: *mut IrisEngine,
    rgba: *const u8,
    width: c_int,
    height: c_int,
) -> c_int {
    ffi_call("iris_engine_load_rgba", || {
        let engine = handle.as_mut().ok_or(FfiError::NullPointer("handle"))?;
        if rgba.is_null() {
            return Err(FfiError::NullPointer("rgba"));
        }
        let size = image_size(width, height)?;
        let data = std::slice::from_raw_parts(rgba, rgba_len(size)?);

        engine.load_rgba(data, size)?;
        Ok(())
    })
}

/// Copy the loaded image into a caller allocated buffer.
///
/// Fails if no image is loaded or if `width` and `height` differ from the loaded image.
///
/// # Safety
///
/// `handle` must be a live engine, `out_rgba` must point to `width * height * 4`
/// writable bytes.
#[no_mangle]
pub unsafe extern "C" fn iris_engine_get_rgba(
    handle: *const IrisEngine,
    out_rgba: *mut u8,
    width: c_int,
    height: c_int,
) -> c_int {
    ffi_call("iris_engine_get_rgba", || {
        let engine = handle.as_ref().ok_or(FfiError::NullPointer("handle"))?;
        if out_rgba.is_null() {
            return Err(FfiError::NullPointer("out_rgba"));
        }
        let size = image_size(width, height)?;
        let out = std::slice::from_raw_parts_mut(out_rgba, rgba_len(size)?);

        engine.copy_rgba_into(out, size)?;
        Ok(())
    })
}

/// Cut the iris out of the loaded image. The loaded image is left untouched.
///
/// On success `*out_rgba` holds `out_width * out_height * 4` bytes owned by the caller.
///
/// # Safety
///
/// `handle` must be a live engine, the out pointers must be null or valid for writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn iris_engine_cut_loaded(
    handle: *const IrisEngine,
    iris_cx: f64,
    iris_cy: f64,
    iris_r: f64,
    pupil_cx: f64,
    pupil_cy: f64,
    pupil_r: f64,
    out_rgba: *mut *mut u8,
    out_width: *mut i32,
    out_height: *mut i32,
) -> c_int {
    ffi_call("iris_engine_cut_loaded", || {
        let out = OutImage::reset(out_rgba, out_width, out_height)?;
        let engine = handle.as_ref().ok_or(FfiError::NullPointer("handle"))?;

        let params = cut_params(iris_cx, iris_cy, iris_r, pupil_cx, pupil_cy, pupil_r);
        let cut = engine.cut(&params, &CutOptions::default())?;
        out.write(cut)
    })
}

/// Decode an image file and cut the iris out of it with pixel space circles.
///
/// On success `*out_rgba` holds `out_width * out_height * 4` bytes owned by the caller.
///
/// # Safety
///
/// `image_path_utf8` must be a nul terminated string, the out pointers must be null or
/// valid for writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn iris_engine_process_iris_cut(
    image_path_utf8: *const c_char,
    iris_cx: f64,
    iris_cy: f64,
    iris_r: f64,
    pupil_cx: f64,
    pupil_cy: f64,
    pupil_r: f64,
    out_rgba: *mut *mut u8,
    out_width: *mut i32,
    out_height: *mut i32,
) -> c_int {
    ffi_call("iris_engine_process_iris_cut", || {
        let out = OutImage::reset(out_rgba, out_width, out_height)?;
        let path = path_from_c(image_path_utf8)?;

        let params = cut_params(iris_cx, iris_cy, iris_r, pupil_cx, pupil_cy, pupil_r);
        let cut = iris::process_iris_cut(path, &params, &CutOptions::default())?;
        out.write(cut)
    })
}

/// Decode an image file and cut the iris out of it with display layout circles.
///
/// `view_w` and `view_h` are the layout size, the radii are fractions of the shorter
/// layout side and the offsets are fractions of the layout size from its center.
///
/// # Safety
///
/// `image_path_utf8` must be a nul terminated string, the out pointers must be null or
/// valid for writes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn iris_engine_process_iris_cut_from_view(
    image_path_utf8: *const c_char,
    view_w: f64,
    view_h: f64,
    outer_r: f64,
    inner_r: f64,
    outer_dx: f64,
    outer_dy: f64,
    inner_dx: f64,
    inner_dy: f64,
    out_rgba: *mut *mut u8,
    out_width: *mut i32,
    out_height: *mut i32,
) -> c_int {
    ffi_call("iris_engine_process_iris_cut_from_view", || {
        let out = OutImage::reset(out_rgba, out_width, out_height)?;
        let path = path_from_c(image_path_utf8)?;

        let view = ViewParams {
            view_width: view_w,
            view_height: view_h,
            outer_radius: outer_r,
            inner_radius: inner_r,
            outer_dx,
            outer_dy,
            inner_dx,
            inner_dy,
        };
        let cut = iris::process_iris_cut_from_view(path, &view, &CutOptions::default())?;
        out.write(cut)
    })
}

/// Release a buffer returned by the engine. Null is ignored.
///
/// # Safety
///
/// `ptr` must come from one of the engine outputs and `len` must be
/// `out_width * out_height * 4` of that output.
#[no_mangle]
pub unsafe extern "C" fn iris_engine_free(ptr: *mut u8, len: usize) {
    boundary::free_buffer(ptr, len);
}

/// Returns 1 if the engine can decode image files, otherwise 0.
#[no_mangle]
pub extern "C" fn iris_engine_has_decoder() -> c_int {
    c_int::from(iris::io::functional::has_decoder())
}

/// Message of the last failure on this thread, empty after a success.
///
/// The string stays valid until the next engine call on the same thread.
#[no_mangle]
pub extern "C" fn iris_engine_last_error() -> *const c_char {
    boundary::last_error_ptr()
}
