use std::any::Any;
use std::cell::RefCell;
use std::ffi::{c_char, c_int, CString};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use iris::image::{ImageSize, Rgba8Image};

use crate::error::FfiError;

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
}

fn set_last_error(message: String) {
    let message = CString::new(message).unwrap_or_else(|e| {
        let mut bytes = e.into_vec();
        bytes.retain(|b| *b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    LAST_ERROR.with(|e| *e.borrow_mut() = message);
}

/// Pointer to the last error message of this thread, empty after a success.
///
/// Valid until the next engine call on the same thread.
pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|e| e.borrow().as_ptr())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run `f` and turn its outcome into the C status code: 1 on success, 0 on failure.
///
/// Panics are caught here and never unwind into the caller.
pub(crate) fn ffi_call<F>(name: &str, f: F) -> c_int
where
    F: FnOnce() -> Result<(), FfiError>,
{
    set_last_error(String::new());

    let res = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(res) => res,
        Err(payload) => Err(FfiError::Panic(panic_message(payload.as_ref()))),
    };

    match res {
        Ok(()) => 1,
        Err(err) => {
            log::error!("{name} failed: {err}");
            set_last_error(err.to_string());
            0
        }
    }
}

/// Validate C dimensions into an image size.
pub(crate) fn image_size(width: c_int, height: c_int) -> Result<ImageSize, FfiError> {
    if width <= 0 || height <= 0 {
        return Err(FfiError::InvalidDimensions(width, height));
    }
    Ok(ImageSize {
        width: width as usize,
        height: height as usize,
    })
}

/// Number of bytes of a RGBA8 buffer of the given size.
pub(crate) fn rgba_len(size: ImageSize) -> Result<usize, FfiError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(FfiError::DimensionOverflow(size.width))
}

/// The out parameters of the functions returning an engine allocated image.
pub(crate) struct OutImage {
    rgba: *mut *mut u8,
    width: *mut i32,
    height: *mut i32,
}

impl OutImage {
    /// Reset every non null output to null or 0, then require all of them.
    ///
    /// # Safety
    ///
    /// Non null pointers must be valid for writes.
    pub(crate) unsafe fn reset(
        rgba: *mut *mut u8,
        width: *mut i32,
        height: *mut i32,
    ) -> Result<Self, FfiError> {
        if !rgba.is_null() {
            *rgba = ptr::null_mut();
        }
        if !width.is_null() {
            *width = 0;
        }
        if !height.is_null() {
            *height = 0;
        }

        if rgba.is_null() {
            return Err(FfiError::NullPointer("out_rgba"));
        }
        if width.is_null() {
            return Err(FfiError::NullPointer("out_width"));
        }
        if height.is_null() {
            return Err(FfiError::NullPointer("out_height"));
        }

        Ok(Self {
            rgba,
            width,
            height,
        })
    }

    /// Hand the image over to the caller, who releases it with `iris_engine_free`.
    ///
    /// # Safety
    ///
    /// The pointers given to [`OutImage::reset`] must still be valid for writes.
    pub(crate) unsafe fn write(self, image: Rgba8Image) -> Result<(), FfiError> {
        let width = i32::try_from(image.width())
            .map_err(|_| FfiError::DimensionOverflow(image.width()))?;
        let height = i32::try_from(image.height())
            .map_err(|_| FfiError::DimensionOverflow(image.height()))?;

        let data = image.into_vec().into_boxed_slice();
        *self.rgba = Box::into_raw(data).cast::<u8>();
        *self.width = width;
        *self.height = height;

        Ok(())
    }
}

/// Release a buffer handed out by [`OutImage::write`].
///
/// # Safety
///
/// `ptr` and `len` must describe a buffer returned by the engine and not yet freed.
pub(crate) unsafe fn free_buffer(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)));
}
