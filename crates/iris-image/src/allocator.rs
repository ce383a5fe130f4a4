use crate::error::ImageError;

/// Allocate a buffer of `len` elements filled with `val`.
///
/// Unlike `vec![val; len]` this reports an out of memory condition as
/// [`ImageError::AllocationFailed`] instead of aborting the process, so a
/// caller never observes a partially constructed buffer.
///
/// # Examples
///
/// ```
/// use iris_image::allocator::try_alloc_filled;
///
/// let data = try_alloc_filled(16, 0u8).unwrap();
/// assert_eq!(data.len(), 16);
/// ```
pub fn try_alloc_filled<T: Clone>(len: usize, val: T) -> Result<Vec<T>, ImageError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ImageError::AllocationFailed(len))?;
    data.resize(len, val);
    Ok(data)
}

/// Number of elements needed to store an image, checked for overflow.
pub(crate) fn checked_len(width: usize, height: usize, channels: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageError::SizeOverflow(width, height, channels))
}
