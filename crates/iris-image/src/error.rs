/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the requested number of elements overflows `usize`.
    #[error("Image size {0}x{1} with {2} channels overflows the address space")]
    SizeOverflow(usize, usize, usize),

    /// Error when the pixel storage could not be allocated.
    #[error("Failed to allocate {0} elements for the image data")]
    AllocationFailed(usize),
}
