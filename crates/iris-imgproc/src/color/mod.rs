mod gray;

pub use gray::{gray_from_rgba_inplace, gray_from_rgba_slice_inplace, luma_u8};
