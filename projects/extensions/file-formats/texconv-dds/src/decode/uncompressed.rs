//! Swizzling of uncompressed DDS pixel data to RGB(A) order.

use alloc::vec::Vec;

/// Reorders BGRA8888 pixels to RGBA8888.
pub(crate) fn bgra_to_rgba(src: &[u8]) -> Vec<u8> {
    src.chunks_exact(4)
        .flat_map(|pixel| [pixel[2], pixel[1], pixel[0], pixel[3]])
        .collect()
}

/// Reorders BGRX8888 pixels to RGBA8888 with opaque alpha.
pub(crate) fn bgrx_to_rgba(src: &[u8]) -> Vec<u8> {
    src.chunks_exact(4)
        .flat_map(|pixel| [pixel[2], pixel[1], pixel[0], 255])
        .collect()
}

/// Copies RGBX8888 pixels, replacing the padding byte with opaque alpha.
pub(crate) fn rgbx_to_rgba(src: &[u8]) -> Vec<u8> {
    src.chunks_exact(4)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2], 255])
        .collect()
}

/// Reorders BGR888 pixels to RGB888.
pub(crate) fn bgr_to_rgb(src: &[u8]) -> Vec<u8> {
    src.chunks_exact(3)
        .flat_map(|pixel| [pixel[2], pixel[1], pixel[0]])
        .collect()
}
