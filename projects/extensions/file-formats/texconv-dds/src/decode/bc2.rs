//! BC2 (DXT2/DXT3) decoding; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>

use super::bc1::{colour_palette, decode_colour_indices};
use texconv_common::{color_565::Color565, decoded_4x4_block::Decoded4x4Block};

/// Size of a BC2 block in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;

/// Decodes a BC2 block into a structured representation of pixels
///
/// The first 8 bytes hold 16 explicit 4-bit alpha values, the last 8 bytes a BC1-style colour
/// block that always uses the 4 colour mode.
///
/// # Panics
///
/// If `src` is shorter than [`BC2_BLOCK_SIZE`].
#[inline]
pub fn decode_bc2_block(src: &[u8]) -> Decoded4x4Block {
    let alpha = u64::from_le_bytes([
        src[0], src[1], src[2], src[3], src[4], src[5], src[6], src[7],
    ]);
    let c0 = Color565::from_le_bytes([src[8], src[9]]);
    let c1 = Color565::from_le_bytes([src[10], src[11]]);
    let indices = u32::from_le_bytes([src[12], src[13], src[14], src[15]]);

    let mut result = decode_colour_indices(&colour_palette(c0, c1, true), indices);
    for (pixel_index, pixel) in result.pixels.iter_mut().enumerate() {
        // 4-bit to 8-bit: x * 17 == (x << 4) | x
        pixel.a = ((alpha >> (pixel_index * 4)) & 0xF) as u8 * 17;
    }

    result
}
