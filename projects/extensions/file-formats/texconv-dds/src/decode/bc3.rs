//! BC3 (DXT4/DXT5) decoding; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10,
//! AMD or Nvidia method.

use super::bc1::{colour_palette, decode_colour_indices};
use texconv_common::{color_565::Color565, decoded_4x4_block::Decoded4x4Block};

/// Size of a BC3 block in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;

/// Decodes a BC3 block into a structured representation of pixels
///
/// The first 8 bytes hold BC4-compressed alpha (2 endpoints + 16 3-bit indices), the last
/// 8 bytes a BC1-style colour block that always uses the 4 colour mode.
///
/// # Panics
///
/// If `src` is shorter than [`BC3_BLOCK_SIZE`].
#[inline]
#[allow(clippy::identity_op)]
pub fn decode_bc3_block(src: &[u8]) -> Decoded4x4Block {
    let alpha0 = src[0];
    let alpha1 = src[1];
    let alpha_values = alpha_palette(alpha0, alpha1);

    // 48 bits of alpha indices
    let alpha_indices = u64::from_le_bytes([src[2], src[3], src[4], src[5], src[6], src[7], 0, 0]);

    let c0 = Color565::from_le_bytes([src[8], src[9]]);
    let c1 = Color565::from_le_bytes([src[10], src[11]]);
    let indices = u32::from_le_bytes([src[12], src[13], src[14], src[15]]);

    let mut result = decode_colour_indices(&colour_palette(c0, c1, true), indices);
    for (pixel_index, pixel) in result.pixels.iter_mut().enumerate() {
        pixel.a = alpha_values[((alpha_indices >> (pixel_index * 3)) & 0b111) as usize];
    }

    result
}

#[inline(always)]
#[allow(clippy::identity_op)]
fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let (a0, a1) = (alpha0 as u16, alpha1 as u16);
    let mut alpha_values = [alpha0, alpha1, 0, 0, 0, 0, 0, 0];

    // alpha0 > alpha1: 8 interpolated values
    // otherwise: 6 interpolated values plus transparent and opaque
    if alpha0 > alpha1 {
        alpha_values[2] = ((6 * a0 + 1 * a1) / 7) as u8; // bit code 010
        alpha_values[3] = ((5 * a0 + 2 * a1) / 7) as u8; // bit code 011
        alpha_values[4] = ((4 * a0 + 3 * a1) / 7) as u8; // bit code 100
        alpha_values[5] = ((3 * a0 + 4 * a1) / 7) as u8; // bit code 101
        alpha_values[6] = ((2 * a0 + 5 * a1) / 7) as u8; // bit code 110
        alpha_values[7] = ((1 * a0 + 6 * a1) / 7) as u8; // bit code 111
    } else {
        alpha_values[2] = ((4 * a0 + 1 * a1) / 5) as u8; // bit code 010
        alpha_values[3] = ((3 * a0 + 2 * a1) / 5) as u8; // bit code 011
        alpha_values[4] = ((2 * a0 + 3 * a1) / 5) as u8; // bit code 100
        alpha_values[5] = ((1 * a0 + 4 * a1) / 5) as u8; // bit code 101
        alpha_values[6] = 0; // Transparent (bit code 110)
        alpha_values[7] = 255; // Opaque (bit code 111)
    }

    alpha_values
}
