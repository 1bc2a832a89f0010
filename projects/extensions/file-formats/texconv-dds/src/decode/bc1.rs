//! BC1 (DXT1) decoding; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>

use texconv_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Size of a BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The source BC1 block; only the first 8 bytes are read
///
/// # Panics
///
/// If `src` is shorter than [`BC1_BLOCK_SIZE`].
///
/// # Example
///
/// ```
/// use texconv_dds::decode::bc1::decode_bc1_block;
///
/// // Solid red: both endpoints 0xF800, every index 0.
/// let block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
/// let decoded = decode_bc1_block(&block);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (255, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8]) -> Decoded4x4Block {
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    // c0 <= c1 selects the 3 colour + transparent black mode
    let palette = colour_palette(c0, c1, c0.greater_than(&c1));
    decode_colour_indices(&palette, indices)
}

/// Builds the 4 entry colour palette shared by BC1, BC2 and BC3.
///
/// With `four_colour` unset, entry 2 is the midpoint and entry 3 is transparent black.
#[inline(always)]
pub(crate) fn colour_palette(c0: Color565, c1: Color565, four_colour: bool) -> [Color8888; 4] {
    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    let mut palette = [
        c0.to_color_8888(),
        c1.to_color_8888(),
        Color8888::default(),
        Color8888::default(),
    ];
    if four_colour {
        palette[2] = Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        );
        palette[3] = Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        );
    } else {
        palette[2] = Color8888::new(
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        );
        palette[3] = Color8888::new(0, 0, 0, 0);
    }

    palette
}

/// Expands 16 2-bit indices (LSB first, row-major) against `palette`.
#[inline(always)]
pub(crate) fn decode_colour_indices(palette: &[Color8888; 4], indices: u32) -> Decoded4x4Block {
    let mut result = Decoded4x4Block::new(Color8888::default());
    for (pixel_index, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = palette[((indices >> (pixel_index * 2)) & 0b11) as usize];
    }
    result
}
