//! Decoding of the top mip level of a DDS file to an 8-bit [`PixelBuffer`].
//!
//! | Format     | Output |
//! |------------|--------|
//! | BC1/BC2/BC3 | RGBA8 |
//! | RGBA8888, BGRA8888 | RGBA8 |
//! | RGBX8888, BGRX8888 | RGBA8, opaque |
//! | BGR888     | RGB8   |
//!
//! BC6H, BC7 and unrecognised formats fail with [`DdsError::UnsupportedFormat`].
//! Additional mip levels, cube faces and array slices are ignored.

/// BC1 (DXT1) block decoding.
pub mod bc1;
/// BC2 (DXT2/3) block decoding.
pub mod bc2;
/// BC3 (DXT4/5) block decoding.
pub mod bc3;
mod uncompressed;

use crate::dds::{parse_dds, DdsFormat, DdsInfo};
use crate::error::DdsError;
use alloc::vec;
use alloc::vec::Vec;
use texconv_common::decoded_4x4_block::Decoded4x4Block;
use texconv_common::{BufferError, Channels, PixelBuffer};

/// Decodes the top mip level of a DDS file.
///
/// # Errors
///
/// - [`DdsError::NotADds`] / [`DdsError::InputTooShort`] for malformed or truncated files.
/// - [`DdsError::UnsupportedFormat`] for formats without a decoder.
/// - [`DdsError::Buffer`] for images with a zero dimension.
pub fn decode_dds(data: &[u8]) -> Result<PixelBuffer<u8>, DdsError> {
    let info = parse_dds(data)?;
    decode_top_level(data, &info)
}

/// Decodes the top mip level of a DDS file whose header was already parsed into `info`.
pub fn decode_top_level(data: &[u8], info: &DdsInfo) -> Result<PixelBuffer<u8>, DdsError> {
    let channels = match info.format {
        DdsFormat::BC1
        | DdsFormat::BC2
        | DdsFormat::BC3
        | DdsFormat::RGBA8888
        | DdsFormat::BGRA8888
        | DdsFormat::RGBX8888
        | DdsFormat::BGRX8888 => Channels::Rgba,
        DdsFormat::BGR888 => Channels::Rgb,
        DdsFormat::BC6H | DdsFormat::BC7 | DdsFormat::Unknown => {
            return Err(DdsError::UnsupportedFormat(info.format))
        }
    };

    let (width, height) = (info.width, info.height);
    let sample_count = PixelBuffer::<u8>::required_samples(width, height, channels)?;
    let overflow = BufferError::DimensionsOverflow { width, height };
    let end = info
        .top_level_length()
        .and_then(|length| info.data_offset.checked_add(length))
        .ok_or(overflow)?;

    let src = data.get(info.data_offset..end).ok_or(DdsError::InputTooShort {
        required: end,
        actual: data.len(),
    })?;

    let samples = match info.format {
        DdsFormat::BC1 => {
            decode_blocks(src, width, height, bc1::BC1_BLOCK_SIZE, bc1::decode_bc1_block)
        }
        DdsFormat::BC2 => {
            decode_blocks(src, width, height, bc2::BC2_BLOCK_SIZE, bc2::decode_bc2_block)
        }
        DdsFormat::BC3 => {
            decode_blocks(src, width, height, bc3::BC3_BLOCK_SIZE, bc3::decode_bc3_block)
        }
        DdsFormat::BGRA8888 => uncompressed::bgra_to_rgba(src),
        DdsFormat::BGRX8888 => uncompressed::bgrx_to_rgba(src),
        DdsFormat::RGBX8888 => uncompressed::rgbx_to_rgba(src),
        DdsFormat::BGR888 => uncompressed::bgr_to_rgb(src),
        // RGBA8888
        _ => src.to_vec(),
    };
    debug_assert_eq!(samples.len(), sample_count);

    Ok(PixelBuffer::new(width, height, channels, samples)?)
}

/// Decodes every block of a block-compressed level into an RGBA8 image.
///
/// `src` holds exactly `ceil(width / 4) * ceil(height / 4)` blocks; blocks overhanging the
/// right or bottom edge are clipped.
fn decode_blocks(
    src: &[u8],
    width: u32,
    height: u32,
    block_size: usize,
    decode_block: fn(&[u8]) -> Decoded4x4Block,
) -> Vec<u8> {
    let image_width = width as usize;
    let image_height = height as usize;
    let blocks_wide = image_width.div_ceil(4);

    let mut dst = vec![0u8; image_width * image_height * 4];
    for (block_index, block) in src.chunks_exact(block_size).enumerate() {
        decode_block(block).write_to_rgba8(
            &mut dst,
            image_width,
            image_height,
            block_index % blocks_wide,
            block_index / blocks_wide,
        );
    }

    dst
}
