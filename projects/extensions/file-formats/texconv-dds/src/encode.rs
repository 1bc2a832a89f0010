//! Writing of uncompressed RGBA8888 DDS files.

use crate::dds::constants::*;
use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};
use texconv_common::{Channels, PixelBuffer};

/// Encodes an 8-bit image as a legacy-header, single-level, uncompressed RGBA8888 DDS file.
///
/// Grayscale and RGB images are expanded to RGBA with an opaque alpha channel.
/// The output decodes back to the same RGBA8 samples with [`decode_dds`].
///
/// [`decode_dds`]: crate::decode::decode_dds
pub fn encode_rgba8888_dds(image: &PixelBuffer<u8>) -> Vec<u8> {
    let rgba = to_rgba8(image);
    let mut output = vec![0u8; DDS_HEADER_SIZE + rgba.len()];
    write_rgba8888_header(&mut output, image.width(), image.height());
    output[DDS_HEADER_SIZE..].copy_from_slice(&rgba);
    output
}

fn to_rgba8(image: &PixelBuffer<u8>) -> Cow<'_, [u8]> {
    let samples = image.samples();
    match image.channels() {
        Channels::Rgba => Cow::Borrowed(samples),
        Channels::Rgb => Cow::Owned(
            samples
                .chunks_exact(3)
                .flat_map(|pixel| [pixel[0], pixel[1], pixel[2], 255])
                .collect(),
        ),
        Channels::Gray => Cow::Owned(
            samples
                .iter()
                .flat_map(|&value| [value, value, value, 255])
                .collect(),
        ),
    }
}

/// Writes the 128 byte header of an uncompressed RGBA8888 DDS into `output`.
///
/// `output` must be at least [`DDS_HEADER_SIZE`] bytes long.
fn write_rgba8888_header(output: &mut [u8], width: u32, height: u32) {
    assert!(output.len() >= DDS_HEADER_SIZE);

    // SAFETY: We checked output.len() >= DDS_HEADER_SIZE (128); every field written is below that.
    let mut writer = unsafe { LittleEndianWriter::new(output.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(
            DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PITCH | DDSD_PIXELFORMAT,
            DDS_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(width.saturating_mul(4), DDS_PITCH_OFFSET as isize);

        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
        writer.write_u32_at(
            DDPF_RGB | DDPF_ALPHAPIXELS,
            DDS_PIXELFORMAT_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(32, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(RGBA8888_RED_MASK, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(RGBA8888_GREEN_MASK, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(RGBA8888_BLUE_MASK, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(RGBA8888_ALPHA_MASK, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);

        writer.write_u32_at(DDSCAPS_TEXTURE, DDS_CAPS_OFFSET as isize);
    }
}
