//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::dds::constants::*;
use crate::dds::DdsFormat;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Writes the magic, size, flags, dimensions and mipmap count of a DDS header.
fn write_dds_header_base(data: &mut [u8], width: u32, height: u32, mipmap_count: u32) {
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);

        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
        if mipmap_count > 1 {
            flags |= DDSD_MIPMAPCOUNT;
            writer.write_u32_at(mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        }
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);

        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
    }
}

/// Writes pixel format flags for FOURCC-based formats
fn write_fourcc_pixel_format(data: &mut [u8], fourcc: &[u8; 4]) {
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
    }
}

/// Writes the DX10 FOURCC and DXGI format
fn write_dx10_format(data: &mut [u8], dxgi_format: u32) {
    write_fourcc_pixel_format(data, b"DX10");
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
    }
}

/// Writes uncompressed pixel format information
fn write_uncompressed_pixel_format(
    data: &mut [u8],
    bit_count: u32,
    masks: [u32; 4],
) {
    let flags = if masks[3] != 0 {
        DDPF_RGB | DDPF_ALPHAPIXELS
    } else {
        DDPF_RGB
    };

    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }
}

fn is_dx10(format: DdsFormat) -> bool {
    matches!(format, DdsFormat::BC6H | DdsFormat::BC7)
}

/// Size of all mip levels of a texture, 0 for [`DdsFormat::Unknown`].
fn texture_data_length(format: DdsFormat, width: u32, height: u32, mipmap_count: u32) -> usize {
    let mut total = 0;
    let (mut w, mut h) = (width as usize, height as usize);
    for _ in 0..mipmap_count.max(1) {
        total += if let Some(block_size) = format.block_size() {
            w.div_ceil(4) * h.div_ceil(4) * block_size
        } else {
            w * h * format.bytes_per_pixel().unwrap_or(0)
        };
        w = (w / 2).max(1);
        h = (h / 2).max(1);
    }
    total
}

/// Creates only the header(s) of a DDS file with the given format.
fn create_dds_header(format: DdsFormat, width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    let header_size = if is_dx10(format) {
        DDS_DX10_TOTAL_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    };
    let mut data = vec![0u8; header_size];
    write_dds_header_base(&mut data, width, height, mipmap_count);

    match format {
        DdsFormat::BC1 => write_fourcc_pixel_format(&mut data, b"DXT1"),
        DdsFormat::BC2 => write_fourcc_pixel_format(&mut data, b"DXT3"),
        DdsFormat::BC3 => write_fourcc_pixel_format(&mut data, b"DXT5"),
        DdsFormat::BC6H => write_dx10_format(&mut data, DXGI_FORMAT_BC6H_UF16),
        DdsFormat::BC7 => write_dx10_format(&mut data, DXGI_FORMAT_BC7_UNORM),
        DdsFormat::RGBA8888 => write_uncompressed_pixel_format(
            &mut data,
            32,
            [
                RGBA8888_RED_MASK,
                RGBA8888_GREEN_MASK,
                RGBA8888_BLUE_MASK,
                RGBA8888_ALPHA_MASK,
            ],
        ),
        DdsFormat::BGRA8888 => write_uncompressed_pixel_format(
            &mut data,
            32,
            [
                BGRA8888_RED_MASK,
                BGRA8888_GREEN_MASK,
                BGRA8888_BLUE_MASK,
                BGRA8888_ALPHA_MASK,
            ],
        ),
        DdsFormat::RGBX8888 => write_uncompressed_pixel_format(
            &mut data,
            32,
            [RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, 0],
        ),
        DdsFormat::BGRX8888 => write_uncompressed_pixel_format(
            &mut data,
            32,
            [BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0],
        ),
        DdsFormat::BGR888 => write_uncompressed_pixel_format(
            &mut data,
            24,
            [BGR888_RED_MASK, BGR888_GREEN_MASK, BGR888_BLUE_MASK, 0],
        ),
        DdsFormat::Unknown => write_fourcc_pixel_format(&mut data, b"UNKN"),
    }

    data
}

/// Creates a valid DDS with specified format and dimensions.
/// The texture data is filled with a counting pattern starting at 0.
pub fn create_valid_dds_with_dimensions(
    format: DdsFormat,
    width: u32,
    height: u32,
    mipmap_count: u32,
) -> Vec<u8> {
    let mut data = create_dds_header(format, width, height, mipmap_count);
    let data_length = texture_data_length(format, width, height, mipmap_count);
    data.extend((0..data_length).map(|x| (x % 256) as u8));
    data
}

/// Creates a DDS with specified format and dimensions, followed by `pixel_data`.
pub fn create_dds_with_pixel_data(
    format: DdsFormat,
    width: u32,
    height: u32,
    pixel_data: &[u8],
) -> Vec<u8> {
    let mut data = create_dds_header(format, width, height, 1);
    data.extend_from_slice(pixel_data);
    data
}

/// Creates a 4x4 DDS file with only the header(s) and no texture data
pub fn create_incomplete_dds(format: DdsFormat) -> Vec<u8> {
    create_dds_header(format, 4, 4, 1)
}

/// Creates a DDS file that's too small to contain a complete header
pub fn create_truncated_dds(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];

    // Only set magic if there's room
    if size >= 4 {
        data[..4].copy_from_slice(&DDS_MAGIC.to_le_bytes());
    }

    data
}
