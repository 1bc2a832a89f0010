use super::{constants::*, likely_dds};
use crate::error::DdsError;
use endian_writer::{EndianReader, LittleEndianReader};

/// Data formats recognised inside a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DdsFormat {
    /// This is a DDS file, but not in a format we know.
    Unknown = 0,
    /// a.k.a. DXT1
    BC1 = 1,
    /// a.k.a. DXT2/3
    BC2 = 2,
    /// a.k.a. DXT4/5
    BC3 = 3,
    BC6H = 4,
    BC7 = 5,
    /// RGBA8888 format (32-bit with alpha)
    RGBA8888 = 6,
    /// BGRA8888 format (32-bit with alpha, different byte order)
    BGRA8888 = 7,
    /// BGR888 format (24-bit RGB)
    BGR888 = 8,
    /// RGBA8888 layout with the alpha byte unused (X8B8G8R8)
    RGBX8888 = 9,
    /// BGRA8888 layout with the alpha byte unused (X8R8G8B8)
    BGRX8888 = 10,
}

impl DdsFormat {
    /// Bytes per 4x4 block for block-compressed formats, [`None`] otherwise.
    #[inline]
    pub fn block_size(self) -> Option<usize> {
        match self {
            DdsFormat::BC1 => Some(8),
            DdsFormat::BC2 | DdsFormat::BC3 | DdsFormat::BC6H | DdsFormat::BC7 => Some(16),
            _ => None,
        }
    }

    /// Bytes per pixel for uncompressed formats, [`None`] otherwise.
    #[inline]
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            DdsFormat::RGBA8888
            | DdsFormat::BGRA8888
            | DdsFormat::RGBX8888
            | DdsFormat::BGRX8888 => Some(4),
            DdsFormat::BGR888 => Some(3),
            _ => None,
        }
    }
}

/// The header information of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    pub format: DdsFormat,
    pub width: u32,
    pub height: u32,
    /// Number of mip levels stored; always at least 1.
    pub mipmap_count: u32,
    /// Offset of the first byte of texture data (after the DX10 header, if any).
    pub data_offset: usize,
}

impl DdsInfo {
    /// Number of bytes occupied by the top mip level.
    ///
    /// Returns [`None`] for [`DdsFormat::Unknown`] or if the size cannot be represented.
    pub fn top_level_length(&self) -> Option<usize> {
        let width = self.width as usize;
        let height = self.height as usize;

        if let Some(block_size) = self.format.block_size() {
            // Block-compressed levels are rounded up to whole 4x4 blocks
            return width
                .div_ceil(4)
                .checked_mul(height.div_ceil(4))?
                .checked_mul(block_size);
        }

        let bytes_per_pixel = self.format.bytes_per_pixel()?;
        width.checked_mul(height)?.checked_mul(bytes_per_pixel)
    }
}

/// Parses the header of a DDS file.
///
/// # Errors
///
/// - [`DdsError::NotADds`] if the magic is missing or the header is incomplete.
/// - [`DdsError::InputTooShort`] if a DX10 header is announced but truncated.
///
/// A file in an unrecognised format still parses, with [`DdsFormat::Unknown`].
pub fn parse_dds(data: &[u8]) -> Result<DdsInfo, DdsError> {
    if !likely_dds(data) {
        return Err(DdsError::NotADds);
    }

    // SAFETY: likely_dds checked data.len() >= DDS_HEADER_SIZE (128), every legacy field
    // is below that.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let raw_mipmap_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    let mipmap_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mipmap_count.max(1)
    } else {
        1
    };

    let (format, data_offset) = if fourcc == FOURCC_DX10 {
        // DX10 header present, ensure the data is long enough.
        let required = DDS_HEADER_SIZE + DX10_HEADER_SIZE;
        if data.len() < required {
            return Err(DdsError::InputTooShort {
                required,
                actual: data.len(),
            });
        }

        // SAFETY: We checked data.len() >= 148, so DX10_FORMAT_OFFSET (0x80) + 4 is in bounds.
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        (format_from_dxgi(dxgi_format), required)
    } else {
        let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

        let format = if (pixel_flags & DDPF_FOURCC) != 0 {
            format_from_fourcc(fourcc)
        } else if (pixel_flags & DDPF_RGB) != 0 {
            detect_uncompressed_format(data)
        } else {
            // YUV, luminance, alpha-only etc.
            DdsFormat::Unknown
        };

        (format, DDS_HEADER_SIZE)
    };

    Ok(DdsInfo {
        format,
        width,
        height,
        mipmap_count,
        data_offset,
    })
}

fn format_from_fourcc(fourcc: u32) -> DdsFormat {
    match fourcc {
        FOURCC_DXT1 => DdsFormat::BC1,
        FOURCC_DXT2 | FOURCC_DXT3 => DdsFormat::BC2,
        FOURCC_DXT4 | FOURCC_DXT5 => DdsFormat::BC3,
        _ => DdsFormat::Unknown,
    }
}

fn format_from_dxgi(dxgi_format: u32) -> DdsFormat {
    match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
            DdsFormat::BC1
        }
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
            DdsFormat::BC2
        }
        DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM | DXGI_FORMAT_BC3_UNORM_SRGB => {
            DdsFormat::BC3
        }
        DXGI_FORMAT_BC6H_TYPELESS | DXGI_FORMAT_BC6H_UF16 | DXGI_FORMAT_BC6H_SF16 => {
            DdsFormat::BC6H
        }
        DXGI_FORMAT_BC7_TYPELESS | DXGI_FORMAT_BC7_UNORM | DXGI_FORMAT_BC7_UNORM_SRGB => {
            DdsFormat::BC7
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS
        | DXGI_FORMAT_R8G8B8A8_UNORM
        | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB
        | DXGI_FORMAT_R8G8B8A8_UINT => DdsFormat::RGBA8888,
        // Signed samples would decode to the wrong colours as unsigned bytes
        DXGI_FORMAT_R8G8B8A8_SNORM | DXGI_FORMAT_R8G8B8A8_SINT => DdsFormat::Unknown,
        DXGI_FORMAT_B8G8R8A8_UNORM
        | DXGI_FORMAT_B8G8R8A8_TYPELESS
        | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => DdsFormat::BGRA8888,
        DXGI_FORMAT_B8G8R8X8_UNORM
        | DXGI_FORMAT_B8G8R8X8_TYPELESS
        | DXGI_FORMAT_B8G8R8X8_UNORM_SRGB => DdsFormat::BGRX8888,
        _ => DdsFormat::Unknown,
    }
}

/// Detects uncompressed DDS format by examining bit masks and bit count
///
/// # Preconditions
///
/// The caller has checked the DDPF_RGB flag and that `data` holds a full legacy header.
fn detect_uncompressed_format(data: &[u8]) -> DdsFormat {
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };

    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };
    let rgb_bit_count = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize) };
    let r_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize) };
    let g_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize) };
    let b_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize) };
    let a_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize) };

    // A zero alpha mask means the fourth byte is padding even if the flag is set
    let has_alpha = (pixel_flags & DDPF_ALPHAPIXELS) != 0 && a_mask != 0;

    match (rgb_bit_count, (r_mask, g_mask, b_mask), has_alpha) {
        (24, (BGR888_RED_MASK, BGR888_GREEN_MASK, BGR888_BLUE_MASK), false) => {
            DdsFormat::BGR888
        }
        (32, (RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK), true)
            if a_mask == RGBA8888_ALPHA_MASK =>
        {
            DdsFormat::RGBA8888
        }
        (32, (RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK), false) => {
            DdsFormat::RGBX8888
        }
        (32, (BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK), true)
            if a_mask == BGRA8888_ALPHA_MASK =>
        {
            DdsFormat::BGRA8888
        }
        (32, (BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK), false) => {
            DdsFormat::BGRX8888
        }
        // Other bit depths and channel layouts are not supported
        _ => DdsFormat::Unknown,
    }
}
