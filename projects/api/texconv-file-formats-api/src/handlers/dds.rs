//! DDS through the in-house decoder; written back as uncompressed RGBA8888.

use super::FormatHandler;
use crate::decoded::DecodedImage;
use crate::error::ConvertResult;
use texconv_dds::{decode_dds, encode_rgba8888_dds};

/// Handler for `.dds` files.
///
/// Block-compressed inputs are not re-compressed; the output is always uncompressed RGBA8888,
/// with radiance tone mapped first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdsHandler;

impl FormatHandler for DdsHandler {
    fn decode(&self, data: &[u8]) -> ConvertResult<DecodedImage> {
        Ok(DecodedImage::Ldr(decode_dds(data)?))
    }

    fn encode(&self, image: &DecodedImage) -> ConvertResult<Vec<u8>> {
        let buffer = image.clone().into_ldr();
        Ok(encode_rgba8888_dds(&buffer))
    }

    fn output_extension(&self) -> &'static str {
        "dds"
    }
}
