//! Radiance RGBE (`.hdr`) through the `image` codec.
//!
//! Re-encoding samples that were decoded from RGBE reproduces them exactly, so a flip of an
//! HDR file keeps its full dynamic range.

use super::FormatHandler;
use crate::decoded::DecodedImage;
use crate::error::ConvertResult;
use image::codecs::hdr::HdrEncoder;
use image::{ImageFormat, Rgb};
use texconv_common::{Channels, PixelBuffer};

/// Handler for `.hdr` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct HdrHandler;

impl FormatHandler for HdrHandler {
    fn decode(&self, data: &[u8]) -> ConvertResult<DecodedImage> {
        let image = image::load_from_memory_with_format(data, ImageFormat::Hdr)?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(crate::error::ConvertError::EmptyImage);
        }

        let samples = image.into_rgb32f().into_raw();
        Ok(DecodedImage::Hdr(PixelBuffer::new(
            width,
            height,
            Channels::Rgb,
            samples,
        )?))
    }

    fn encode(&self, image: &DecodedImage) -> ConvertResult<Vec<u8>> {
        let buffer = image.clone().into_rgb_radiance()?;
        let pixels: Vec<Rgb<f32>> = buffer
            .samples()
            .chunks_exact(3)
            .map(|pixel| Rgb([pixel[0], pixel[1], pixel[2]]))
            .collect();

        let mut output = Vec::new();
        HdrEncoder::new(&mut output).encode(
            &pixels,
            buffer.width() as usize,
            buffer.height() as usize,
        )?;
        Ok(output)
    }

    fn output_extension(&self) -> &'static str {
        "hdr"
    }
}
