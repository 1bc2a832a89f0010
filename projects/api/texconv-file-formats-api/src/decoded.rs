//! The in-memory image passed between decoders, transforms and encoders.

use crate::error::{ConvertError, ConvertResult};
use image::{DynamicImage, ImageBuffer, Pixel};
use texconv_common::{Channels, PixelBuffer};
use texconv_tonemap::tone_map_with_stats;

/// A decoded image, either 8-bit or floating point radiance.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    /// 8-bit samples from DDS and standard containers.
    Ldr(PixelBuffer<u8>),
    /// Linear radiance samples from HDR sources.
    Hdr(PixelBuffer<f32>),
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        match self {
            DecodedImage::Ldr(buffer) => buffer.width(),
            DecodedImage::Hdr(buffer) => buffer.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            DecodedImage::Ldr(buffer) => buffer.height(),
            DecodedImage::Hdr(buffer) => buffer.height(),
        }
    }

    pub fn channels(&self) -> Channels {
        match self {
            DecodedImage::Ldr(buffer) => buffer.channels(),
            DecodedImage::Hdr(buffer) => buffer.channels(),
        }
    }

    /// Reverses the row order in place.
    pub fn flip_vertical(&mut self) {
        match self {
            DecodedImage::Ldr(buffer) => buffer.flip_vertical(),
            DecodedImage::Hdr(buffer) => buffer.flip_vertical(),
        }
    }

    /// Returns 8-bit samples, tone mapping radiance if needed.
    pub fn into_ldr(self) -> PixelBuffer<u8> {
        match self {
            DecodedImage::Ldr(buffer) => buffer,
            DecodedImage::Hdr(buffer) => {
                let (ldr, stats) = tone_map_with_stats(&buffer);
                log::debug!(
                    "Tone mapped {}x{} image: peak {}, {} negative, {} non-finite",
                    buffer.width(),
                    buffer.height(),
                    stats.peak,
                    stats.clipped_samples,
                    stats.non_finite_samples
                );
                ldr
            }
        }
    }

    /// Returns RGB radiance; 8-bit samples are scaled to `[0, 1]`, alpha is dropped and gray is
    /// replicated.
    pub fn into_rgb_radiance(self) -> ConvertResult<PixelBuffer<f32>> {
        let buffer = match self {
            DecodedImage::Hdr(buffer) => buffer,
            DecodedImage::Ldr(buffer) => buffer.map(|sample| sample as f32 / 255.0),
        };
        to_rgb(buffer)
    }

    /// Converts an image decoded by the `image` crate.
    ///
    /// 8-bit gray, RGB and RGBA are kept as is, 32-bit float images become [`DecodedImage::Hdr`],
    /// everything else is converted to 8-bit RGB or RGBA depending on alpha.
    pub fn from_dynamic(image: DynamicImage) -> ConvertResult<Self> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ConvertError::EmptyImage);
        }

        let decoded = match image {
            DynamicImage::ImageLuma8(buffer) => DecodedImage::Ldr(PixelBuffer::new(
                width,
                height,
                Channels::Gray,
                buffer.into_raw(),
            )?),
            DynamicImage::ImageRgb8(buffer) => DecodedImage::Ldr(PixelBuffer::new(
                width,
                height,
                Channels::Rgb,
                buffer.into_raw(),
            )?),
            DynamicImage::ImageRgba8(buffer) => DecodedImage::Ldr(PixelBuffer::new(
                width,
                height,
                Channels::Rgba,
                buffer.into_raw(),
            )?),
            DynamicImage::ImageRgb32F(buffer) => DecodedImage::Hdr(PixelBuffer::new(
                width,
                height,
                Channels::Rgb,
                buffer.into_raw(),
            )?),
            DynamicImage::ImageRgba32F(buffer) => DecodedImage::Hdr(PixelBuffer::new(
                width,
                height,
                Channels::Rgba,
                buffer.into_raw(),
            )?),
            other if other.color().has_alpha() => DecodedImage::Ldr(PixelBuffer::new(
                width,
                height,
                Channels::Rgba,
                other.into_rgba8().into_raw(),
            )?),
            other => DecodedImage::Ldr(PixelBuffer::new(
                width,
                height,
                Channels::Rgb,
                other.into_rgb8().into_raw(),
            )?),
        };

        Ok(decoded)
    }

    /// Converts to an 8-bit `image` buffer for the standard encoders, tone mapping radiance.
    pub fn into_dynamic_ldr(self) -> ConvertResult<DynamicImage> {
        let buffer = self.into_ldr();
        let (width, height) = (buffer.width(), buffer.height());

        Ok(match buffer.channels() {
            Channels::Gray => {
                DynamicImage::ImageLuma8(image_buffer(width, height, buffer.into_samples())?)
            }
            Channels::Rgb => {
                DynamicImage::ImageRgb8(image_buffer(width, height, buffer.into_samples())?)
            }
            Channels::Rgba => {
                DynamicImage::ImageRgba8(image_buffer(width, height, buffer.into_samples())?)
            }
        })
    }
}

/// Wraps 8-bit samples in an `image` buffer of pixel type `P`.
fn image_buffer<P: Pixel<Subpixel = u8>>(
    width: u32,
    height: u32,
    samples: Vec<u8>,
) -> ConvertResult<ImageBuffer<P, Vec<u8>>> {
    let len = samples.len();
    ImageBuffer::from_raw(width, height, samples).ok_or(ConvertError::ImageLayout {
        width,
        height,
        samples: len,
    })
}

/// Drops alpha or replicates gray so a radiance buffer has exactly 3 channels.
fn to_rgb(buffer: PixelBuffer<f32>) -> ConvertResult<PixelBuffer<f32>> {
    let (width, height) = (buffer.width(), buffer.height());
    let samples: Vec<f32> = match buffer.channels() {
        Channels::Rgb => return Ok(buffer),
        Channels::Rgba => buffer
            .samples()
            .chunks_exact(4)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect(),
        Channels::Gray => buffer
            .samples()
            .iter()
            .flat_map(|&value| [value, value, value])
            .collect(),
    };

    Ok(PixelBuffer::new(width, height, Channels::Rgb, samples)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn from_dynamic_keeps_8_bit_layouts() {
        let gray = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(2, 3, Luma([7u8])));
        let decoded = DecodedImage::from_dynamic(gray).unwrap();
        assert_eq!(decoded.channels(), Channels::Gray);
        assert_eq!((decoded.width(), decoded.height()), (2, 3));

        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(1, 1, Rgba([1u8, 2, 3, 4])));
        let DecodedImage::Ldr(buffer) = DecodedImage::from_dynamic(rgba).unwrap() else {
            panic!("expected an 8-bit image");
        };
        assert_eq!(buffer.samples(), &[1, 2, 3, 4]);
    }

    #[test]
    fn from_dynamic_keeps_radiance() {
        let pixel = Rgb([0.5f32, 2.0, 8.0]);
        let hdr = DynamicImage::ImageRgb32F(ImageBuffer::from_pixel(2, 2, pixel));
        let DecodedImage::Hdr(buffer) = DecodedImage::from_dynamic(hdr).unwrap() else {
            panic!("expected a radiance image");
        };
        assert_eq!(&buffer.samples()[..3], &[0.5, 2.0, 8.0]);
    }

    #[test]
    fn from_dynamic_converts_16_bit_to_8_bit() {
        let pixel = Rgb([65535u16, 0, 65535]);
        let wide = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(1, 1, pixel));
        let DecodedImage::Ldr(buffer) = DecodedImage::from_dynamic(wide).unwrap() else {
            panic!("expected an 8-bit image");
        };
        assert_eq!(buffer.channels(), Channels::Rgb);
        assert_eq!(buffer.samples(), &[255, 0, 255]);
    }

    #[test]
    fn from_dynamic_rejects_empty_images() {
        let empty = DynamicImage::new_rgb8(0, 4);
        assert!(matches!(
            DecodedImage::from_dynamic(empty),
            Err(ConvertError::EmptyImage)
        ));
    }

    #[test]
    fn into_dynamic_ldr_tone_maps_radiance() {
        let hdr = PixelBuffer::new(2, 1, Channels::Rgb, vec![4.0f32, 4.0, 4.0, 0.0, 0.0, 0.0])
            .unwrap();
        let image = DecodedImage::Hdr(hdr).into_dynamic_ldr().unwrap();
        let rgb = image.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([0, 0, 0]));
    }

    #[rstest]
    #[case(Channels::Gray)]
    #[case(Channels::Rgb)]
    #[case(Channels::Rgba)]
    fn into_dynamic_ldr_keeps_layout(#[case] channels: Channels) {
        let buffer = gradient(3, 2, channels);
        let image = DecodedImage::Ldr(buffer.clone()).into_dynamic_ldr().unwrap();
        assert_eq!(image.color().channel_count() as usize, channels.count());
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.as_bytes(), buffer.samples());
    }

    #[test]
    fn image_buffer_reports_short_samples() {
        let result = image_buffer::<Rgb<u8>>(2, 2, vec![0; 11]);
        assert!(matches!(
            result,
            Err(ConvertError::ImageLayout {
                width: 2,
                height: 2,
                samples: 11
            })
        ));
    }

    #[test]
    fn into_rgb_radiance_normalizes_and_drops_alpha() {
        let ldr = PixelBuffer::new(1, 1, Channels::Rgba, vec![255u8, 0, 51, 9]).unwrap();
        let rgb = DecodedImage::Ldr(ldr).into_rgb_radiance().unwrap();
        assert_eq!(rgb.channels(), Channels::Rgb);
        assert_eq!(rgb.samples(), &[1.0, 0.0, 0.2]);
    }

    #[test]
    fn flip_vertical_applies_to_either_variant() {
        let ldr = PixelBuffer::new(1, 2, Channels::Gray, vec![1u8, 2]).unwrap();
        let mut image = DecodedImage::Ldr(ldr);
        image.flip_vertical();
        assert_eq!(image.into_ldr().samples(), &[2, 1]);
    }
}
