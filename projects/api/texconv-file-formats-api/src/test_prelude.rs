//! Common test imports and fixtures for the file format API tests.
#![allow(unused_imports)]

pub use proptest::prelude::*;
pub use rstest::rstest;
pub use tempfile::tempdir;

use texconv_common::{Channels, PixelBuffer};

/// Radiance values that RGBE stores without loss when mixed within one pixel.
pub const RGBE_EXACT_VALUES: [f32; 6] = [0.25, 0.5, 1.0, 2.0, 3.0, 10.0];

/// An 8-bit buffer where every sample differs from its neighbours.
pub fn gradient(width: u32, height: u32, channels: Channels) -> PixelBuffer<u8> {
    let len = PixelBuffer::<u8>::required_samples(width, height, channels).unwrap();
    let samples = (0..len).map(|x| (x * 13 % 256) as u8).collect();
    PixelBuffer::new(width, height, channels, samples).unwrap()
}

/// An RGB radiance buffer built from [`RGBE_EXACT_VALUES`], with distinct rows.
pub fn rgbe_exact_radiance(width: u32, height: u32) -> PixelBuffer<f32> {
    let len = PixelBuffer::<f32>::required_samples(width, height, Channels::Rgb).unwrap();
    let samples = (0..len)
        .map(|x| RGBE_EXACT_VALUES[(x + x / 7) % RGBE_EXACT_VALUES.len()])
        .collect();
    PixelBuffer::new(width, height, Channels::Rgb, samples).unwrap()
}
