//! # Pixel Buffer
//!
//! A [`PixelBuffer`] is a rectangular, row-major array of samples, with an explicit
//! channel count. It is the common currency between decoders, the tone mapper and
//! encoders.
//!
//! ## Memory Layout
//!
//! Samples are interleaved per pixel and pixels are stored row by row, top row first:
//!
//! ```text
//! row 0: [R G B] [R G B] [R G B] ...
//! row 1: [R G B] [R G B] [R G B] ...
//! ```
//!
//! The sample type is generic; decoders of standard containers produce `u8`, HDR
//! decoders produce `f32`.
//!
//! ## Invariants
//!
//! - `width` and `height` are both non-zero.
//! - The channel count is 1, 3 or 4 (see [`Channels`]).
//! - `samples.len() == width * height * channels`.
//!
//! These are checked once in [`PixelBuffer::new`]; every other operation preserves them.

use alloc::vec::Vec;
use core::slice::ChunksExact;
use thiserror::Error;

/// Errors raised when a [`PixelBuffer`] would violate its invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The image has no pixels.
    #[error("Image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    /// Only grayscale, RGB and RGBA layouts are supported.
    #[error("Unsupported channel count: {0} (expected 1, 3 or 4)")]
    InvalidChannelCount(usize),

    /// The sample vector does not match the stated dimensions.
    #[error("Sample count mismatch: expected {expected} samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// `width * height * channels` does not fit in `usize`.
    #[error("Image dimensions {width}x{height} overflow the addressable size")]
    DimensionsOverflow { width: u32, height: u32 },
}

/// Number of interleaved samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channels {
    /// Single luminance channel.
    Gray = 1,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
}

impl Channels {
    /// Returns the number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }

    /// Maps a raw channel count to a [`Channels`] value.
    pub fn from_count(count: usize) -> Result<Self, BufferError> {
        match count {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            _ => Err(BufferError::InvalidChannelCount(count)),
        }
    }
}

/// A rectangular buffer of interleaved samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<T> {
    width: u32,
    height: u32,
    channels: Channels,
    samples: Vec<T>,
}

impl<T: Copy> PixelBuffer<T> {
    /// Creates a buffer from row-major interleaved samples.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Empty`] if either dimension is zero.
    /// - [`BufferError::DimensionsOverflow`] if the sample count cannot be represented.
    /// - [`BufferError::SampleCountMismatch`] if `samples` has the wrong length.
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        samples: Vec<T>,
    ) -> Result<Self, BufferError> {
        let expected = Self::required_samples(width, height, channels)?;
        if samples.len() != expected {
            return Err(BufferError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Creates a buffer with every sample set to `value`.
    pub fn filled(
        width: u32,
        height: u32,
        channels: Channels,
        value: T,
    ) -> Result<Self, BufferError> {
        let len = Self::required_samples(width, height, channels)?;
        Self::new(width, height, channels, alloc::vec![value; len])
    }

    /// Number of samples a buffer of the given shape holds.
    pub fn required_samples(
        width: u32,
        height: u32,
        channels: Channels,
    ) -> Result<usize, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels.count()))
            .ok_or(BufferError::DimensionsOverflow { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Consumes the buffer, returning the raw samples.
    #[inline]
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Number of samples in a single row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels.count()
    }

    /// Returns row `y`, or [`None`] if out of bounds.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        let row_len = self.row_len();
        self.samples.get(y * row_len..(y + 1) * row_len)
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.samples.chunks_exact(self.row_len())
    }

    /// Applies `f` to every sample, producing a buffer of the same shape.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> PixelBuffer<U> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: self.channels,
            samples: self.samples.iter().copied().map(f).collect(),
        }
    }

    /// Mirrors the buffer vertically in place: row `i` swaps with row `height - 1 - i`.
    ///
    /// Column order and channel order within each row are left untouched.
    pub fn flip_vertical(&mut self) {
        let row_len = self.row_len();
        let height = self.height as usize;

        for top in 0..height / 2 {
            let bottom = height - 1 - top;
            // `bottom > top`, so the top row lives entirely in `upper`.
            let (upper, lower) = self.samples.split_at_mut(bottom * row_len);
            upper[top * row_len..(top + 1) * row_len].swap_with_slice(&mut lower[..row_len]);
        }
    }

    /// Returns a vertically mirrored copy, see [`PixelBuffer::flip_vertical`].
    #[cfg(test)]
    pub(crate) fn flipped_vertical(&self) -> Self {
        let mut result = self.clone();
        result.flip_vertical();
        result
    }
}
