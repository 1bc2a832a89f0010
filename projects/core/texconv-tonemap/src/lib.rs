//! Tone mapping of HDR radiance buffers to 8-bit samples.
//!
//! The curve is fixed:
//!
//! 1. Clip every sample to a minimum of `0.0` (there is no upper clip).
//! 2. Find the global maximum over all pixels and channels.
//! 3. Divide every sample by that maximum, landing in `[0, 1]`.
//! 4. Apply gamma correction, `v^(1 / 2.2)`.
//! 5. Scale by 255 and truncate to `u8`.
//!
//! # Degenerate input
//!
//! - An all-zero (or all-negative) buffer has a maximum of `0.0`. It is treated as already
//!   normalized and maps to all zeros, never to NaN.
//! - Non-finite samples (`NaN`, `±inf`) carry no usable magnitude and are treated as `0.0`
//!   before the maximum is taken.
//!
//! # Example
//!
//! ```
//! use texconv_common::{Channels, PixelBuffer};
//! use texconv_tonemap::tone_map;
//!
//! let hdr = PixelBuffer::new(2, 1, Channels::Gray, vec![4.0f32, 2.0]).unwrap();
//! let ldr = tone_map(&hdr);
//! assert_eq!(ldr.samples(), &[255, 186]);
//! ```

use texconv_common::PixelBuffer;

/// Display gamma applied by [`tone_map`].
pub const GAMMA: f32 = 2.2;

/// Facts gathered while tone mapping a buffer, useful for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneMapStats {
    /// Global maximum after clipping; `0.0` for an all-black input.
    pub peak: f32,
    /// Number of finite samples raised from below zero to zero.
    pub clipped_samples: usize,
    /// Number of `NaN` / infinite samples replaced with zero.
    pub non_finite_samples: usize,
}

/// Tone maps an HDR buffer into an 8-bit buffer of the same shape.
#[inline]
pub fn tone_map(hdr: &PixelBuffer<f32>) -> PixelBuffer<u8> {
    tone_map_with_stats(hdr).0
}

/// Same as [`tone_map`], also returning the [`ToneMapStats`] of the input.
pub fn tone_map_with_stats(hdr: &PixelBuffer<f32>) -> (PixelBuffer<u8>, ToneMapStats) {
    let mut stats = ToneMapStats::default();
    for &sample in hdr.samples() {
        if !sample.is_finite() {
            stats.non_finite_samples += 1;
        } else if sample < 0.0 {
            stats.clipped_samples += 1;
        }
        stats.peak = stats.peak.max(clip_sample(sample));
    }

    let peak = stats.peak;
    let ldr = hdr.map(|sample| quantize_sample(clip_sample(sample), peak));
    (ldr, stats)
}

/// Floors a radiance sample at zero, discarding non-finite values.
#[inline(always)]
pub fn clip_sample(sample: f32) -> f32 {
    if sample.is_finite() {
        sample.max(0.0)
    } else {
        0.0
    }
}

/// Maps a clipped sample to 8 bits given the buffer's global `peak`.
///
/// `sample` must already be clipped (finite, `0.0 <= sample <= peak`).
#[inline(always)]
pub fn quantize_sample(sample: f32, peak: f32) -> u8 {
    if peak <= 0.0 {
        return 0;
    }

    let normalized = sample / peak;
    let corrected = normalized.powf(1.0 / GAMMA);
    // `as` truncates toward zero and saturates, matching an 8-bit cast of the scaled value.
    (corrected * 255.0) as u8
}
