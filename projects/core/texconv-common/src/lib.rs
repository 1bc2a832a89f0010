//! Code shared between the texconv crates.
//!
//! - [`pixel_buffer`]: the rectangular sample buffer every decoder produces and every
//!   encoder consumes, including the vertical flip.
//! - [`color_565`], [`color_8888`], [`decoded_4x4_block`]: colour primitives used when
//!   expanding block-compressed texture data.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod pixel_buffer;

pub use pixel_buffer::{BufferError, Channels, PixelBuffer};

#[cfg(test)]
mod test_prelude;
