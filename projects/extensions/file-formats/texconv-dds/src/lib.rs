#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// DDS header parsing.
pub mod dds;
/// Decoding of DDS pixel data to 8-bit pixel buffers.
pub mod decode;
/// Writing of uncompressed DDS files.
pub mod encode;
/// Error types.
pub mod error;

pub use dds::{likely_dds, parse_dds, DdsFormat, DdsInfo};
pub use decode::decode_dds;
pub use encode::encode_rgba8888_dds;
pub use error::DdsError;

#[cfg(test)]
mod test_prelude;
