//! Error types for DDS decoding.

use crate::dds::DdsFormat;
use texconv_common::BufferError;
use thiserror::Error;

/// Errors raised while reading a DDS file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DdsError {
    /// Missing 'DDS ' magic, or the data is shorter than a DDS header.
    #[error("Not a DDS file")]
    NotADds,

    /// The file parses, but its pixel format cannot be decoded.
    #[error("{0:?} DDS format is not supported")]
    UnsupportedFormat(DdsFormat),

    /// The header announces more data than the file holds.
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort { required: usize, actual: usize },

    /// The decoded image does not form a valid pixel buffer (e.g. zero dimensions).
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
