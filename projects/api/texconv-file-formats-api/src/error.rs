//! Error types for conversions and batches.

use crate::file_io::FileIoError;
use std::io;
use std::path::PathBuf;
use texconv_common::BufferError;
use texconv_dds::DdsError;
use thiserror::Error;

/// Result type for single-file conversions
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that fail the conversion of a single file.
///
/// These never abort a batch; the driver records them as a [`ConversionFailure`].
///
/// [`ConversionFailure`]: crate::record::ConversionFailure
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Memory mapping a file failed
    #[error("File I/O error: {0}")]
    FileIo(#[from] FileIoError),

    /// The input file has zero length
    #[error("File is empty")]
    EmptyFile,

    /// The input decoded to an image without pixels
    #[error("Decoded image is empty")]
    EmptyImage,

    /// The DDS decoder rejected the input
    #[error("DDS error: {0}")]
    Dds(#[from] DdsError),

    /// The image codec failed to decode or encode
    #[error("Codec error: {0}")]
    Image(#[from] image::ImageError),

    /// A decoded buffer violated the pixel buffer invariants
    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),

    /// Samples could not be laid out as an `image` buffer of the given size
    #[error("{samples} samples do not fill a {width}x{height} image")]
    ImageLayout {
        width: u32,
        height: u32,
        samples: usize,
    },

    /// The file extension maps to no known format
    #[error("Unsupported file extension: '{0}'")]
    UnsupportedExtension(String),
}

// Direct From implementations for the mmap backend errors used with ? in file operations
impl From<lightweight_mmap::handles::HandleOpenError> for ConvertError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::FileIo(FileIoError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for ConvertError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::FileIo(FileIoError::MemoryMapping(e))
    }
}

/// Errors that stop a batch before any file is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input directory does not exist or is not a directory
    #[error("Input directory does not exist: {}", .0.display())]
    InputDirectoryMissing(PathBuf),

    /// The output directory could not be created
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input directory could not be listed
    #[error("Failed to read input directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
