//! Backend errors raised by memory-mapped file I/O.

use thiserror::Error;

/// Errors from the `lightweight-mmap` backend.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}
