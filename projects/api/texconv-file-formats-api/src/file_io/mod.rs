//! Memory-mapped file reading and writing.
//!
//! Inputs are mapped read-only and decoded straight from the mapping; outputs are written
//! through a preallocated read-write mapping.

mod error;
pub use error::*;

use crate::error::{ConvertError, ConvertResult};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Maps `path` read-only and passes its contents to `f`.
///
/// # Returns
///
/// The result of `f` along with the size of the file in bytes.
///
/// # Errors
///
/// [`ConvertError::EmptyFile`] for zero-length files (these cannot be mapped),
/// otherwise any mapping error or the error returned by `f`.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> ConvertResult<T>,
) -> ConvertResult<(T, u64)> {
    let input_handle = ReadOnlyFileHandle::open(path)?;
    let input_size = input_handle.size()? as usize;
    if input_size == 0 {
        return Err(ConvertError::EmptyFile);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    let result = f(input_mapping.as_slice())?;
    Ok((result, input_size as u64))
}

/// Writes `data` to `path`, replacing any existing file.
///
/// The parent directory must exist.
pub fn write_file(path: &Path, data: &[u8]) -> ConvertResult<()> {
    // A zero length mapping is not valid on every platform.
    if data.is_empty() {
        std::fs::write(path, data)?;
        return Ok(());
    }

    // Preallocation does not shrink a longer file left over from a previous run.
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let output_handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, data.len())?;
    output_mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
