//! # texconv File Formats API
//!
//! Format dispatch, per-file conversions and the batch driver behind the `texconv` tool.
//!
//! Files are tagged by extension ([`SourceFormat`]), decoded by the matching
//! [`FormatHandler`] into a [`DecodedImage`], optionally flipped or tone mapped, and
//! re-encoded.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use texconv_file_formats_api::{run_batch, BatchConfig, Operation};
//!
//! let config = BatchConfig {
//!     input_dir: PathBuf::from("path/input/hdr"),
//!     output_dir: PathBuf::from("path/output/hdr2tgaPng"),
//!     operation: Operation::ToneMap,
//!     flip: false,
//! };
//!
//! let report = run_batch(&config)?;
//! for failure in &report.failed {
//!     eprintln!("{}: {}", failure.input.display(), failure.error);
//! }
//! # Ok::<(), texconv_file_formats_api::BatchError>(())
//! ```
//!
//! ## Features
//!
//! - `multithreaded`: convert the files of a batch in parallel with rayon.

pub mod batch;
pub mod decoded;
pub mod error;
pub mod file_io;
pub mod format;
pub mod handlers;
pub mod operations;
pub mod record;

pub use batch::{run_batch, run_batch_with, BatchConfig, Operation};
pub use decoded::DecodedImage;
pub use error::{BatchError, ConvertError, ConvertResult};
pub use format::{SourceFormat, StandardFormat};
pub use handlers::FormatHandler;
pub use record::{BatchReport, ConversionFailure, ConversionRecord, FileOutcome};

#[cfg(test)]
mod test_prelude;
