//! Per-file outcomes and the report of a batch.

use crate::error::ConvertError;
use std::path::PathBuf;

/// A successfully converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    pub input: PathBuf,
    /// Every file written for this input, in the order they were written.
    pub outputs: Vec<PathBuf>,
    /// Size of the input file in bytes.
    pub input_len: u64,
}

/// A file that could not be converted.
#[derive(Debug)]
pub struct ConversionFailure {
    pub input: PathBuf,
    pub error: ConvertError,
}

/// Outcome of a single candidate file.
pub type FileOutcome = Result<ConversionRecord, ConversionFailure>;

/// Successes and failures of a batch, each in file-name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConversionRecord>,
    pub failed: Vec<ConversionFailure>,
}

impl BatchReport {
    /// Splits outcomes into the two lists, keeping their order.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FileOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match outcome {
                Ok(record) => report.converted.push(record),
                Err(failure) => report.failed.push(failure),
            }
        }
        report
    }

    /// True when no file failed; an empty batch is a success.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total size of the inputs that were converted.
    pub fn bytes_processed(&self) -> u64 {
        self.converted.iter().map(|record| record.input_len).sum()
    }

    pub fn total_files(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}
