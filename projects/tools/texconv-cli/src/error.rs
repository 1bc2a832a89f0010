use texconv_file_formats_api::BatchError;
use thiserror::Error;

/// Errors that end a command before or instead of a batch report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Batch(#[from] BatchError),
}
