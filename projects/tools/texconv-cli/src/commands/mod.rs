pub mod convert;
pub mod dds2tga;
pub mod flip;
pub mod tonemap;

use crate::error::CliError;
use crate::util::{print_banner, print_outcome, print_summary};
use std::time::Instant;
use texconv_file_formats_api::{run_batch_with, BatchConfig, BatchReport};

/// Runs a batch, printing the banner, a line per file and the summary.
pub fn run_command(title: &str, config: BatchConfig) -> Result<BatchReport, CliError> {
    print_banner(title, &config);

    let start = Instant::now();
    let report = run_batch_with(&config, &print_outcome)?;
    print_summary(&report, start.elapsed());

    Ok(report)
}
