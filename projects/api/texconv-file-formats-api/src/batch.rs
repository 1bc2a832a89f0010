//! The batch driver: enumerates an input directory and converts every accepted file.

use crate::error::{BatchError, ConvertResult};
use crate::format::SourceFormat;
use crate::operations::{convert_file, dds_to_tga, flip_file, tone_map_file};
use crate::record::{BatchReport, ConversionFailure, ConversionRecord, FileOutcome};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

/// What a batch does with each accepted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `.dds` → `<base>.tga`
    DdsToTga,
    /// `.hdr` → tone mapped `<base>.tga` and `<base>.png`
    ToneMap,
    /// Any supported format → vertically flipped copy in the same container
    Flip,
    /// `.dds` → `<base>.tga`, `.hdr` → tone mapped `<base>.png`
    Convert,
}

impl Operation {
    /// Whether files tagged `format` are processed by this operation.
    pub fn accepts(self, format: SourceFormat) -> bool {
        match self {
            Operation::DdsToTga => format == SourceFormat::Dds,
            Operation::ToneMap => format == SourceFormat::Hdr,
            Operation::Flip => true,
            Operation::Convert => matches!(format, SourceFormat::Dds | SourceFormat::Hdr),
        }
    }

    /// Converts one file. `flip` has no effect on [`Operation::Flip`], which always flips.
    pub fn apply(
        self,
        input: &Path,
        output_dir: &Path,
        flip: bool,
    ) -> ConvertResult<ConversionRecord> {
        match self {
            Operation::DdsToTga => dds_to_tga(input, output_dir, flip),
            Operation::ToneMap => tone_map_file(input, output_dir, flip),
            Operation::Flip => flip_file(input, output_dir),
            Operation::Convert => convert_file(input, output_dir, flip),
        }
    }
}

/// Settings for a single batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub operation: Operation,
    /// Flip every image vertically before writing it.
    pub flip: bool,
}

/// Runs a batch without per-file callbacks.
///
/// See [`run_batch_with`].
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    run_batch_with(config, &|_| {})
}

/// Runs a batch, calling `on_file` once per candidate as soon as it finishes.
///
/// With the `multithreaded` feature files are converted in parallel and `on_file` may be
/// called from several threads in any order; the returned report is always in file-name order.
///
/// # Errors
///
/// Fails before converting anything when the input directory is missing, the output directory
/// cannot be created or the input directory cannot be listed. Per-file errors are recorded in
/// [`BatchReport::failed`] instead.
pub fn run_batch_with(
    config: &BatchConfig,
    on_file: &(dyn Fn(&FileOutcome) + Sync),
) -> Result<BatchReport, BatchError> {
    if !config.input_dir.is_dir() {
        return Err(BatchError::InputDirectoryMissing(config.input_dir.clone()));
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::OutputDirectory {
        path: config.output_dir.clone(),
        source,
    })?;

    let candidates = collect_candidates(&config.input_dir, config.operation)?;
    log::info!(
        "Found {} candidate file(s) in {}",
        candidates.len(),
        config.input_dir.display()
    );

    let process = |input: &PathBuf| {
        let outcome = process_file(config, input);
        on_file(&outcome);
        outcome
    };

    #[cfg(feature = "multithreaded")]
    let outcomes: Vec<FileOutcome> = candidates.par_iter().map(process).collect();
    #[cfg(not(feature = "multithreaded"))]
    let outcomes: Vec<FileOutcome> = candidates.iter().map(process).collect();

    Ok(BatchReport::from_outcomes(outcomes))
}

fn process_file(config: &BatchConfig, input: &Path) -> FileOutcome {
    match config.operation.apply(input, &config.output_dir, config.flip) {
        Ok(record) => {
            log::info!("Converted {}", input.display());
            Ok(record)
        }
        Err(error) => {
            log::warn!("Failed to convert {}: {}", input.display(), error);
            Err(ConversionFailure {
                input: input.to_path_buf(),
                error,
            })
        }
    }
}

/// Lists regular files directly inside `input_dir` that `operation` accepts, sorted by name.
fn collect_candidates(input_dir: &Path, operation: Operation) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(input_dir).map_err(|source| BatchError::ReadDirectory {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", input_dir.display(), e);
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            SourceFormat::from_path(path).is_some_and(|format| operation.accepts(format))
        })
        .collect();

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}
