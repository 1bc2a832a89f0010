use super::Throughput;
use bytesize::ByteSize;
use std::path::Path;
use std::time::Duration;
use texconv_file_formats_api::{BatchConfig, BatchReport, FileOutcome};

pub fn print_banner(title: &str, config: &BatchConfig) {
    println!("=== {title} ===");
    println!("Input:  {}", config.input_dir.display());
    println!("Output: {}", config.output_dir.display());
    println!("Flip:   {}\n", if config.flip { "yes" } else { "no" });
}

/// Prints one status line as soon as a file finishes.
pub fn print_outcome(outcome: &FileOutcome) {
    match outcome {
        Ok(record) => println!("[ok]     {}", file_name(&record.input)),
        Err(failure) => eprintln!("[failed] {}: {}", file_name(&failure.input), failure.error),
    }
}

pub fn print_summary(report: &BatchReport, elapsed: Duration) {
    let bytes = report.bytes_processed();

    println!("\n=== Summary ===");
    println!("Converted: {}", report.converted.len());
    for record in &report.converted {
        let outputs: Vec<_> = record.outputs.iter().map(|path| file_name(path)).collect();
        println!("  {} -> {}", file_name(&record.input), outputs.join(", "));
    }

    println!("Failed: {}", report.failed.len());
    for failure in &report.failed {
        println!("  {}: {}", file_name(&failure.input), failure.error);
    }

    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(bytes));
    println!("Throughput: {}", Throughput::from_elapsed(bytes, elapsed));
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
