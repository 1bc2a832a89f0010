use super::run_command;
use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use texconv_file_formats_api::{BatchConfig, BatchReport, Operation};

#[derive(FromArgs, Debug)]
/// Flip DDS, HDR, TGA, PNG and BMP files vertically, keeping their container
#[argh(subcommand, name = "flip")]
pub struct FlipCmd {
    /// input directory path [default: path/output/flipY]
    #[argh(option, short = 'i', default = "PathBuf::from(\"path/output/flipY\")")]
    pub input: PathBuf,

    /// output directory path, created if missing [default: path/output/flipYed]
    #[argh(option, short = 'o', default = "PathBuf::from(\"path/output/flipYed\")")]
    pub output: PathBuf,
}

pub fn handle_flip_command(cmd: FlipCmd) -> Result<BatchReport, CliError> {
    let config = BatchConfig {
        input_dir: cmd.input,
        output_dir: cmd.output,
        operation: Operation::Flip,
        flip: true,
    };
    run_command("Vertical Flip", config)
}
