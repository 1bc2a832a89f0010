use super::run_command;
use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use texconv_file_formats_api::{BatchConfig, BatchReport, Operation};

#[derive(FromArgs, Debug)]
/// Convert DDS files to TGA
#[argh(subcommand, name = "dds2tga")]
pub struct Dds2TgaCmd {
    /// input directory path [default: path/input/dds]
    #[argh(option, short = 'i', default = "PathBuf::from(\"path/input/dds\")")]
    pub input: PathBuf,

    /// output directory path, created if missing [default: path/output/dds2tga]
    #[argh(option, short = 'o', default = "PathBuf::from(\"path/output/dds2tga\")")]
    pub output: PathBuf,

    /// flip images vertically before writing them
    #[argh(switch, short = 'f')]
    pub flip: bool,
}

pub fn handle_dds2tga_command(cmd: Dds2TgaCmd) -> Result<BatchReport, CliError> {
    let config = BatchConfig {
        input_dir: cmd.input,
        output_dir: cmd.output,
        operation: Operation::DdsToTga,
        flip: cmd.flip,
    };
    run_command("DDS to TGA Conversion", config)
}
