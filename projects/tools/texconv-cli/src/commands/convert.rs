use super::run_command;
use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use texconv_file_formats_api::{BatchConfig, BatchReport, Operation};

#[derive(FromArgs, Debug)]
/// Convert DDS files to TGA and HDR files to tone mapped PNG
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input directory path [default: path/input]
    #[argh(option, short = 'i', default = "PathBuf::from(\"path/input\")")]
    pub input: PathBuf,

    /// output directory path, created if missing [default: path/output]
    #[argh(option, short = 'o', default = "PathBuf::from(\"path/output\")")]
    pub output: PathBuf,

    /// flip images vertically before writing them
    #[argh(switch, short = 'f')]
    pub flip: bool,
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<BatchReport, CliError> {
    let config = BatchConfig {
        input_dir: cmd.input,
        output_dir: cmd.output,
        operation: Operation::Convert,
        flip: cmd.flip,
    };
    run_command("DDS/HDR Conversion", config)
}
