use super::run_command;
use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use texconv_file_formats_api::{BatchConfig, BatchReport, Operation};

#[derive(FromArgs, Debug)]
/// Tone map HDR files to TGA and PNG
#[argh(subcommand, name = "tonemap")]
pub struct TonemapCmd {
    /// input directory path [default: path/input/hdr]
    #[argh(option, short = 'i', default = "PathBuf::from(\"path/input/hdr\")")]
    pub input: PathBuf,

    /// output directory path, created if missing [default: path/output/hdr2tgaPng]
    #[argh(option, short = 'o', default = "PathBuf::from(\"path/output/hdr2tgaPng\")")]
    pub output: PathBuf,

    /// flip images vertically before writing them
    #[argh(switch, short = 'f')]
    pub flip: bool,
}

pub fn handle_tonemap_command(cmd: TonemapCmd) -> Result<BatchReport, CliError> {
    let config = BatchConfig {
        input_dir: cmd.input,
        output_dir: cmd.output,
        operation: Operation::ToneMap,
        flip: cmd.flip,
    };
    run_command("HDR Tone Mapping", config)
}
