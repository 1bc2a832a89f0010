#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Batch converter for DDS and HDR textures
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(commands::convert::ConvertCmd),
    Tonemap(commands::tonemap::TonemapCmd),
    Dds2Tga(commands::dds2tga::Dds2TgaCmd),
    Flip(commands::flip::FlipCmd),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: TopLevel = argh::from_env();

    let result = match cli.command {
        Commands::Convert(cmd) => commands::convert::handle_convert_command(cmd),
        Commands::Tonemap(cmd) => commands::tonemap::handle_tonemap_command(cmd),
        Commands::Dds2Tga(cmd) => commands::dds2tga::handle_dds2tga_command(cmd),
        Commands::Flip(cmd) => commands::flip::handle_flip_command(cmd),
    };

    match result {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
