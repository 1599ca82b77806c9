use std::process::ExitCode;

use orc2parquet::{cli::Cli, convert_to_parquet, logging, ConversionError};
use tracing::debug;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage() {
                println!("{e}");
            } else {
                debug!(error = ?e, "conversion failed");
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ConversionError> {
    let cli = Cli::parse_args(std::env::args_os())?;
    convert_to_parquet(&cli.src, &cli.dst)?;
    println!("Converted {} to {}", cli.src.display(), cli.dst.display());
    Ok(())
}
