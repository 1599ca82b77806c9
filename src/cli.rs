use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::error::ConversionError;

pub const USAGE: &str = "Usage: orc2parquet input.orc output.parquet";

// Exactly two paths and nothing else: no help or version flags, and a path
// may start with '-'.
#[derive(Parser, Debug)]
#[command(name = "orc2parquet")]
#[command(about = "Converts ORC files into parquet.", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// ORC file to read
    #[arg(value_name = "INPUT FILE", allow_hyphen_values = true)]
    pub src: PathBuf,

    /// Parquet file to write
    #[arg(value_name = "OUTPUT FILE", allow_hyphen_values = true)]
    pub dst: PathBuf,
}

impl Cli {
    /// Parses `args` (program name first). Anything but two paths is a
    /// [`ConversionError::Usage`].
    pub fn parse_args<I, T>(args: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|_| ConversionError::Usage(USAGE.to_string()))
    }
}
