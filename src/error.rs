use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use orc_rust::error::OrcError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Top-level error type for a conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Wrong number of arguments or an unrecognized flag
    #[error("{0}")]
    Usage(String),

    /// Source file missing, unreadable, or not a regular file
    #[error("cannot open source '{}': {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source opened but its content is not readable ORC
    #[error("cannot decode ORC file '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeFailure,
    },

    /// Destination could not be created or written
    #[error("cannot write parquet file '{}': {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: WriteFailure,
    },
}

/// Underlying cause of a [`ConversionError::Decode`]
#[derive(Error, Debug)]
pub enum DecodeFailure {
    /// File footer, postscript or stripe metadata rejected by the ORC reader
    #[error(transparent)]
    Orc(#[from] OrcError),

    /// Stripe data could not be turned into Arrow arrays
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

/// Underlying cause of a [`ConversionError::DestinationWrite`]
#[derive(Error, Debug)]
pub enum WriteFailure {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parquet(#[from] ParquetError),
}

impl ConversionError {
    pub fn source_open(path: &Path, source: io::Error) -> Self {
        ConversionError::SourceOpen {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn decode(path: &Path, source: impl Into<DecodeFailure>) -> Self {
        ConversionError::Decode {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub fn destination_write(path: &Path, source: impl Into<WriteFailure>) -> Self {
        ConversionError::DestinationWrite {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// True when the error was raised before any file was touched
    pub fn is_usage(&self) -> bool {
        matches!(self, ConversionError::Usage(_))
    }

    /// Process exit status for this error. Every failure is fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_is_reported_verbatim() {
        let err = ConversionError::Usage("Usage: orc2parquet <input.orc> <output.parquet>".into());
        assert!(err.is_usage());
        assert_eq!(
            err.to_string(),
            "Usage: orc2parquet <input.orc> <output.parquet>"
        );
    }

    #[test]
    fn test_source_open_names_path() {
        let err = ConversionError::source_open(
            Path::new("missing.orc"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 1);
        let msg = err.to_string();
        assert!(msg.contains("missing.orc"), "{msg}");
        assert!(msg.contains("No such file"), "{msg}");
    }

    #[test]
    fn test_write_failure_keeps_source_chain() {
        let err = ConversionError::destination_write(
            Path::new("out/x.parquet"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = std::error::Error::source(&err).expect("has source");
        assert_eq!(source.to_string(), "denied");
        assert!(matches!(
            err,
            ConversionError::DestinationWrite {
                source: WriteFailure::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_decode_from_arrow_error() {
        let err = ConversionError::decode(
            Path::new("bad.orc"),
            ArrowError::ParseError("bad stripe".into()),
        );
        assert!(err.to_string().contains("bad.orc"));
        assert!(err.to_string().contains("bad stripe"));
        assert_eq!(err.exit_code(), 1);
    }
}
