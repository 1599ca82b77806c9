//! Converts ORC files into Parquet.

pub mod cli;
pub mod convert;
pub mod error;
pub mod logging;
pub mod orc_reader;
pub mod parquet_writer;
pub mod table;

#[cfg(test)]
mod test_util;

pub use convert::{convert_to_parquet, ColumnarDecoder, ColumnarEncoder, Converter};
pub use error::{ConversionError, DecodeFailure, WriteFailure};
pub use orc_reader::OrcDecoder;
pub use parquet_writer::ParquetEncoder;
pub use table::Table;
