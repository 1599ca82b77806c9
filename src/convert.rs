use std::path::Path;

use tracing::{debug, info};

use crate::{
    error::Result, orc_reader::OrcDecoder, parquet_writer::ParquetEncoder, table::Table,
};

/// Capability to read a columnar file into a [`Table`].
pub trait ColumnarDecoder {
    fn decode(&self, path: &Path) -> Result<Table>;
}

/// Capability to write a [`Table`] to a columnar file.
pub trait ColumnarEncoder {
    fn encode(&self, table: &Table, path: &Path) -> Result<()>;
}

/// Reads one file completely and writes it back out in another format.
///
/// The decoded table is passed to the encoder untouched.
#[derive(Debug, Clone, Default)]
pub struct Converter<D = OrcDecoder, E = ParquetEncoder> {
    decoder: D,
    encoder: E,
}

impl<D, E> Converter<D, E>
where
    D: ColumnarDecoder,
    E: ColumnarEncoder,
{
    pub fn new(decoder: D, encoder: E) -> Self {
        Self { decoder, encoder }
    }

    pub fn convert(&self, src: &Path, dst: &Path) -> Result<()> {
        debug!(src = %src.display(), dst = %dst.display(), "starting conversion");
        let table = self.decoder.decode(src)?;
        self.encoder.encode(&table, dst)?;
        info!(
            src = %src.display(),
            dst = %dst.display(),
            rows = table.num_rows(),
            "conversion finished"
        );
        Ok(())
    }
}

/// Converts the ORC file at `src` into a Parquet file at `dst`.
pub fn convert_to_parquet(src: &Path, dst: &Path) -> Result<()> {
    Converter::<OrcDecoder, ParquetEncoder>::default().convert(src, dst)
}
