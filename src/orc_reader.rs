use std::{fs::File, io, path::Path};

use arrow::record_batch::{RecordBatch, RecordBatchReader};
use orc_rust::arrow_reader::ArrowReaderBuilder;
use tracing::{debug, info};

use crate::{
    convert::ColumnarDecoder,
    error::{ConversionError, Result},
    table::Table,
};

pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Reads a whole ORC file into memory.
#[derive(Debug, Clone)]
pub struct OrcDecoder {
    batch_size: usize,
}

impl Default for OrcDecoder {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl OrcDecoder {
    /// Rows per decoded batch. Does not change the decoded content.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl ColumnarDecoder for OrcDecoder {
    fn decode(&self, path: &Path) -> Result<Table> {
        let file = open_source(path)?;
        debug!(path = %path.display(), batch_size = self.batch_size, "opened ORC source");

        // Footer and postscript are parsed here; a non-ORC file fails now.
        let reader = ArrowReaderBuilder::try_new(file)
            .map_err(|e| ConversionError::decode(path, e))?
            .with_batch_size(self.batch_size)
            .build();

        // Batches narrow nullability per stripe; rebind them to the file schema.
        let schema = reader.schema();
        let batches = reader
            .map(|batch| batch.and_then(|b| b.with_schema(schema.clone())))
            .collect::<std::result::Result<Vec<RecordBatch>, _>>()
            .map_err(|e| ConversionError::decode(path, e))?;
        let table = Table::try_new(schema, batches).map_err(|e| ConversionError::decode(path, e))?;

        info!(
            path = %path.display(),
            rows = table.num_rows(),
            columns = table.num_columns(),
            batches = table.batches().len(),
            "decoded ORC file"
        );
        Ok(table)
    }
}

fn open_source(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| ConversionError::source_open(path, e))?;
    let meta = file
        .metadata()
        .map_err(|e| ConversionError::source_open(path, e))?;
    if meta.is_dir() {
        return Err(ConversionError::source_open(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }
    Ok(file)
}
