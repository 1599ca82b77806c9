use std::{
    fs::File,
    path::Path,
};

use parquet::{
    arrow::ArrowWriter,
    basic::Compression,
    errors::ParquetError,
    file::properties::WriterProperties,
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    convert::ColumnarEncoder,
    error::{ConversionError, Result},
    table::Table,
};

/// Writes a whole [`Table`] to one Parquet file.
#[derive(Debug, Clone)]
pub struct ParquetEncoder {
    properties: WriterProperties,
}

impl Default for ParquetEncoder {
    fn default() -> Self {
        let properties = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        Self { properties }
    }
}

impl ParquetEncoder {
    pub fn with_properties(mut self, properties: WriterProperties) -> Self {
        self.properties = properties;
        self
    }
}

impl ColumnarEncoder for ParquetEncoder {
    fn encode(&self, table: &Table, path: &Path) -> Result<()> {
        let staged = stage_next_to(path)?;
        debug!(staged = %staged.path().display(), "staging parquet output");

        write_table(table, staged.as_file(), self.properties.clone())
            .map_err(|e| ConversionError::destination_write(path, e))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| ConversionError::destination_write(path, e))?;
        set_output_permissions(staged.as_file())
            .map_err(|e| ConversionError::destination_write(path, e))?;

        // Replaces an existing destination.
        staged
            .persist(path)
            .map_err(|e| ConversionError::destination_write(path, e.error))?;

        info!(
            path = %path.display(),
            rows = table.num_rows(),
            columns = table.num_columns(),
            "wrote parquet file"
        );
        Ok(())
    }
}

// Dropping the guard on any error removes the staged file.
fn stage_next_to(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tempfile::Builder::new()
        .prefix(".orc2parquet-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ConversionError::destination_write(path, e))
}

fn write_table(
    table: &Table,
    out: &File,
    properties: WriterProperties,
) -> std::result::Result<(), ParquetError> {
    let mut writer = ArrowWriter::try_new(out, table.schema(), Some(properties))?;
    for batch in table.batches() {
        writer.write(batch)?;
    }
    writer.close()?;
    Ok(())
}

#[cfg(unix)]
fn set_output_permissions(file: &File) -> std::io::Result<()> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};
    file.set_permissions(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &File) -> std::io::Result<()> {
    Ok(())
}
