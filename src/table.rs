use arrow::{
    compute::concat_batches,
    datatypes::SchemaRef,
    error::ArrowError,
    record_batch::RecordBatch,
};

/// A schema plus every row of a file, held as Arrow record batches.
///
/// Built once by a decoder and only read afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    /// Fails if any batch does not carry `schema`.
    pub fn try_new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Result<Self, ArrowError> {
        if let Some(pos) = batches.iter().position(|b| b.schema() != schema) {
            return Err(ArrowError::SchemaError(format!(
                "batch {pos} does not match table schema"
            )));
        }
        Ok(Self { schema, batches })
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Collapses the table into a single batch.
    pub fn concat(&self) -> Result<RecordBatch, ArrowError> {
        concat_batches(&self.schema, &self.batches)
    }
}
