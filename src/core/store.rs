//! Row-oriented storage used by the API handlers
//!
//! Rows are positional: the Nth field of a record is always the Nth
//! cell. Nothing here binds cells to header names, so reordering the
//! columns of a backing sheet silently shifts every field.

use async_trait::async_trait;
use serde_json::Value;

use super::config::ConfigError;

/// One record in a tabular store, an ordered list of untyped cells
pub type Row = Vec<Value>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Unavailable(String),
}

/// Read and append access to named ranges of a spreadsheet-like store.
///
/// Rows are only ever appended, never updated or deleted.
#[async_trait]
pub trait TabularStore: Send + Sync {
    async fn read_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>, StoreError>;

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        rows: Vec<Row>,
    ) -> Result<(), StoreError>;
}

/// Text of the cell at `idx`. Missing and non-string cells read as an
/// empty string.
pub fn cell_text(row: &[Value], idx: usize) -> String {
    row.get(idx)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
