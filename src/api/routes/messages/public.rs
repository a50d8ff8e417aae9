//! Public types for the guestbook messages API
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Row;
use crate::core::store::cell_text;

/// One guestbook entry, stored as the columns `name, message, date`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageRow {
    pub name: String,
    pub message: String,
    pub date: String,
}

impl MessageRow {
    /// Read a message back from a stored row. Missing trailing cells
    /// become empty strings.
    pub fn from_row(row: &[Value]) -> Self {
        Self {
            name: cell_text(row, 0),
            message: cell_text(row, 1),
            date: cell_text(row, 2),
        }
    }

    pub fn into_row(self) -> Row {
        vec![self.name.into(), self.message.into(), self.date.into()]
    }
}
