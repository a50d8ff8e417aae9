//! Public types for the RSVP submit API
use serde::{Deserialize, Serialize};

use crate::core::Row;

/// An RSVP form submission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    pub name: String,
    pub email: String,
    pub attendance: String,
    pub plus_one: String,
    pub plus_one_name: String,
    pub food: String,
}

impl RsvpEntry {
    pub fn into_row(self) -> Row {
        vec![
            self.name.into(),
            self.email.into(),
            self.attendance.into(),
            self.plus_one.into(),
            self.plus_one_name.into(),
            self.food.into(),
        ]
    }
}
