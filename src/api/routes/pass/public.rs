//! Public types for the pass API
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PassRequest {
    pub pass: String,
}
