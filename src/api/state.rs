use std::sync::Arc;

use crate::core::{AppConfig, TabularStore};

pub type SharedState = Arc<AppState>;

/// Read-only state shared by every request
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn TabularStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn TabularStore>) -> Self {
        Self { config, store }
    }
}
