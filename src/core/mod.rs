pub mod config;
pub use config::{AppConfig, ConfigError};
pub mod store;
pub use store::{Row, StoreError, TabularStore};
