//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use serde_json::Value;

use rsvp::api::AppState;
use rsvp::api::app;
use rsvp::core::{AppConfig, Row, StoreError, TabularStore};

pub const TEST_PASS: &str = "open-sesame";
pub const RSVP_SHEET: &str = "rsvp-sheet-id";
pub const MESSAGES_SHEET: &str = "messages-sheet-id";

/// A single call made against `RecordingStore`
#[derive(Clone, Debug, PartialEq)]
pub enum StoreCall {
    Read {
        spreadsheet_id: String,
        range: String,
    },
    Append {
        spreadsheet_id: String,
        sheet_name: String,
        rows: Vec<Row>,
    },
}

/// In-memory `TabularStore` that records every call and answers reads
/// with canned rows.
#[derive(Default)]
pub struct RecordingStore {
    rows: Vec<Row>,
    failure: Option<String>,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Every call fails as if the remote service was unreachable
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn result(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TabularStore for RecordingStore {
    async fn read_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>, StoreError> {
        self.calls.lock().unwrap().push(StoreCall::Read {
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
        });
        self.result()?;
        Ok(self.rows.clone())
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        rows: Vec<Row>,
    ) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(StoreCall::Append {
            spreadsheet_id: spreadsheet_id.to_string(),
            sheet_name: sheet_name.to_string(),
            rows,
        });
        self.result()
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        pass: String::from(TEST_PASS),
        google_credentials: Some(String::from("unused-in-tests")),
        spreadsheet_id: Some(String::from(RSVP_SHEET)),
        spreadsheet_messages_id: Some(String::from(MESSAGES_SHEET)),
        ..Default::default()
    }
}

/// Creates a test application router backed by `store`
pub fn test_app_with(config: AppConfig, store: Arc<RecordingStore>) -> Router {
    let app_state = AppState::new(config, store);
    app(Arc::new(app_state))
}

/// Creates a test application router with the default test config
pub fn test_app(store: Arc<RecordingStore>) -> Router {
    test_app_with(test_config(), store)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).unwrap()
}
