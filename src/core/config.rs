use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
// Skip the header row
pub const DEFAULT_MESSAGES_RANGE: &str = "Sheet1!A2:C";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

/// Configuration that is missing or unusable when a request needs it
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("failed to decode credentials: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("invalid service account credentials: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub pass: String,
    pub google_credentials: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub spreadsheet_messages_id: Option<String>,
    pub port: u16,
    pub sheet_name: String,
    pub messages_range: String,
    pub sheets_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pass: String::new(),
            google_credentials: None,
            spreadsheet_id: None,
            spreadsheet_messages_id: None,
            port: DEFAULT_PORT,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            messages_range: DEFAULT_MESSAGES_RANGE.to_string(),
            sheets_api_url: DEFAULT_SHEETS_API_URL.to_string(),
        }
    }
}

/// Read an env var, treating an empty value the same as an unset one.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Build the config from process environment. Only a malformed
    /// `PORT` is fatal, missing sheet settings are reported when a
    /// request needs them.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match non_empty_var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?,
            None => defaults.port,
        };
        let pass = env::var("PASS").unwrap_or_default();
        if pass.is_empty() {
            tracing::warn!("PASS is not set, only an empty pass will be accepted");
        }

        Ok(Self {
            pass,
            google_credentials: non_empty_var("GOOGLE_CREDENTIALS"),
            spreadsheet_id: non_empty_var("SPREADSHEET_ID"),
            spreadsheet_messages_id: non_empty_var("SPREADSHEET_MESSAGES_ID"),
            port,
            sheet_name: non_empty_var("SHEET_NAME").unwrap_or(defaults.sheet_name),
            messages_range: non_empty_var("MESSAGES_RANGE").unwrap_or(defaults.messages_range),
            sheets_api_url: non_empty_var("SHEETS_API_URL").unwrap_or(defaults.sheets_api_url),
        })
    }

    /// Spreadsheet that receives RSVP submissions
    pub fn rsvp_spreadsheet_id(&self) -> Result<&str, ConfigError> {
        self.spreadsheet_id
            .as_deref()
            .ok_or(ConfigError::Missing("SPREADSHEET_ID"))
    }

    /// Spreadsheet that holds guestbook messages
    pub fn messages_spreadsheet_id(&self) -> Result<&str, ConfigError> {
        self.spreadsheet_messages_id
            .as_deref()
            .ok_or(ConfigError::Missing("SPREADSHEET_MESSAGES_ID"))
    }
}
