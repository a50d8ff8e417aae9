//! Service account credentials for Google APIs
//!
//! Credentials arrive as a base64 encoded copy of the JSON key file
//! downloaded from the Google Cloud console.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;

use crate::core::ConfigError;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub private_key_id: Option<String>,
    pub project_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

// Keep the private key out of logs
impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    /// Decode a base64 encoded service account JSON document
    pub fn from_base64(encoded: &str) -> Result<Self, ConfigError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        let key = serde_json::from_slice(&bytes)?;
        Ok(key)
    }

    /// Same as [`ServiceAccountKey::from_base64`] but treats `None` as a
    /// missing `GOOGLE_CREDENTIALS` variable.
    pub fn load(encoded: Option<&str>) -> Result<Self, ConfigError> {
        let encoded = encoded.ok_or(ConfigError::Missing("GOOGLE_CREDENTIALS"))?;
        Self::from_base64(encoded)
    }
}
