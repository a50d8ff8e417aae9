//! OAuth2 access tokens for service accounts using the JWT bearer grant

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

/// Build the signed assertion exchanged for an access token. Google
/// caps the lifetime at one hour.
pub fn sign_assertion(key: &ServiceAccountKey, scope: &str) -> Result<String> {
    let now = Utc::now();
    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: scope.to_string(),
        aud: key.token_uri.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    let token = encode(&header, &claims, &encoding_key)?;

    Ok(token)
}

/// Exchange a freshly signed assertion for an access token
pub async fn fetch_access_token(
    client: &Client,
    key: &ServiceAccountKey,
    scope: &str,
) -> Result<AccessToken> {
    let assertion = sign_assertion(key, scope)?;
    let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())];

    let res = client.post(&key.token_uri).form(&params).send().await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    if !status.is_success() {
        anyhow::bail!("Token request failed: {} ({})", status, text);
    }
    let token: AccessToken = serde_json::from_str(&text)?;
    tracing::debug!("Fetched access token for {}", key.client_email);

    Ok(token)
}
