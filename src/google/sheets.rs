//! Google Sheets v4 values API and the store built on top of it

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;
use super::oauth::{SHEETS_SCOPE, fetch_access_token};
use crate::core::{AppConfig, Row, StoreError, TabularStore};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(rename = "majorDimension", skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    // Omitted by the API when the range is empty
    #[serde(default)]
    pub values: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub struct AppendValuesResponse {
    #[serde(rename = "tableRange")]
    pub table_range: Option<String>,
}

fn values_url(api_url: &str, spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}",
        api_url.trim_end_matches('/'),
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(range)
    )
}

/// Fetch the cells in `range`, e.g. `Sheet1!A2:C`
pub async fn get_values(
    client: &Client,
    api_url: &str,
    access_token: &str,
    spreadsheet_id: &str,
    range: &str,
) -> Result<ValueRange, anyhow::Error> {
    let url = values_url(api_url, spreadsheet_id, range);
    let res = client.get(&url).bearer_auth(access_token).send().await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    if !status.is_success() {
        anyhow::bail!("Values fetch failed: {} ({})", status, text);
    }
    let values: ValueRange = serde_json::from_str(&text)?;
    Ok(values)
}

/// Append rows after the last row of the table found in `range`.
/// Values are stored as given with no parsing by the sheet.
pub async fn append_values(
    client: &Client,
    api_url: &str,
    access_token: &str,
    spreadsheet_id: &str,
    range: &str,
    rows: Vec<Row>,
) -> Result<AppendValuesResponse, anyhow::Error> {
    let url = format!("{}:append", values_url(api_url, spreadsheet_id, range));
    let body = ValueRange {
        values: rows,
        ..Default::default()
    };
    let res = client
        .post(&url)
        .query(&[("valueInputOption", "RAW")])
        .bearer_auth(access_token)
        .json(&body)
        .send()
        .await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    if !status.is_success() {
        anyhow::bail!("Values append failed: {} ({})", status, text);
    }
    let resp: AppendValuesResponse = serde_json::from_str(&text)?;
    Ok(resp)
}

/// `TabularStore` backed by Google Sheets.
///
/// Every call decodes the credentials and fetches a new access token,
/// no session is shared between requests.
#[derive(Clone)]
pub struct SheetsStore {
    client: Client,
    api_url: String,
    credentials: Option<String>,
}

impl SheetsStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.sheets_api_url.clone(),
            credentials: config.google_credentials.clone(),
        }
    }

    async fn access_token(&self) -> Result<String, StoreError> {
        let key = ServiceAccountKey::load(self.credentials.as_deref())?;
        let token = fetch_access_token(&self.client, &key, SHEETS_SCOPE)
            .await
            .map_err(|e| StoreError::Unavailable(format!("unable to create sheets client: {}", e)))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl TabularStore for SheetsStore {
    async fn read_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>, StoreError> {
        let access_token = self.access_token().await?;
        let values = get_values(&self.client, &self.api_url, &access_token, spreadsheet_id, range)
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("unable to retrieve data from sheet: {}", e))
            })?;
        tracing::debug!("Read {} rows from {}", values.values.len(), range);
        Ok(values.values)
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        rows: Vec<Row>,
    ) -> Result<(), StoreError> {
        let access_token = self.access_token().await?;
        let count = rows.len();
        let resp = append_values(
            &self.client,
            &self.api_url,
            &access_token,
            spreadsheet_id,
            sheet_name,
            rows,
        )
        .await
        .map_err(|e| StoreError::Unavailable(format!("unable to append data to sheet: {}", e)))?;
        tracing::debug!(
            "Appended {} rows after {}",
            count,
            resp.table_range.as_deref().unwrap_or(sheet_name)
        );
        Ok(())
    }
}
