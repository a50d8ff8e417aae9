use anyhow::Result;

use crate::api::routes::messages::fetch_messages;
use crate::core::AppConfig;
use crate::google::sheets::SheetsStore;

/// Guestbook messages as pretty printed JSON
pub async fn render(config: &AppConfig) -> Result<String> {
    let store = SheetsStore::new(config);
    let messages = fetch_messages(config, &store).await?;
    Ok(serde_json::to_string_pretty(&messages)?)
}

pub async fn run(config: AppConfig) -> Result<()> {
    println!("{}", render(&config).await?);
    Ok(())
}
