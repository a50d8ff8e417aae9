use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(host: String, port: Option<u16>, config: AppConfig) -> Result<()> {
    let port = port.unwrap_or(config.port);
    api::serve(host, port, config).await
}
