use anyhow::Result;

use crate::api;
use crate::chat::Memory;
use crate::core::AppConfig;

pub async fn run(host: String, port: String, memory: Memory) -> Result<()> {
    let config = AppConfig {
        memory,
        ..AppConfig::default()
    };
    api::serve(host, port, config).await
}
