use anyhow::Result;

use crate::core::AppConfig;
use crate::transcript::TranscriptStore;

pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let store = TranscriptStore::new(&config.history_path, &config.system_message);

    let _guard = store.guard().await;
    store.reset().await?;

    println!("History cleared");
    Ok(())
}
