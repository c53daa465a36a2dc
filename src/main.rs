use anyhow::Result;
use converse::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up OPENAI_API_KEY and friends from a local .env if present
    dotenvy::dotenv().ok();
    cli::run().await
}
