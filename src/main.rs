use anyhow::Result;
use foundation_agent::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
