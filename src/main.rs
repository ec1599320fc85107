#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use std::env;
use stock_buddy::{
    bot::{BotData, framework},
    config::{database, inventory},
    errors::{Error, Result},
    session::Session,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Load sections, bars and thresholds
    let config = inventory::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(
        "Loaded {} sections and {} bars",
        config.inventory.sections.len(),
        config.inventory.bars.len()
    );

    // 4. Initialize database
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Load the session and seed the catalog
    let seeds = config.catalog.clone();
    let mut session = Session::load(db, config).await?;
    session
        .seed_catalog(&seeds)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;
    info!(
        "Session ready: {} catalog products, {} restock entries, {} stock-take entries",
        session.catalog().len(),
        session.restock().len(),
        session.stock_take().len()
    );

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    framework::run_bot(token, BotData::new(session)).await
}
