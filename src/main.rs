mod bot;
mod config;
mod error;
mod keepalive;
mod roster;
mod scheduler;
mod service;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    let roster = Arc::new(Mutex::new(RosterStore::load(&config.data_file)?));

    tracing::info!("Starting Efsane roster bot");

    // Initialize the Discord client and extract its HTTP handle for the
    // scheduler.
    let (client, discord_http) = bot::start::init_bot(config.clone(), roster.clone()).await?;

    // Run the Discord bot in a separate task. A bot failure is logged but
    // does not take the process down.
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start the periodic list refresh.
    let scheduler_roster = roster.clone();
    let scheduler_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) =
            scheduler::list_refresh::start_scheduler(discord_http, scheduler_roster, scheduler_config)
                .await
        {
            tracing::error!("Failed to start list refresh scheduler: {}", e);
        }
    });

    // The keep-alive server blocks here and keeps the process alive.
    keepalive::serve(config.keepalive_port).await
}
