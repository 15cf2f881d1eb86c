//! Discord client initialization and startup.

use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use tokio::sync::Mutex;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;

/// Builds the Discord client and extracts its HTTP handle.
///
/// The HTTP handle is shared with the scheduler so the periodic list refresh
/// can send messages without a second connection to Discord.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and channel IDs
/// - `roster` - Shared roster store for the event handlers
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Initialized client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: Arc<Config>,
    roster: Arc<Mutex<RosterStore>>,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the
    // Discord Developer Portal. It is required for the application-channel
    // message policy.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(roster, config.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();
    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// Should be called from within a tokio::spawn task since it blocks until the
/// bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");
    client.start().await?;
    Ok(())
}
