//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Registers the global slash
//! commands and triggers the initial redelivery of both rosters.

use std::sync::Arc;

use serenity::all::{Command, Context, Ready};
use tokio::sync::Mutex;

use crate::bot::commands;
use crate::config::Config;
use crate::roster::store::RosterStore;
use crate::service::list_delivery::ListDeliveryService;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, commands::global_commands()).await {
        Ok(registered) => tracing::info!("Registered {} application commands", registered.len()),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }

    // Initial redelivery so the rosters reflect the loaded snapshot.
    ListDeliveryService::new(ctx.http.clone(), roster.clone(), config.clone())
        .spawn_update_all_lists();
}
