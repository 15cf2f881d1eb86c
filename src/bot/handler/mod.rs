use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::roster::store::RosterStore;

pub mod command;
pub mod component;
pub mod message;
pub mod modal;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub roster: Arc<Mutex<RosterStore>>,
    pub config: Arc<Config>,
}

impl Handler {
    pub fn new(roster: Arc<Mutex<RosterStore>>, config: Arc<Config>) -> Self {
        Self { roster, config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.roster, &self.config, ctx, ready).await;
    }

    /// Called for slash commands, modal submissions, and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                command::handle_command(&self.roster, &self.config, ctx, command).await;
            }
            Interaction::Modal(modal) => {
                modal::handle_modal_submit(&self.roster, &self.config, ctx, modal).await;
            }
            Interaction::Component(component) => {
                component::handle_component(&self.roster, &self.config, ctx, component).await;
            }
            _ => {}
        }
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.config, ctx, message).await;
    }
}
