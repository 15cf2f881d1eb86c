//! Redelivery of the roster list messages.
//!
//! A redelivery is delete-then-resend: fetch the most recent messages in the
//! target channel, delete those authored by the bot (bulk delete, falling
//! back to per-message deletes), then send the freshly rendered and paginated
//! chunks in order with a short delay between sends to respect rate limits.
//! The operation is idempotent and convergent, so the periodic refresh and a
//! manually triggered one may race without coordination.

use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, CreateMessage, GetMessages, Message, MessageId};
use serenity::http::Http;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::paginate::{paginate_or_placeholder, MAX_MESSAGE_CHARS};
use crate::roster::render::{
    render_full, EFSANEVI_DUNYA_HEADER, EFSANE_LIST_HEADER, EMPTY_LIST_PLACEHOLDER, RULE_BLOCK,
};
use crate::roster::store::RosterStore;
use crate::roster::taxonomy::{EFSANEVI_DUNYA_GROUPS, EFSANE_GROUPS};

/// Delay between consecutive message sends during redelivery.
const INTER_MESSAGE_DELAY: Duration = Duration::from_millis(500);

/// How many recent messages are scanned for old bot messages.
const MESSAGE_FETCH_LIMIT: u8 = 100;

/// Service delivering the rendered rosters to their Discord channels.
pub struct ListDeliveryService {
    http: Arc<Http>,
    roster: Arc<Mutex<RosterStore>>,
    config: Arc<Config>,
}

impl ListDeliveryService {
    pub fn new(http: Arc<Http>, roster: Arc<Mutex<RosterStore>>, config: Arc<Config>) -> Self {
        Self {
            http,
            roster,
            config,
        }
    }

    /// Redelivers both rosters, continuing with the second even if the first
    /// channel fails. Per-channel failures are logged and reported as the
    /// first error encountered.
    pub async fn update_all_lists(&self) -> Result<(), AppError> {
        tracing::info!("Refreshing both Efsane lists");

        let (primary, secondary) = {
            let roster = self.roster.lock().await;
            (
                render_full(EFSANE_LIST_HEADER, EFSANE_GROUPS, &roster),
                render_full(EFSANEVI_DUNYA_HEADER, EFSANEVI_DUNYA_GROUPS, &roster),
            )
        };

        let mut first_error = None;
        for (channel_id, header, content) in [
            (
                self.config.efsane_list_channel_id,
                EFSANE_LIST_HEADER,
                primary,
            ),
            (
                self.config.efsanevi_dunya_channel_id,
                EFSANEVI_DUNYA_HEADER,
                secondary,
            ),
        ] {
            if let Err(e) = self.redeliver(channel_id, header, &content).await {
                tracing::error!("Failed to refresh list in channel {}: {}", channel_id, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Runs [`update_all_lists`](Self::update_all_lists) as a detached
    /// background task, logging any failure. The state mutation that
    /// triggered the refresh is never rolled back on delivery failure.
    pub fn spawn_update_all_lists(self) {
        tokio::spawn(async move {
            if let Err(e) = self.update_all_lists().await {
                tracing::error!("Background Efsane list refresh failed: {}", e);
            }
        });
    }

    /// Deletes the bot's previous messages in the channel and resends the
    /// paginated list content.
    async fn redeliver(
        &self,
        channel_id: u64,
        header: &str,
        content: &str,
    ) -> Result<(), AppError> {
        let channel = ChannelId::new(channel_id);

        let bot_user_id = self.http.get_current_user().await?.id;
        let messages = channel
            .messages(&self.http, GetMessages::new().limit(MESSAGE_FETCH_LIMIT))
            .await
            .map_err(|_| AppError::ChannelUnavailable(channel_id))?;

        let old: Vec<&Message> = messages
            .iter()
            .filter(|m| m.author.id == bot_user_id)
            .collect();

        if !old.is_empty() {
            let ids: Vec<MessageId> = old.iter().map(|m| m.id).collect();
            if let Err(e) = channel.delete_messages(&self.http, ids).await {
                tracing::error!(
                    "Bulk delete in channel {} failed ({}), deleting one by one",
                    channel_id,
                    e
                );
                for message in &old {
                    if let Err(e) = message.delete(&self.http).await {
                        tracing::error!("Failed to delete message {}: {}", message.id, e);
                    }
                }
            }
            tracing::info!(
                "Removed {} old list messages from channel {}",
                old.len(),
                channel_id
            );
        }

        let placeholder = format!("{}{}{}", header, RULE_BLOCK, EMPTY_LIST_PLACEHOLDER);
        let parts = paginate_or_placeholder(content, MAX_MESSAGE_CHARS, &placeholder);

        let total = parts.len();
        for (index, part) in parts.into_iter().enumerate() {
            channel
                .send_message(&self.http, CreateMessage::new().content(part))
                .await
                .map_err(|e| AppError::DeliveryFailed {
                    channel_id,
                    source: Box::new(e),
                })?;
            tracing::info!(
                "Updated list in channel {} (part {}/{})",
                channel_id,
                index + 1,
                total
            );
            tokio::time::sleep(INTER_MESSAGE_DELAY).await;
        }

        Ok(())
    }
}
