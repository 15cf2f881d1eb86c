//! Channel restriction policy for inbound messages.
//!
//! Messages in the two roster channels are always deleted regardless of
//! author; the bot's own list messages are exempt because bot authors are
//! skipped entirely. In the application channel, non-admin messages are
//! deleted unless they are the `/efsane-basvuru` invocation.

use std::sync::Arc;

use serenity::all::{Context, Message};

use crate::config::Config;

/// Applies the channel restriction policy to one message.
pub async fn handle_message(config: &Arc<Config>, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let channel_id = message.channel_id.get();

    if channel_id == config.efsane_list_channel_id || channel_id == config.efsanevi_dunya_channel_id
    {
        if let Err(e) = message.delete(&ctx).await {
            tracing::error!("Failed to delete message in roster channel: {}", e);
        }
        return;
    }

    if channel_id == config.efsane_basvuru_channel_id {
        let Some(guild_id) = message.guild_id else {
            return;
        };

        let member = match guild_id.member(&ctx.http, message.author.id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!(
                    "Failed to fetch member {} for channel policy: {}",
                    message.author.id,
                    e
                );
                return;
            }
        };

        // Message events carry no precomputed permissions, unlike
        // interactions; resolve the admin flag from the cached guild roles.
        let is_admin = ctx
            .cache
            .guild(guild_id)
            .map(|guild| {
                guild.owner_id == message.author.id
                    || member.roles.iter().any(|role_id| {
                        guild
                            .roles
                            .get(role_id)
                            .is_some_and(|role| role.permissions.administrator())
                    })
            })
            .unwrap_or(false);
        if is_admin {
            return;
        }

        // Slash commands do not arrive as messages; this keeps only a typed
        // "/efsane-basvuru" line, everything else is removed.
        if message.content.trim().starts_with("/efsane-basvuru") {
            return;
        }

        if let Err(e) = message.delete(&ctx).await {
            tracing::error!("Failed to delete message in application channel: {}", e);
        }
    }
}
