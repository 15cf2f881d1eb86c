//! Discord bot integration.
//!
//! This module provides the gateway event handlers, the slash-command
//! definitions, and client startup. The bot runs in its own tokio task; its
//! HTTP client is shared with the scheduler so the periodic roster refresh
//! can send messages without maintaining a second connection to Discord.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - channel and guild metadata for permission checks
//! - `GUILD_MESSAGES` - message events for the channel restriction policy
//! - `MESSAGE_CONTENT` - message text, needed to recognize the application
//!   command invocation in the application channel (privileged intent)

pub mod commands;
pub mod handler;
pub mod start;
