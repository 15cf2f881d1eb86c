//! Error types for the Efsane roster bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors such as
//! roster state-machine violations and configuration failures, alongside
//! infrastructure errors from Discord, the scheduler, and the persistence file.

pub mod config;
pub mod roster;

use thiserror::Error;

use crate::error::{config::ConfigError, roster::RosterError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. Roster state-machine
/// violations (`RosterErr`) are always recovered locally and rendered as a
/// user-facing reply; the remaining variants are logged and abort only the
/// operation that raised them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Roster state-machine violation (claim/pending/cooldown rules).
    ///
    /// Delegates to `RosterError::user_message()` for the reply text shown to
    /// the member who triggered the operation.
    #[error(transparent)]
    RosterErr(#[from] RosterError),

    /// A configured channel could not be found or accessed.
    #[error("channel {0} not found or inaccessible")]
    ChannelUnavailable(u64),

    /// Sending or deleting roster messages in a channel failed.
    #[error("failed to deliver messages to channel {channel_id}: {source}")]
    DeliveryFailed {
        channel_id: u64,
        source: Box<serenity::Error>,
    },

    /// Writing the roster snapshot to disk failed.
    ///
    /// The in-memory store keeps the mutation; only the durable snapshot is
    /// stale until the next successful write.
    #[error("failed to persist roster data to {path}: {source}")]
    PersistenceFailed {
        path: String,
        source: std::io::Error,
    },

    /// Roster snapshot serialization or deserialization error.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error outside the persistence path (keep-alive listener, etc.).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
