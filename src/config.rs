use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATA_FILE: &str = "efsane_data.json";
const DEFAULT_KEEPALIVE_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
///
/// Channel IDs identify the two roster channels, the approval channels for
/// each roster, and the single channel where `/efsane-basvuru` is allowed.
pub struct Config {
    pub discord_bot_token: String,

    /// Channel holding the primary "Code-Man RP" roster messages.
    pub efsane_list_channel_id: u64,
    /// Channel holding the secondary "Efsanevi Dünya" roster messages.
    pub efsanevi_dunya_channel_id: u64,
    /// Moderation channel receiving primary-roster applications.
    pub efsane_onay_channel_id: u64,
    /// Moderation channel receiving secondary-roster applications.
    pub efsanevi_dunya_onay_channel_id: u64,
    /// The only channel where members may invoke `/efsane-basvuru`.
    pub efsane_basvuru_channel_id: u64,

    /// Path of the JSON snapshot holding claims and pending applications.
    pub data_file: PathBuf,
    /// Port for the keep-alive HTTP endpoint.
    pub keepalive_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: require_var("DISCORD_BOT_TOKEN")?,
            efsane_list_channel_id: require_id_var("EFSANE_LIST_CHANNEL_ID")?,
            efsanevi_dunya_channel_id: require_id_var("EFSANEVI_DUNYA_CHANNEL_ID")?,
            efsane_onay_channel_id: require_id_var("EFSANE_ONAY_CHANNEL_ID")?,
            efsanevi_dunya_onay_channel_id: require_id_var("EFSANEVI_DUNYA_ONAY_CHANNEL_ID")?,
            efsane_basvuru_channel_id: require_id_var("EFSANE_BASVURU_CHANNEL_ID")?,
            data_file: std::env::var("EFSANE_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
            keepalive_port: match std::env::var("KEEPALIVE_PORT") {
                Ok(value) => value.parse().map_err(|e| ConfigError::InvalidNumericVar {
                    name: "KEEPALIVE_PORT".to_string(),
                    source: e,
                })?,
                Err(_) => DEFAULT_KEEPALIVE_PORT,
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_id_var(name: &str) -> Result<u64, ConfigError> {
    let value = require_var(name)?;
    value.parse().map_err(|e| ConfigError::InvalidNumericVar {
        name: name.to_string(),
        source: e,
    })
}
