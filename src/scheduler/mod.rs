//! Cron jobs for automated tasks.

pub mod list_refresh;
