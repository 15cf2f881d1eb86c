use std::sync::Arc;

use serenity::http::Http;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;
use crate::service::list_delivery::ListDeliveryService;

/// Starts the periodic roster refresh.
///
/// Runs every 5 minutes and redelivers both lists unconditionally. A run may
/// overlap a user-triggered redelivery at the transport layer; redelivery is
/// idempotent, so the last one to finish wins.
///
/// # Arguments
/// - `http`: Discord HTTP client shared with the bot
/// - `roster`: Shared roster store
/// - `config`: Application configuration with the list channel IDs
pub async fn start_scheduler(
    http: Arc<Http>,
    roster: Arc<Mutex<RosterStore>>,
    config: Arc<Config>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_http = http.clone();
    let job_roster = roster.clone();
    let job_config = config.clone();

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let service = ListDeliveryService::new(
            job_http.clone(),
            job_roster.clone(),
            job_config.clone(),
        );

        Box::pin(async move {
            if let Err(e) = service.update_all_lists().await {
                tracing::error!("Error during scheduled Efsane list refresh: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Efsane list refresh scheduler started");

    Ok(())
}
