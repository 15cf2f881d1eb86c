//! Application workflow: submit, approve, reject, release, reset.
//!
//! The only component that talks to the moderation channel. Submission sends
//! the application embed with approve/reject buttons to the approval channel
//! of the targeted roster and records the resulting message ID in the pending
//! entry. Approve/reject resolve the pending entry through the roster store;
//! authorization (the administrator permission check) happens in the event
//! handlers before these methods are called.

use std::sync::Arc;

use serenity::all::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateMessage, Message, Timestamp,
};
use serenity::http::Http;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;

/// A filled-in application form.
pub struct ApplicationForm {
    pub user_id: String,
    pub efsane_adi: String,
    pub boost_durumu: String,
    pub soy_agaci_durumu: String,
    pub evren: String,
    pub gucler: String,
    /// Routes the application to the secondary-world approval channel.
    pub is_efsanevi_dunya: bool,
}

/// Service orchestrating the application lifecycle.
pub struct ApplicationService {
    http: Arc<Http>,
    roster: Arc<Mutex<RosterStore>>,
    config: Arc<Config>,
}

impl ApplicationService {
    pub fn new(http: Arc<Http>, roster: Arc<Mutex<RosterStore>>, config: Arc<Config>) -> Self {
        Self {
            http,
            roster,
            config,
        }
    }

    /// Submits an application: validates the per-user invariants, notifies
    /// the approvers, and records the pending entry with the approval
    /// message's ID.
    pub async fn submit(&self, form: ApplicationForm) -> Result<(), AppError> {
        {
            let roster = self.roster.lock().await;
            roster.ensure_can_apply(&form.user_id)?;
        }

        let approval_channel_id = if form.is_efsanevi_dunya {
            self.config.efsanevi_dunya_onay_channel_id
        } else {
            self.config.efsane_onay_channel_id
        };
        let message = self.notify_approvers(approval_channel_id, &form).await?;

        let mut roster = self.roster.lock().await;
        roster.submit_application(
            &form.user_id,
            &form.efsane_adi,
            &message.id.to_string(),
            form.is_efsanevi_dunya,
        )
    }

    /// Approves the user's pending application; the claim cooldown starts at
    /// `now_ms`. Returns the claimed character name.
    pub async fn approve(&self, applicant_id: &str, now_ms: i64) -> Result<String, AppError> {
        let mut roster = self.roster.lock().await;
        let application = roster.approve(applicant_id, now_ms)?;
        Ok(application.efsane_adi)
    }

    /// Rejects the user's pending application. Returns the character name
    /// the application was for.
    pub async fn reject(&self, applicant_id: &str) -> Result<String, AppError> {
        let mut roster = self.roster.lock().await;
        let application = roster.reject(applicant_id)?;
        Ok(application.efsane_adi)
    }

    /// Releases the user's claim, subject to the cooldown. Returns the
    /// released character name.
    pub async fn release(&self, user_id: &str, now_ms: i64) -> Result<String, AppError> {
        let mut roster = self.roster.lock().await;
        roster.release(user_id, now_ms)
    }

    /// Clears all claims and pending applications.
    pub async fn reset_all(&self) -> Result<(), AppError> {
        let mut roster = self.roster.lock().await;
        roster.reset_all()
    }

    /// Sends the application embed with approve/reject buttons to the
    /// approval channel and returns the sent message.
    async fn notify_approvers(
        &self,
        channel_id: u64,
        form: &ApplicationForm,
    ) -> Result<Message, AppError> {
        let embed = CreateEmbed::new()
            .colour(Colour::ORANGE)
            .title("⚠️ Yeni Efsane Başvurusu Bekleniyor")
            .description(format!("**Başvuran Kullanıcı:** <@{}>", form.user_id))
            .field("Efsane Adı:", form.efsane_adi.as_str(), true)
            .field("Soy Ağacı:", form.soy_agaci_durumu.as_str(), true)
            .field("Boost Durumu:", form.boost_durumu.as_str(), true)
            .field("Bulunduğu Evren:", form.evren.as_str(), false)
            .field("Güçler / Özellikler", form.gucler.as_str(), false)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new("Pearl Studios Efsane Basvuru"));

        let buttons = CreateActionRow::Buttons(vec![
            CreateButton::new(format!("approve_{}", form.user_id))
                .label("✅ Onayla")
                .style(ButtonStyle::Success),
            CreateButton::new(format!("reject_{}", form.user_id))
                .label("❌ Reddet")
                .style(ButtonStyle::Danger),
        ]);

        let message = serenity::all::ChannelId::new(channel_id)
            .send_message(
                &self.http,
                CreateMessage::new().embed(embed).components(vec![buttons]),
            )
            .await
            .map_err(|e| AppError::DeliveryFailed {
                channel_id,
                source: Box::new(e),
            })?;

        tracing::info!(
            "Sent application for {} by user {} to approval channel {}",
            form.efsane_adi,
            form.user_id,
            channel_id
        );
        Ok(message)
    }
}
