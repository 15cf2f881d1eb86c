//! Application form (modal) submission handler.

use std::sync::Arc;

use serenity::all::{
    ActionRowComponent, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, ModalInteraction,
};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;
use crate::service::application::{ApplicationForm, ApplicationService};

const FORM_CUSTOM_ID_PREFIX: &str = "efsane_form_";

/// Handles a submitted application form.
///
/// The member is acknowledged immediately; the approval-channel notification
/// and the pending entry happen afterwards, with failures surfaced as an
/// ephemeral follow-up.
pub async fn handle_modal_submit(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    modal: ModalInteraction,
) {
    let Some(user_id) = modal.data.custom_id.strip_prefix(FORM_CUSTOM_ID_PREFIX) else {
        return;
    };
    let user_id = user_id.to_string();

    let efsane_adi = input_value(&modal, "efsane_adi").trim().to_string();
    let boost_durumu = input_value(&modal, "boost_durumu").trim().to_string();
    let soy_agaci_durumu = input_value(&modal, "soy_agaci").trim().to_lowercase();
    let evren = input_value(&modal, "evren").to_string();
    let gucler = input_value(&modal, "guculer").to_string();

    let is_efsanevi_dunya = soy_agaci_durumu.contains("efsanevi dünya");

    let acknowledgement = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(
                "✅ Başvurunuz başarıyla alındı ve onaylanmak üzere yetkili kanala gönderildi. \
                 Lütfen bekleyiniz.",
            )
            .ephemeral(true),
    );
    if let Err(e) = modal.create_response(&ctx.http, acknowledgement).await {
        tracing::error!("Failed to acknowledge application form: {}", e);
        return;
    }

    let form = ApplicationForm {
        user_id: user_id.clone(),
        efsane_adi,
        boost_durumu,
        soy_agaci_durumu,
        evren,
        gucler,
        is_efsanevi_dunya,
    };

    let service = ApplicationService::new(ctx.http.clone(), roster.clone(), config.clone());
    match service.submit(form).await {
        Ok(()) => {}
        Err(AppError::RosterErr(e)) => {
            follow_up(&ctx, &modal, e.user_message()).await;
        }
        Err(e) => {
            tracing::error!("Failed to submit application for user {}: {}", user_id, e);
            follow_up(
                &ctx,
                &modal,
                "❌ Başvurunuz iletilirken bir hata oluştu. Lütfen daha sonra tekrar deneyiniz."
                    .to_string(),
            )
            .await;
        }
    }
}

/// The value of one form input, or an empty string if absent.
fn input_value<'a>(modal: &'a ModalInteraction, custom_id: &str) -> &'a str {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.as_deref()
            }
            _ => None,
        })
        .unwrap_or("")
}

async fn follow_up(ctx: &Context, modal: &ModalInteraction, content: String) {
    let follow_up = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = modal.create_followup(&ctx.http, follow_up).await {
        tracing::error!("Failed to send application follow-up: {}", e);
    }
}
