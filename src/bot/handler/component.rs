//! Approve/reject button handlers in the moderation channel.

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{
    Colour, ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditMessage,
};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;
use crate::service::application::ApplicationService;
use crate::service::list_delivery::ListDeliveryService;

const APPROVE_PREFIX: &str = "approve_";
const REJECT_PREFIX: &str = "reject_";

const APPROVED_COLOUR: Colour = Colour::new(0x57F287);
const REJECTED_COLOUR: Colour = Colour::new(0xED4245);

/// Handles an approve/reject button press on an application message.
///
/// Requires the administrator permission. On approval the pending entry is
/// promoted to a claim and both rosters are redelivered; on rejection the
/// entry is discarded. Either way the application embed is recolored, its
/// title updated, and the buttons removed.
pub async fn handle_component(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    component: ComponentInteraction,
) {
    let custom_id = component.data.custom_id.clone();
    let (is_approve, applicant_id) = if let Some(id) = custom_id.strip_prefix(APPROVE_PREFIX) {
        (true, id.to_string())
    } else if let Some(id) = custom_id.strip_prefix(REJECT_PREFIX) {
        (false, id.to_string())
    } else {
        return;
    };

    let is_admin = component
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());
    if !is_admin {
        respond(
            &ctx,
            &component,
            "❌ Bu işlemi gerçekleştirmek için Yöneticilik yetkisine sahip olmalısınız."
                .to_string(),
            true,
        )
        .await;
        return;
    }

    let service = ApplicationService::new(ctx.http.clone(), roster.clone(), config.clone());

    let outcome = if is_approve {
        service
            .approve(&applicant_id, Utc::now().timestamp_millis())
            .await
    } else {
        service.reject(&applicant_id).await
    };

    let efsane_adi = match outcome {
        Ok(efsane_adi) => efsane_adi,
        Err(AppError::RosterErr(e)) => {
            respond(&ctx, &component, e.user_message(), true).await;
            return;
        }
        Err(e) => {
            tracing::error!(
                "Failed to resolve application for user {}: {}",
                applicant_id,
                e
            );
            respond(
                &ctx,
                &component,
                "❌ İşlem sırasında bir hata oluştu.".to_string(),
                true,
            )
            .await;
            return;
        }
    };

    update_application_message(&ctx, &component, is_approve).await;

    let reply = if is_approve {
        format!(
            "✅ <@{applicant_id}> kullanıcısının **{efsane_adi}** Efsane başvurusu başarıyla \
             onaylandı. Listeler güncelleniyor..."
        )
    } else {
        format!(
            "❌ <@{applicant_id}> kullanıcısının **{efsane_adi}** Efsane başvurusu reddedildi. \
             Artık yeni bir başvuru yapabilir."
        )
    };
    respond(&ctx, &component, reply, false).await;

    if is_approve {
        ListDeliveryService::new(ctx.http.clone(), roster.clone(), config.clone())
            .spawn_update_all_lists();
    }
}

/// Recolors the application embed, updates its title, and strips the buttons.
async fn update_application_message(ctx: &Context, component: &ComponentInteraction, approved: bool) {
    let Some(embed) = component.message.embeds.first().cloned() else {
        tracing::error!("Application message {} has no embed", component.message.id);
        return;
    };

    let updated = if approved {
        CreateEmbed::from(embed)
            .colour(APPROVED_COLOUR)
            .title("✅ Başvuru **ONAYLANDI**")
    } else {
        CreateEmbed::from(embed)
            .colour(REJECTED_COLOUR)
            .title("❌ Başvuru **REDDEDİLDİ**")
    };

    let mut message = (*component.message).clone();
    if let Err(e) = message
        .edit(ctx, EditMessage::new().embed(updated).components(Vec::new()))
        .await
    {
        tracing::error!("Failed to update application message: {}", e);
    }
}

async fn respond(ctx: &Context, component: &ComponentInteraction, content: String, ephemeral: bool) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    );
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to application button: {}", e);
    }
}
