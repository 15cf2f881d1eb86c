//! Slash-command handlers.
//!
//! State-machine refusals are rendered as ephemeral replies; infrastructure
//! failures are logged and answered with a generic error message. A handler
//! never propagates an error out of the event loop.

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{
    CommandDataOptionValue, CommandInteraction, Context, CreateActionRow, CreateInputText,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal, InputTextStyle,
};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::AppError;
use crate::roster::store::RosterStore;
use crate::service::application::ApplicationService;
use crate::service::list_delivery::ListDeliveryService;

const ADMIN_REQUIRED_MESSAGE: &str =
    "❌ Bu komutu kullanmak için Yöneticilik yetkisine sahip olmalısınız.";
const GENERIC_FAILURE_MESSAGE: &str = "❌ İşlem sırasında bir hata oluştu.";

/// Dispatches a slash command to its handler.
pub async fn handle_command(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    command: CommandInteraction,
) {
    match command.data.name.as_str() {
        "soysifirla" => handle_reset(roster, config, ctx, command).await,
        "yenile" => handle_refresh(roster, config, ctx, command).await,
        "efsane-basvuru" => handle_apply(roster, config, ctx, command).await,
        "efsane-birak" => handle_release(roster, config, ctx, command).await,
        _ => {}
    }
}

/// Whether the invoking member carries the administrator permission.
///
/// Interactions always arrive with the member's computed permissions, so no
/// extra API call is needed.
fn is_admin(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

/// Sends an interaction response, logging delivery failures.
async fn respond(ctx: &Context, command: &CommandInteraction, content: String, ephemeral: bool) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    );
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to /{} command: {}",
            command.data.name,
            e
        );
    }
}

/// `/soysifirla` - admin reset of all claims and pending applications.
///
/// The `liste` option only selects the confirmation text; every scope clears
/// all records.
async fn handle_reset(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    command: CommandInteraction,
) {
    if !is_admin(&command) {
        respond(&ctx, &command, ADMIN_REQUIRED_MESSAGE.to_string(), true).await;
        return;
    }

    let list_type = match command.data.options.first().map(|option| &option.value) {
        Some(CommandDataOptionValue::String(value)) => value.clone(),
        _ => String::new(),
    };

    let reset_message = match list_type.as_str() {
        "all" => "⚠️ **TÜM LİSTELER** için Efsane sahiplikleri ve bekleyen başvurular kalıcı \
                  olarak SIFIRLANDI."
            .to_string(),
        "codeman" => "⚠️ **Code-Man RP Soy Ağacı (Codeman)** için Efsane sahiplikleri ve \
                      bekleyen başvurular kalıcı olarak SIFIRLANDI."
            .to_string(),
        "efsanevi_dunya" => "⚠️ **Efsanevi Dünya Listesi** için Efsane sahiplikleri ve bekleyen \
                             başvurular kalıcı olarak SIFIRLANDI."
            .to_string(),
        _ => {
            respond(
                &ctx,
                &command,
                "❌ Geçersiz liste türü seçeneği.".to_string(),
                true,
            )
            .await;
            return;
        }
    };

    let service = ApplicationService::new(ctx.http.clone(), roster.clone(), config.clone());
    if let Err(e) = service.reset_all().await {
        tracing::error!("Failed to reset Efsane data: {}", e);
        respond(&ctx, &command, GENERIC_FAILURE_MESSAGE.to_string(), true).await;
        return;
    }
    tracing::info!("All Efsane data reset (scope option: {})", list_type);

    respond(
        &ctx,
        &command,
        format!("{reset_message}\nListeler otomatik olarak güncelleniyor..."),
        false,
    )
    .await;

    ListDeliveryService::new(ctx.http.clone(), roster.clone(), config.clone())
        .spawn_update_all_lists();
}

/// `/yenile` - admin-triggered immediate redelivery of both rosters.
async fn handle_refresh(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    command: CommandInteraction,
) {
    if !is_admin(&command) {
        respond(&ctx, &command, ADMIN_REQUIRED_MESSAGE.to_string(), true).await;
        return;
    }

    respond(
        &ctx,
        &command,
        "✅ Her iki Efsane listesi de manuel olarak güncelleniyor...".to_string(),
        true,
    )
    .await;

    ListDeliveryService::new(ctx.http.clone(), roster.clone(), config.clone())
        .spawn_update_all_lists();
}

/// `/efsane-basvuru` - opens the application form.
///
/// Only allowed in the application channel; refused in the roster channels
/// and everywhere else. The per-user invariants are checked before showing
/// the modal so the member is refused before typing.
async fn handle_apply(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    command: CommandInteraction,
) {
    let channel_id = command.channel_id.get();

    if channel_id == config.efsane_list_channel_id || channel_id == config.efsanevi_dunya_channel_id
    {
        respond(
            &ctx,
            &command,
            "❌ Bu kanalda `/efsane-basvuru` komutu kullanılamaz. Komut otomatik olarak \
             silinmiştir."
                .to_string(),
            true,
        )
        .await;
        return;
    }

    if channel_id != config.efsane_basvuru_channel_id {
        respond(
            &ctx,
            &command,
            format!(
                "❌ `{}` komutu sadece <#{}> kanalında kullanılabilir.",
                command.data.name, config.efsane_basvuru_channel_id
            ),
            true,
        )
        .await;
        return;
    }

    let user_id = command.user.id.to_string();
    {
        let roster = roster.lock().await;
        if let Err(e) = roster.ensure_can_apply(&user_id) {
            respond(&ctx, &command, e.user_message(), true).await;
            return;
        }
    }

    let modal = CreateModal::new(format!("efsane_form_{user_id}"), "Efsane Başvuru Formu")
        .components(vec![
            CreateActionRow::InputText(
                CreateInputText::new(
                    InputTextStyle::Short,
                    "Efsane Adı (Örn: Code-Man)",
                    "efsane_adi",
                )
                .required(true)
                .min_length(2)
                .max_length(30),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(
                    InputTextStyle::Short,
                    "Boost Durumu (Örn: Server Booster / Yok)",
                    "boost_durumu",
                )
                .required(true)
                .min_length(3),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(
                    InputTextStyle::Short,
                    "Hangi Soy Ağacı (Codeman/Efsanevi Dünya)?",
                    "soy_agaci",
                )
                .required(true)
                .min_length(3),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(
                    InputTextStyle::Short,
                    "Bulunduğu Evren (Örn: Pearl Studios Evreni)",
                    "evren",
                )
                .required(true)
                .min_length(3),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(
                    InputTextStyle::Paragraph,
                    "Güçler / Özellikler (Kısa Açıklama)",
                    "guculer",
                )
                .required(true)
                .min_length(10),
            ),
        ]);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await
    {
        tracing::error!("Failed to show application modal: {}", e);
    }
}

/// `/efsane-birak` - voluntary release of the member's claim.
async fn handle_release(
    roster: &Arc<Mutex<RosterStore>>,
    config: &Arc<Config>,
    ctx: Context,
    command: CommandInteraction,
) {
    let user_id = command.user.id.to_string();
    let now_ms = Utc::now().timestamp_millis();

    let service = ApplicationService::new(ctx.http.clone(), roster.clone(), config.clone());
    match service.release(&user_id, now_ms).await {
        Ok(efsane_adi) => {
            respond(
                &ctx,
                &command,
                format!(
                    "✅ **{efsane_adi}** Efsane/Karakterini başarıyla bıraktınız. Artık yeni \
                     bir başvuru yapabilirsiniz. Listeler güncelleniyor..."
                ),
                true,
            )
            .await;

            ListDeliveryService::new(ctx.http.clone(), roster.clone(), config.clone())
                .spawn_update_all_lists();
        }
        Err(AppError::RosterErr(e)) => {
            respond(&ctx, &command, e.user_message(), true).await;
        }
        Err(e) => {
            tracing::error!("Failed to release Efsane for user {}: {}", user_id, e);
            respond(&ctx, &command, GENERIC_FAILURE_MESSAGE.to_string(), true).await;
        }
    }
}
