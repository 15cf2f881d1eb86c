//! Slash-command definitions registered with Discord on `ready`.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

/// Builds the global application command set.
pub fn global_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("efsane-basvuru")
            .description("Yeni bir Efsane/Karakter başvurusu yapar."),
        CreateCommand::new("efsane-birak")
            .description("Sahip olduğunuz Efsane/Karakteri bırakır."),
        CreateCommand::new("soysifirla")
            .description("[ADMİN] Efsane sahipliklerini ve bekleyen başvuruları sıfırlar.")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "liste",
                    "Sıfırlanacak Efsane listesi türü. TÜM sahiplikleri sıfırlar.",
                )
                .required(true)
                .add_string_choice("Code-Man RP Soy Ağacı (Codeman)", "codeman")
                .add_string_choice("Efsanevi Dünya Listesi (Efsanevi_Dunya)", "efsanevi_dunya")
                .add_string_choice("TÜM LİSTELER (Hepsini sıfırlar)", "all"),
            ),
        CreateCommand::new("yenile")
            .description("[ADMİN] Her iki Efsane listesini de manuel olarak günceller.")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}
