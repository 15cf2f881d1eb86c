use thiserror::Error;

/// Roster state-machine violations.
///
/// These are expected outcomes of member actions, not faults: they are always
/// recovered locally and rendered as an ephemeral reply to the member who
/// triggered the operation. `user_message()` produces that reply text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    /// The user already owns a claimed Efsane and may not apply again.
    #[error("user already holds a claimed Efsane")]
    AlreadyClaimed,

    /// The user already has an application awaiting moderation.
    #[error("user already has a pending application")]
    AlreadyPending,

    /// The 48-hour claim cooldown has not elapsed yet.
    #[error("claim cooldown for {character_key} not elapsed, {remaining_hours}h remaining")]
    CooldownNotElapsed {
        character_key: String,
        remaining_hours: i64,
    },

    /// No pending application exists for the given applicant.
    #[error("no pending application for this user")]
    NoSuchPending,

    /// The user holds no claimed Efsane to release.
    #[error("user holds no claimed Efsane")]
    NoClaim,
}

impl RosterError {
    /// The Turkish reply text shown to the member whose action was refused.
    pub fn user_message(&self) -> String {
        match self {
            Self::AlreadyClaimed => "❌ Zaten bir Efsane/Karaktere sahipsiniz. Yeni bir başvuru \
                yapabilmek için mevcut karakterinizi `/efsane-birak` komutu ile bırakmalısınız."
                .to_string(),
            Self::AlreadyPending => "❌ Bekleyen bir başvurunuz zaten mevcut. Yeni bir başvuru \
                yapmadan önce mevcut başvurunuzun onaylanmasını/reddedilmesini beklemelisiniz."
                .to_string(),
            Self::CooldownNotElapsed {
                character_key,
                remaining_hours,
            } => format!(
                "❌ **{character_key}** karakterini bırakmak için 2 günlük süreyi doldurmadınız. \
                 Karakteri bırakabilmeniz için yaklaşık **{remaining_hours} saat** daha \
                 beklemeniz gerekmektedir."
            ),
            Self::NoSuchPending => {
                "❌ Bu kullanıcıya ait bekleyen bir başvuru bulunamadı.".to_string()
            }
            Self::NoClaim => {
                "❌ Şu anda sahip olduğunuz bir Efsane/Karakter bulunmamaktadır.".to_string()
            }
        }
    }
}
