//! Rendering of roster state into the Discord list text.
//!
//! `render_list` is a pure function of the taxonomy and the store: one header
//! line per group, one line per entry showing the owner mention for claimed
//! names and `N/A` otherwise. Pending applications are not visually
//! distinguished from free names. No length limit is enforced here; splitting
//! to transport-sized messages is the paginator's job.

use crate::roster::store::RosterStore;
use crate::roster::taxonomy::EfsaneGroup;

/// Header of the primary roster.
pub const EFSANE_LIST_HEADER: &str =
    "# <:Codeman:1445949073940156559> **| Code-Man RP Soy Ağacı ve Efsane Listesi**";

/// Header of the secondary-world roster.
pub const EFSANEVI_DUNYA_HEADER: &str =
    "# <:boralo:1446308753241673849> | BoraLo Efsanevi Dünya Soy Ağacı ";

/// Static rules footer appended to both rosters.
pub const RULE_BLOCK: &str = "\n# <:emoji_12:1395844039164821646> **Kurallar**\n\
<:alt:1395843867063877693> **2 Günde Bir Efsane Değiştirebilirsiniz.**\n\
<:alt:1395843867063877693> **Torpil Yoktur. Herkes Form Atmak Zorundadır.**\n\
<:alt:1395843867063877693> **Maximium Mazaret Günü 3'dür Önemliyse 5 Olabilir.**\n\
<:alt:1395843867063877693> **Soy Ağacı Her Gün Sonu Düzenlenmelidir.**\n";

/// Placeholder body used when a rendered list comes out empty.
pub const EMPTY_LIST_PLACEHOLDER: &str = "Liste içeriği boş.";

/// Renders the group blocks of one roster (without header and rules).
pub fn render_list(groups: &[EfsaneGroup], store: &RosterStore) -> String {
    let mut content = String::new();
    for group in groups {
        content.push_str(&format!("\n{}\n\n", group.title));
        for efsane in group.names {
            let status = match store.claim(efsane.key) {
                Some(record) => format!("{} » <@{}>", efsane.key, record.user_id),
                None => format!("**{}** **» N/A**", efsane.key),
            };
            content.push_str(&format!(
                "{} {}{}\n",
                efsane.emoji,
                status,
                efsane.extra.unwrap_or("")
            ));
        }
    }
    content
}

/// Renders one complete roster message body: header, groups, rules footer.
pub fn render_full(header: &str, groups: &[EfsaneGroup], store: &RosterStore) -> String {
    format!("{}{}{}", header, render_list(groups, store), RULE_BLOCK)
}
