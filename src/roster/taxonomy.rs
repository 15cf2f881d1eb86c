//! Static Efsane taxonomy for both rosters.
//!
//! Group order and entry order define the display order of the rendered lists.
//! The tables are read-only at runtime and are not used to validate submitted
//! character names; an application may name anything, including names absent
//! from every group. Some keys appear in more than one group.

/// One claimable character identity in a roster group.
pub struct EfsaneEntry {
    pub key: &'static str,
    pub emoji: &'static str,
    /// Annotation appended after the status, e.g. a permanent-owner marker.
    pub extra: Option<&'static str>,
}

/// An ordered, titled block of character identities.
pub struct EfsaneGroup {
    pub title: &'static str,
    pub names: &'static [EfsaneEntry],
}

const fn entry(key: &'static str, emoji: &'static str) -> EfsaneEntry {
    EfsaneEntry {
        key,
        emoji,
        extra: None,
    }
}

/// Primary "Code-Man RP" roster.
pub const EFSANE_GROUPS: &[EfsaneGroup] = &[
    EfsaneGroup {
        title: "**`———— Herobrine Council - Sahip ————`**",
        names: &[
            entry("GreatMaster", "<:greatmaster:1424455575160230029>"),
            entry("Ares", "<:ares:1444585247596482560>"),
            entry("Brianna", "<:brianna:1424473083191886035>"),
            entry("Raxxan", "<:raxxan:1446196102528372877>"),
            entry("Miskel", "<:miskel:1424473493407531169>"),
            entry("El!Harkos", "<:harkos:1424473385899003954>"),
            entry("Kajaros", "<:kajaros:1446197226534600735>"),
            entry("Okazor", "<:Okazor:1446239149513248858>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Aile Üyeleri ————`**",
        names: &[
            entry("Code-Man", "<:codeman:1444585245650190446>"),
            entry("HHHH", "<:HHHH:1424472850940694751>"),
            entry("IceMan", "<:iceman:1424473345990070292>"),
            entry("TRMC", "<:trmc:1424473703504154705>"),
            entry("Bella", "<:bella:1446198040561062120>"),
            entry("Eyeless_Jack", "<:cEyelessJack:1446198569819308206>"),
            entry("̶L̶a̶d̶y̶", "<:lady:1424473453699924121>"),
            entry("0032", "<:0032:1424472799313006612>"),
            entry("RedcatKK", "<:redcatkk:1446198877387493387>"),
            entry("Binny", "<:binny:1424473045124251678>"),
            entry("Whiterex", "<:Whiterex:1446199170707755149>"),
            entry("Ball-Man", "<:ballman:1424472989860368586>"),
            entry("Collar", "<:collar:1446199538598543382>"),
            entry("$07", "<:07:1424472825170890864>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Çirkinler ————`**",
        names: &[
            entry("Ice-Man", "<:iceman:1424473345990070292>"),
            entry("Hoodie", "<:hoodie:1446199936797376830>"),
            entry(
                "ImmortallSurgentNecromancer",
                "<:necromencer:1446200227542335589>",
            ),
            entry("Shadow Ancient", "<:ShadowAncient:1446200461425250315>"),
            entry("Fanoth", "<:fanoth:1424473229267046634>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Kurbanlar ————`**",
        names: &[
            entry("Fallen", "<:Fallen:1424473252717133854>"),
            entry("Enigma", "<:enigma:1424473202691801120>"),
            entry("Bloodsky.avi", "<:bloodskyavi:1424473062987792414>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Lost Guys ————`**",
        names: &[
            entry("JK", "<:jk:1446200909335105707>"),
            entry("Dwayne", "<:Dwayne:1446200936589561876>"),
            entry("Clay", "<:clay:1446231058415751401>"),
            entry("Jack", "<:jack:1446210793669529640>"),
            entry("Pam", "<:pam:1367254101095874561>"),
            entry("David", "<:david:1367254035282923590>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Ejder Brothers ————`**",
        names: &[
            entry("Драконо рошан / Powah", "<:powah:1424473574839685300>"),
            entry("Драконо повла / Povla", "<:povla:1424473586328015078>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— TFT Brothers ————`**",
        names: &[
            entry("Voidlar", "<:Voidlar:1444715531570647080>"),
            entry("Divior", "<:divior:1424473164049551540>"),
            entry("Bhior", "<:bhior:1424473013922959512>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Rozenberg Family ————`**",
        names: &[
            entry("Samantha", "<:samantha:1446195786143764587>"),
            entry("Kassandra", "<:kassandra:1424473429007929455>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Bash2313 Team ————`**",
        names: &[
            entry("Bash2313", "<:bash:1424472967714443365>"),
            entry("INSANE", "<:insane:1424473401556340746>"),
            entry("Billy", "<:billy:1424473031438241955>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— EXTRA ————`**",
        names: &[
            entry("Marcus", "<:marcus:1424473475086811188>"),
            entry("Entity 303", "<:303:1424455598325633125>"),
            entry("Watchman / Bekçi", "<:watchman:1446230946969030737>"),
            entry("Dr.Reeder", "<:drreeder:1446196165136617534>"),
            entry("Dr.Famous", "<:drfamous:1446196163589181550>"),
            entry("Dr.Pearson", "<:drpearson:1446231114430808074>"),
        ],
    },
    EfsaneGroup {
        title: "**`———— Yıkım Team (1.Sezon) ————`**",
        names: &[
            EfsaneEntry {
                key: "Narzoqh",
                emoji: "<:Narzoqh:1446231305766305969>",
                extra: Some(" - **`SAHİP`**"),
            },
            entry("GlitchBrine", "<:glitchbrine:1446231363287253162>"),
            entry("EntityZero", "<:EntityZero:1446231387211563008>"),
            entry("Error422", "<:EntityZero:1446231387211563008>"),
            entry("Vlrr", "<:Vllr:1446231469134446694>"),
            entry("EnderBrine", "<:EnderBrine:1446218936436658349>"),
            entry("Brine", "<:brine:1446218934218129470>"),
            entry("GreenSteve", "<:GreenSteve:1446218932053610496>"),
        ],
    },
];

/// Secondary "Efsanevi Dünya" roster.
pub const EFSANEVI_DUNYA_GROUPS: &[EfsaneGroup] = &[
    EfsaneGroup {
        title: "`———— BoraLo Köyü————`",
        names: &[
            entry("BoraLo", "<:BoraLo:1424455645272473763>"),
            entry("CatalinaLo", "<:catalina:1446195945506082876>"),
            entry("BarsLo", "<:barslo:1446195947792105652>"),
            entry("Coco", "<:coco:1446195949289345146>"),
            entry("Zoco", "<:zoco:1446195952863019201>"),
            entry("Buğra", "<:bugra:1446195954364715273>"),
            entry("Bobby1545", "<:bobby1545:1424455631871672491>"),
            entry("Kevin1545", "<:kevin:1446195846554193940>"),
            entry("Cevdet", "<:cevdet:1446195950845690049>"),
        ],
    },
    EfsaneGroup {
        title: "`———— 1545+ ————`",
        names: &[
            entry("Zoggy1545", "<:zoggy1545:1446195958911340666>"),
            entry("Mikula1545", "<:mikula:1446196169855209583>"),
            entry("Earl1545", "<:earl:1446195844910153728>"),
            entry("Dave1545", "<:dave:1446195848202555576>"),
            entry("Chris1545", "<:chris:1446195849620099204>"),
            entry("Blank1545", "<:blank:1446196168253247719>"),
            entry("Wynne1545", "<:wynne:1446195774898831547>"),
            entry("Anna1545", "<:anna:1446195777079611476>"),
        ],
    },
    EfsaneGroup {
        title: "`———— Düşmanlar ————`",
        names: &[
            entry("Turkish Minecraft Legends", "<:trmc:1424473703504154705>"),
            entry("Zeku", "<:zeku:1446195781114794185>"),
            entry("Murdoch", "<:murdoch:1446195782666420225>"),
        ],
    },
    EfsaneGroup {
        title: "`———— & ————`",
        names: &[
            entry("Kassandra", "<:kassandra:1424473429007929455>"),
            entry("Samantha", "<:samantha:1446195786143764587>"),
            entry("DistortedAlex", "<:distortedalex:1446195695135621253>"),
        ],
    },
    EfsaneGroup {
        title: "`———— Yabanci Efsaneler ————`",
        names: &[
            entry("El-Lick", "<:ellick:1446195696536391691>"),
            entry("El-Dra", "<:Eldra:1446195698365104251>"),
        ],
    },
    EfsaneGroup {
        title: "`———— Resist The Force ————`",
        names: &[
            entry("Rapporteur", "<:Rapporteur:1446195700529631332>"),
            entry("pds1dsa", "<:pds:1446195702144434266>"),
            entry("pds2dsa", "<:pds:1446195702144434266>"),
            entry("cds2dsa", "<:pds:1446195702144434266>"),
            entry("?pds?1dsa", "<:pds:1446195702144434266>"),
            entry("?3pds?1dsa", "<:pds:1446195702144434266>"),
        ],
    },
];
