//! Narrative cutscene scripts, one per [`CutsceneKind`].

use crate::shared::*;

static INTRO: CutsceneScript = CutsceneScript {
    title: "🏰 FALL OF THE KINGDOM",
    frames: &[
        CutsceneFrame {
            text: "Long ago, dogs and cats lived in peace...",
            image: "🏰🐕🤝🐱",
        },
        CutsceneFrame {
            text: "But the wicked Cat Alpha craved power over every kingdom!",
            image: "😼👑⚡",
        },
        CutsceneFrame {
            text: "He gathered an army of cats and attacked the Kingdom of Dogs...",
            image: "😾😾😾⚔️🏰",
        },
        CutsceneFrame {
            text: "King Doggy fell in battle. You are the last warrior!",
            image: "🐕💔⚔️",
        },
        CutsceneFrame {
            text: "Pierre the parrot and Gal the goose will help you take revenge!",
            image: "🦜🦢🐕✨",
        },
    ],
};

static BOSS_APPEAR: CutsceneScript = CutsceneScript {
    title: "⚡ THE BOSS APPEARS",
    frames: &[
        CutsceneFrame {
            text: "The ground trembles... A shadow crosses the sky!",
            image: "🌩️☁️",
        },
        CutsceneFrame {
            text: "CAT ALPHA RIDING A DRAGON!",
            image: "😼🐉🔥",
        },
        CutsceneFrame {
            text: "This is your chance to avenge the kingdom!",
            image: "🐕⚔️🔥",
        },
    ],
};

static VICTORY: CutsceneScript = CutsceneScript {
    title: "👑 VICTORY",
    frames: &[
        CutsceneFrame {
            text: "Cat Alpha is defeated!",
            image: "😼💥❌",
        },
        CutsceneFrame {
            text: "The Kingdom of Dogs is saved!",
            image: "🏰✨🎉",
        },
        CutsceneFrame {
            text: "You have become a legend! 🏆",
            image: "🐕👑⭐",
        },
    ],
};

pub fn script(kind: CutsceneKind) -> &'static CutsceneScript {
    match kind {
        CutsceneKind::Intro => &INTRO,
        CutsceneKind::BossAppear => &BOSS_APPEAR,
        CutsceneKind::Victory => &VICTORY,
    }
}
