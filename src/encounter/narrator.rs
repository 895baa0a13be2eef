//! The goose narrator: advisory messages, optionally carrying a quest offer.

use bevy::prelude::*;

use crate::quests::{append_quest, boss_quest};
use crate::shared::*;

pub fn welcome_message() -> NarratorMessage {
    NarratorMessage {
        text: "Honk! I'm Gal the goose. Defeat the cats, gather ore in the mine \
               and forge better weapons. I'll be watching!"
            .to_string(),
        offer: None,
    }
}

pub fn boss_offer_message() -> NarratorMessage {
    NarratorMessage {
        text: "Honk honk! Cat Alpha has noticed you. Face him in the boss arena \
               and avenge the king?"
            .to_string(),
        offer: Some(boss_quest()),
    }
}

/// Replaces whatever message is currently shown.
pub fn show_narrator(narrator: &mut Narrator, message: NarratorMessage) {
    info!("Narrator: {}", message.text);
    narrator.message = Some(message);
}

/// Accept the current offer, if any, and close the message. Returns true
/// if a quest was added to the log.
pub fn accept_offer(narrator: &mut Narrator, quest_log: &mut QuestLog) -> bool {
    let Some(message) = narrator.message.take() else {
        return false;
    };
    let Some(quest) = message.offer else {
        return false;
    };

    let title = quest.title.clone();
    let added = append_quest(quest_log, quest);
    if added {
        info!("Quest accepted: {}", title);
    }
    added
}

/// Close the message without touching quests.
pub fn dismiss_narrator(narrator: &mut Narrator) -> bool {
    narrator.message.take().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quests::BOSS_QUEST_ID;

    #[test]
    fn test_accept_appends_offer_once() {
        let mut narrator = Narrator::default();
        let mut quests = QuestLog::default();

        show_narrator(&mut narrator, boss_offer_message());
        assert!(accept_offer(&mut narrator, &mut quests));
        assert!(narrator.message.is_none());

        show_narrator(&mut narrator, boss_offer_message());
        assert!(!accept_offer(&mut narrator, &mut quests));
        assert_eq!(quests.quests.len(), 1);
        assert_eq!(quests.quests[0].id, BOSS_QUEST_ID);
    }

    #[test]
    fn test_decline_leaves_quests_unchanged() {
        let mut narrator = Narrator::default();
        let mut quests = QuestLog::default();

        show_narrator(&mut narrator, boss_offer_message());
        assert!(dismiss_narrator(&mut narrator));
        assert!(quests.quests.is_empty());
        assert!(!accept_offer(&mut narrator, &mut quests));
    }

    #[test]
    fn test_accepting_plain_message_just_closes_it() {
        let mut narrator = Narrator::default();
        let mut quests = QuestLog::default();

        show_narrator(&mut narrator, welcome_message());
        assert!(!accept_offer(&mut narrator, &mut quests));
        assert!(narrator.message.is_none());
        assert!(quests.quests.is_empty());
    }
}
