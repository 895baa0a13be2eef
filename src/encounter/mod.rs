//! Encounter state machine: locations, the boss, cutscenes and the narrator.
//!
//! ```text
//! intro → free roam (kingdom | mine) → boss appears → free roam (arena)
//!       → victory → free roam (arena)
//! ```
//!
//! Location changes are never gated. The first trip to the arena summons
//! the boss; the spawn itself is a deferred task so it lands even if the
//! boss-appear cutscene is still on screen.

mod boss;
mod cutscene;
mod narrator;

use bevy::prelude::*;

use crate::deferred::{DeferredAction, ScheduledTasks};
use crate::shared::*;

pub use boss::{check_boss_unlock, enter_location, spawn_boss, BOSS_ENEMY_ID};
pub use cutscene::{advance_cutscene, current_frame, dismiss_cutscene, start_cutscene, CutsceneStep};
pub use narrator::{accept_offer, boss_offer_message, dismiss_narrator, show_narrator, welcome_message};

pub struct EncounterPlugin;

impl Plugin for EncounterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, watch_roster_for_unlock);
    }
}

/// Advance the showing cutscene one frame, or close it outright when `skip`
/// is set. Returns the kind that closed, if any.
pub fn cutscene_input(
    skip: bool,
    cutscene: &mut CutscenePlayer,
    encounter: &mut EncounterState,
    tasks: &mut ScheduledTasks,
    config: &GameConfig,
) -> Option<CutsceneKind> {
    let dismissed = if skip {
        dismiss_cutscene(cutscene)
    } else {
        match advance_cutscene(cutscene) {
            CutsceneStep::Dismissed(kind) => Some(kind),
            _ => None,
        }
    };

    if let Some(kind) = dismissed {
        on_cutscene_closed(kind, encounter, tasks, config);
    }
    dismissed
}

/// The first dismissal of any cutscene, not only the intro, reveals the HUD
/// and queues the narrator's welcome.
pub fn on_cutscene_closed(
    kind: CutsceneKind,
    encounter: &mut EncounterState,
    tasks: &mut ScheduledTasks,
    config: &GameConfig,
) {
    if encounter.hud_revealed {
        return;
    }
    encounter.hud_revealed = true;
    info!("HUD revealed after {:?}", kind);

    tasks.schedule(
        config.narrator_delay(),
        DeferredAction::ShowNarrator(welcome_message()),
    );
}

/// Re-evaluates the unlock latch whenever the roster changes.
fn watch_roster_for_unlock(
    config: Res<GameConfig>,
    roster: Res<EnemyRoster>,
    mut encounter: ResMut<EncounterState>,
    mut tasks: ResMut<ScheduledTasks>,
) {
    if !roster.is_changed() {
        return;
    }
    check_boss_unlock(&mut encounter, &roster, &mut tasks, &config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intro_close_reveals_hud_and_queues_welcome() {
        let config = GameConfig::default();
        let mut encounter = EncounterState::default();
        let mut tasks = ScheduledTasks::default();

        on_cutscene_closed(CutsceneKind::Intro, &mut encounter, &mut tasks, &config);
        assert!(encounter.hud_revealed);
        assert!(tasks.any_pending(&DeferredAction::ShowNarrator(welcome_message())));

        on_cutscene_closed(CutsceneKind::Victory, &mut encounter, &mut tasks, &config);
        assert!(encounter.hud_revealed, "latch never resets");
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_first_close_of_boss_scene_still_queues_welcome() {
        let config = GameConfig::default();
        let mut encounter = EncounterState::default();
        let mut tasks = ScheduledTasks::default();

        on_cutscene_closed(CutsceneKind::BossAppear, &mut encounter, &mut tasks, &config);
        assert!(encounter.hud_revealed);
        assert!(tasks.any_pending(&DeferredAction::ShowNarrator(welcome_message())));
    }

    #[test]
    fn test_advancing_past_last_frame_closes_cutscene() {
        let config = GameConfig::default();
        let mut encounter = EncounterState::default();
        let mut tasks = ScheduledTasks::default();
        let mut cutscene = CutscenePlayer::default();
        start_cutscene(&mut cutscene, CutsceneKind::Intro);

        let mut closed = None;
        for _ in 0..32 {
            closed = cutscene_input(false, &mut cutscene, &mut encounter, &mut tasks, &config);
            if closed.is_some() {
                break;
            }
        }
        assert_eq!(closed, Some(CutsceneKind::Intro));
        assert!(!cutscene.is_active());
        assert!(encounter.hud_revealed);
    }
}
