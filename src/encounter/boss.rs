//! Boss unlock, summon and spawn rules.

use bevy::prelude::*;

use super::cutscene::start_cutscene;
use super::narrator::boss_offer_message;
use crate::deferred::{DeferredAction, ScheduledTasks};
use crate::shared::*;

pub const BOSS_ENEMY_ID: &str = "boss-dragon";

/// Insert the boss dragon unless one is already on the roster.
pub fn spawn_boss(roster: &mut EnemyRoster, config: &GameConfig) -> bool {
    if roster.has_kind(EnemyKind::BossDragon) {
        return false;
    }

    let mut boss = Enemy::new(
        BOSS_ENEMY_ID,
        EnemyKind::BossDragon,
        config.boss_spawn_x,
        config.boss_spawn_y,
    );
    boss.health = config.boss_health;
    boss.max_health = config.boss_health;
    roster.enemies.push(boss);

    info!(
        "Boss spawned at ({}, {}) with {} HP",
        config.boss_spawn_x, config.boss_spawn_y, config.boss_health
    );
    true
}

/// Move to `target`. Entering the boss arena for the first time plays the
/// boss-appear cutscene and queues the spawn. Returns true if the boss
/// was summoned by this call.
pub fn enter_location(
    target: Location,
    encounter: &mut EncounterState,
    roster: &EnemyRoster,
    cutscene: &mut CutscenePlayer,
    tasks: &mut ScheduledTasks,
    config: &GameConfig,
) -> bool {
    if encounter.location != target {
        info!("Location: {:?} -> {:?}", encounter.location, target);
    }
    encounter.location = target;

    if target != Location::BossArena
        || encounter.boss_summoned
        || roster.has_kind(EnemyKind::BossDragon)
    {
        return false;
    }

    encounter.boss_summoned = true;
    start_cutscene(cutscene, CutsceneKind::BossAppear);
    tasks.schedule(config.boss_spawn_delay(), DeferredAction::SpawnBoss);
    true
}

/// Latch the boss unlock once enough enemies are down and queue the
/// narrator's offer. Returns true only on the call that latches.
pub fn check_boss_unlock(
    encounter: &mut EncounterState,
    roster: &EnemyRoster,
    tasks: &mut ScheduledTasks,
    config: &GameConfig,
) -> bool {
    if encounter.boss_unlocked || roster.defeated_count() < config.boss_unlock_kills {
        return false;
    }

    encounter.boss_unlocked = true;
    info!("Boss unlocked after {} defeats", roster.defeated_count());
    tasks.schedule(
        config.narrator_delay(),
        DeferredAction::ShowNarrator(boss_offer_message()),
    );
    true
}
