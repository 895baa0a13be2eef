//! Combat domain: melee attacks, kills and their side effects.
//!
//! An attack hits every living enemy strictly within melee range of the
//! player. Each kill then advances the slay quest, drops mine loot when the
//! player is in the mine, and for the dragon boss completes the boss quest
//! and queues the victory cutscene. The attack locks out further attacks
//! and held-key movement until the recovery task fires.

pub mod loot;
pub mod resolve;

use bevy::prelude::*;

use crate::deferred::{DeferredAction, ScheduledTasks};
use crate::quests::{force_complete, record_kill, BOSS_QUEST_ID};
use crate::shared::*;
use resolve::{attack_damage, resolve_attack, Kill};

/// Swing once from the player's current position.
///
/// Ignored while a cutscene is showing or an earlier swing is still
/// recovering. Returns true if the swing happened.
#[allow(clippy::too_many_arguments)]
pub fn player_attack(
    config: &GameConfig,
    character: &CharacterState,
    encounter: &EncounterState,
    cutscene: &CutscenePlayer,
    player: &mut PlayerState,
    inventory: &mut Inventory,
    roster: &mut EnemyRoster,
    quest_log: &mut QuestLog,
    tasks: &mut ScheduledTasks,
) -> bool {
    if !gameplay_input_allowed(cutscene) {
        debug!("Attack ignored during cutscene");
        return false;
    }
    if player.attacking {
        debug!("Attack ignored: still recovering");
        return false;
    }

    player.attacking = true;
    tasks.schedule(config.attack_recovery(), DeferredAction::EndAttack);

    let damage = attack_damage(player, inventory, character, config);
    let kills = resolve_attack(
        roster,
        Vec2::new(player.x, player.y),
        damage,
        config.melee_range,
    );

    for kill in kills {
        apply_kill(&kill, config, encounter, inventory, quest_log, tasks);
    }
    true
}

/// Side effects of one kill, in order: quest progress, loot, boss victory.
fn apply_kill(
    kill: &Kill,
    config: &GameConfig,
    encounter: &EncounterState,
    inventory: &mut Inventory,
    quest_log: &mut QuestLog,
    tasks: &mut ScheduledTasks,
) {
    info!("Defeated {:?} ({})", kill.kind, kill.enemy_id);
    record_kill(quest_log);

    if encounter.location == Location::Mine {
        let item = loot::roll_mine_loot(&mut rand::thread_rng());
        info!("Loot: {} {}", item.icon, item.name);
        inventory.add_item(item);
    }

    if kill.kind == EnemyKind::BossDragon {
        force_complete(quest_log, BOSS_QUEST_ID);
        tasks.schedule(
            config.victory_delay(),
            DeferredAction::StartCutscene(CutsceneKind::Victory),
        );
    }
}
