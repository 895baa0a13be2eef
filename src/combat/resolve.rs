//! Melee hit resolution against the enemy roster.

use bevy::prelude::*;
use crate::shared::*;

/// An enemy that went from alive to dead during one attack.
#[derive(Debug, Clone, PartialEq)]
pub struct Kill {
    pub enemy_id: String,
    pub kind: EnemyKind,
}

/// Damage of one swing: the equipped weapon's attack (unarmed if the slot
/// is empty or points at an item that is no longer carried), scaled by the
/// character multiplier.
pub fn attack_damage(
    player: &PlayerState,
    inventory: &Inventory,
    character: &CharacterState,
    config: &GameConfig,
) -> u32 {
    let base = player
        .equipped_weapon
        .as_deref()
        .and_then(|id| inventory.get(id))
        .and_then(|item| item.attack)
        .unwrap_or(config.unarmed_attack);

    (base as f32 * character.damage_multiplier(config)).round() as u32
}

/// Apply `damage` to every living enemy strictly within `range` of the
/// origin. Health saturates at 0. Returns the kills in roster order.
pub fn resolve_attack(
    roster: &mut EnemyRoster,
    origin: Vec2,
    damage: u32,
    range: f32,
) -> Vec<Kill> {
    let mut kills = Vec::new();

    for enemy in roster.enemies.iter_mut().filter(|e| e.alive) {
        if Vec2::new(enemy.x, enemy.y).distance(origin) >= range {
            continue;
        }

        enemy.health = enemy.health.saturating_sub(damage);
        if enemy.health == 0 {
            enemy.alive = false;
            kills.push(Kill {
                enemy_id: enemy.id.clone(),
                kind: enemy.kind,
            });
        }
    }

    kills
}
