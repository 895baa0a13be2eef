//! Inventory and crafting: recipe crafting and equipment slots.

use bevy::prelude::*;
use crate::shared::*;

mod bench;

pub use bench::{can_craft, craft, equip, IRON_SWORD_RECIPE_ID};

/// Craft by recipe id, as requested from the crafting menu or the number keys.
pub fn craft_recipe(
    recipe_registry: &RecipeRegistry,
    inventory: &mut Inventory,
    quest_log: &mut QuestLog,
    recipe_id: &str,
) -> bool {
    let Some(recipe) = recipe_registry.get(recipe_id) else {
        warn!("Craft requested for unknown recipe '{}'", recipe_id);
        return false;
    };

    let crafted = craft(inventory, quest_log, recipe);
    if crafted {
        info!("Crafted {} {}", recipe.icon, recipe.name);
    } else {
        debug!("Not enough materials for {}", recipe.name);
    }
    crafted
}

pub fn equip_item(player: &mut PlayerState, inventory: &Inventory, item_id: &str) -> bool {
    let equipped = equip(player, inventory, item_id);
    if equipped {
        info!("Equipped {}", item_id);
    } else {
        debug!("Cannot equip '{}'", item_id);
    }
    equipped
}
