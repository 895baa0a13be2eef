use crate::quests::{force_complete, ARMORER_QUEST_ID};
use crate::shared::*;

/// Recipe whose first craft finishes the armorer quest.
pub const IRON_SWORD_RECIPE_ID: &str = "iron-sword";

/// True if the inventory holds every material the recipe needs.
pub fn can_craft(inventory: &Inventory, recipe: &Recipe) -> bool {
    recipe
        .materials
        .iter()
        .all(|(item_id, qty)| inventory.has(item_id, *qty))
}

/// Consume the recipe's materials and add its output.
///
/// Infeasible crafts change nothing and return false. Feasibility is checked
/// up front so a partial subtraction can never happen.
pub fn craft(inventory: &mut Inventory, quest_log: &mut QuestLog, recipe: &Recipe) -> bool {
    if !can_craft(inventory, recipe) {
        return false;
    }

    for (item_id, qty) in &recipe.materials {
        inventory.try_remove(item_id, *qty);
    }
    inventory.add_item(recipe.output());

    if recipe.id == IRON_SWORD_RECIPE_ID {
        force_complete(quest_log, ARMORER_QUEST_ID);
    }
    true
}

/// Put a carried weapon or armor piece into its slot. Unknown ids and
/// materials are ignored.
pub fn equip(player: &mut PlayerState, inventory: &Inventory, item_id: &str) -> bool {
    let Some(item) = inventory.get(item_id) else {
        return false;
    };

    match item.category {
        ItemCategory::Weapon => player.equipped_weapon = Some(item.id.clone()),
        ItemCategory::Armor => player.equipped_armor = Some(item.id.clone()),
        ItemCategory::Material => return false,
    }
    true
}
