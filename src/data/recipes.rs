use crate::shared::*;

/// Populate the RecipeRegistry with the forge's weapon and armor recipes.
///
/// Material ids refer to inventory entries: "iron", "gold" and "coal" drop
/// in the mine, "2" is the starting wood.
pub fn populate_recipes(registry: &mut RecipeRegistry) {
    registry.recipes = vec![
        Recipe {
            id: "iron-sword".into(),
            name: "Iron Sword".into(),
            category: ItemCategory::Weapon,
            icon: "⚔️".into(),
            attack: Some(25),
            defense: None,
            materials: vec![("iron".into(), 3), ("2".into(), 2)],
        },
        Recipe {
            id: "gold-sword".into(),
            name: "Golden Sword".into(),
            category: ItemCategory::Weapon,
            icon: "🗡️".into(),
            attack: Some(40),
            defense: None,
            materials: vec![("gold".into(), 5), ("iron".into(), 2)],
        },
        Recipe {
            id: "iron-armor".into(),
            name: "Iron Armor".into(),
            category: ItemCategory::Armor,
            icon: "🛡️".into(),
            attack: None,
            defense: Some(15),
            materials: vec![("iron".into(), 5)],
        },
        Recipe {
            id: "pickaxe".into(),
            name: "Pickaxe".into(),
            category: ItemCategory::Weapon,
            icon: "⛏️".into(),
            attack: Some(15),
            defense: None,
            materials: vec![("iron".into(), 2), ("2".into(), 3)],
        },
    ];
}
