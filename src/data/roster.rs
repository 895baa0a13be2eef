//! Starting world: enemy roster, quest list and the player's pack.

use crate::quests::{ARMORER_QUEST_ID, SLAY_QUEST_ID};
use crate::shared::*;

/// Materials the mine can drop: (id, name, icon).
pub const MINE_MATERIALS: [(&str, &str, &str); 3] = [
    ("coal", "Coal", "🪨"),
    ("iron", "Iron", "⚙️"),
    ("gold", "Gold", "✨"),
];

pub fn populate_roster(roster: &mut EnemyRoster) {
    roster.enemies = vec![
        Enemy::new("e1", EnemyKind::CatWarrior, 300.0, 200.0),
        Enemy::new("e2", EnemyKind::CatWarrior, 500.0, 300.0),
        Enemy::new("e3", EnemyKind::CatMage, 650.0, 150.0),
        Enemy::new("e4", EnemyKind::CatAssassin, 200.0, 400.0),
        Enemy::new("e5", EnemyKind::CatWarrior, 420.0, 420.0),
        Enemy::new("e6", EnemyKind::CatTank, 600.0, 420.0),
        Enemy::new("e7", EnemyKind::CatMage, 150.0, 120.0),
        Enemy::new("e8", EnemyKind::CatBoss, 700.0, 260.0),
    ];
}

pub fn populate_quests(quest_log: &mut QuestLog) {
    quest_log.quests = vec![
        Quest::new(
            SLAY_QUEST_ID,
            "Revenge for the King",
            "Defeat 5 cat soldiers",
            5,
        ),
        Quest::new(ARMORER_QUEST_ID, "Armorer", "Craft an iron sword", 1),
    ];
}

pub fn populate_inventory(inventory: &mut Inventory) {
    inventory.items = vec![
        InventoryItem {
            id: "1".into(),
            name: "Wooden Sword".into(),
            category: ItemCategory::Weapon,
            icon: "🗡️".into(),
            count: 1,
            attack: Some(10),
            defense: None,
        },
        InventoryItem::material("2", "Wood", "🪵", 5),
    ];
}
