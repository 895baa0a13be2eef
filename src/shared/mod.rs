//! Shared components, resources, events, and states for Last Warrior.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain's internals directly; the rule
//! helpers each domain exposes operate on the resources defined below.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use crate::data::config::GameConfig;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// Mirrors [`CutscenePlayer`] once loading is done. The resource is the
/// source of truth; `session::sync_game_state` keeps this in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Cutscene,
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Facing {
    fn default() -> Self {
        Facing::Down
    }
}

impl Facing {
    /// Evaluation order for held keys. Later entries win on a shared axis.
    pub const PRECEDENCE: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub max_health: u32,
    pub facing: Facing,
    pub attacking: bool,
    /// Weak references into [`Inventory`] by item id.
    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 250.0,
            health: 100,
            max_health: 100,
            facing: Facing::Down,
            attacking: false,
            equipped_weapon: Some("1".to_string()),
            equipped_armor: None,
        }
    }
}

/// Playable characters. Each has its own speed, damage multiplier and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Dog,
    Parrot,
}

impl Character {
    pub fn other(self) -> Self {
        match self {
            Character::Dog => Character::Parrot,
            Character::Parrot => Character::Dog,
        }
    }
}

pub const DOG_GLYPHS: [&str; 5] = ["🐕", "🐶", "🦮", "🐕‍🦺", "🐩"];
pub const PARROT_GLYPHS: [&str; 5] = ["🦜", "🦅", "🦉", "🕊️", "🦚"];

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub selected: Character,
    pub dog_glyph: String,
    pub parrot_glyph: String,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            selected: Character::Dog,
            dog_glyph: DOG_GLYPHS[0].to_string(),
            parrot_glyph: PARROT_GLYPHS[0].to_string(),
        }
    }
}

impl CharacterState {
    pub fn glyph(&self) -> &str {
        match self.selected {
            Character::Dog => &self.dog_glyph,
            Character::Parrot => &self.parrot_glyph,
        }
    }

    /// Per-tick movement speed of the selected character.
    pub fn speed(&self, config: &GameConfig) -> f32 {
        match self.selected {
            Character::Dog => config.dog_speed,
            Character::Parrot => config.parrot_speed,
        }
    }

    pub fn damage_multiplier(&self, config: &GameConfig) -> f32 {
        match self.selected {
            Character::Dog => 1.0,
            Character::Parrot => config.parrot_damage_multiplier,
        }
    }
}

/// Movement keys currently held down. Transient input state.
#[derive(Resource, Debug, Clone, Default)]
pub struct HeldKeys {
    pub directions: HashSet<Facing>,
}

impl HeldKeys {
    pub fn is_held(&self, facing: Facing) -> bool {
        self.directions.contains(&facing)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item kind. String ids keep the data tables
/// readable ("iron", "iron-sword", and the legacy numeric "1"/"2").
pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Material,
    Armor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub icon: String,
    pub count: u32,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
}

impl InventoryItem {
    pub fn material(id: &str, name: &str, icon: &str, count: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: ItemCategory::Material,
            icon: icon.to_string(),
            count,
            attack: None,
            defense: None,
        }
    }
}

/// Ordered list of items, at most one entry per id.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    /// Stack onto an existing entry with the same id, or append a new one.
    pub fn add_item(&mut self, item: InventoryItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.count += item.count;
        } else {
            self.items.push(item);
        }
    }

    /// Remove `quantity` of an item. Returns false (and changes nothing) if
    /// there are not enough. An entry whose count reaches 0 is dropped.
    pub fn try_remove(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id == item_id) else {
            return false;
        };
        if self.items[index].count < quantity {
            return false;
        }
        self.items[index].count -= quantity;
        if self.items[index].count == 0 {
            self.items.remove(index);
        }
        true
    }

    pub fn get(&self, item_id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.get(item_id).map(|i| i.count).unwrap_or(0)
    }

    pub fn has(&self, item_id: &str, quantity: u32) -> bool {
        self.count(item_id) >= quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CRAFTING: static reference data
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub icon: String,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub materials: Vec<(ItemId, u32)>, // (item_id, required count)
}

impl Recipe {
    /// The single item a successful craft produces.
    pub fn output(&self) -> InventoryItem {
        InventoryItem {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            icon: self.icon.clone(),
            count: 1,
            attack: self.attack,
            defense: self.defense,
        }
    }
}

/// Recipe catalog in display order.
#[derive(Resource, Debug, Clone, Default)]
pub struct RecipeRegistry {
    pub recipes: Vec<Recipe>,
}

impl RecipeRegistry {
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ENEMIES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    CatWarrior,
    CatMage,
    CatAssassin,
    CatTank,
    CatBoss,
    BossDragon,
}

impl EnemyKind {
    pub fn glyph(self) -> &'static str {
        match self {
            EnemyKind::CatWarrior => "😾",
            EnemyKind::CatMage => "🙀",
            EnemyKind::CatAssassin => "😿",
            EnemyKind::CatTank => "😼",
            EnemyKind::CatBoss => "😼",
            EnemyKind::BossDragon => "🐉🔥",
        }
    }

    pub fn base_health(self) -> u32 {
        match self {
            EnemyKind::CatWarrior => 50,
            EnemyKind::CatMage => 80,
            EnemyKind::CatAssassin => 40,
            EnemyKind::CatTank => 120,
            EnemyKind::CatBoss => 200,
            EnemyKind::BossDragon => 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub max_health: u32,
    pub kind: EnemyKind,
    pub alive: bool,
}

impl Enemy {
    pub fn new(id: &str, kind: EnemyKind, x: f32, y: f32) -> Self {
        let health = kind.base_health();
        Self {
            id: id.to_string(),
            x,
            y,
            health,
            max_health: health,
            kind,
            alive: true,
        }
    }
}

/// Every enemy of the session. Dead enemies stay in the list with
/// `alive == false`; the roster only ever grows.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<Enemy>,
}

impl EnemyRoster {
    pub fn defeated_count(&self) -> usize {
        self.enemies.iter().filter(|e| !e.alive).count()
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    pub fn has_kind(&self, kind: EnemyKind) -> bool {
        self.enemies.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUESTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub progress: u32,
    pub goal: u32,
}

impl Quest {
    pub fn new(id: &str, title: &str, description: &str, goal: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            progress: 0,
            goal,
        }
    }
}

/// Quest list in display order. Quests are never removed.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quests: Vec<Quest>,
}

impl QuestLog {
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ENCOUNTER: locations, boss, cutscenes, narrator
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Kingdom,
    Mine,
    BossArena,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct EncounterState {
    pub location: Location,
    /// Latch: five cumulative kills.
    pub boss_unlocked: bool,
    /// Latch: the boss-appear cutscene fired and the spawn is scheduled.
    pub boss_summoned: bool,
    /// Latch: the first cutscene was dismissed and the HUD is shown.
    pub hud_revealed: bool,
}

impl Default for EncounterState {
    fn default() -> Self {
        Self {
            location: Location::Kingdom,
            boss_unlocked: false,
            boss_summoned: false,
            hud_revealed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutsceneKind {
    Intro,
    BossAppear,
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CutsceneFrame {
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CutsceneScript {
    pub title: &'static str,
    pub frames: &'static [CutsceneFrame],
}

/// The cutscene being shown, if any, and its current frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct CutscenePlayer {
    pub active: Option<CutsceneKind>,
    pub frame: usize,
}

impl CutscenePlayer {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarratorMessage {
    pub text: String,
    /// Quest the player may accept from this message.
    pub offer: Option<Quest>,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrator {
    pub message: Option<NarratorMessage>,
}

// ═══════════════════════════════════════════════════════════════════════
// MENUS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Menu {
    Crafting,
    Inventory,
    Quests,
    Customization,
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuVisibility {
    pub crafting: bool,
    pub inventory: bool,
    pub quests: bool,
    pub customization: bool,
}

impl MenuVisibility {
    pub fn is_open(&self, menu: Menu) -> bool {
        match menu {
            Menu::Crafting => self.crafting,
            Menu::Inventory => self.inventory,
            Menu::Quests => self.quests,
            Menu::Customization => self.customization,
        }
    }

    pub fn toggle(&mut self, menu: Menu) {
        let flag = match menu {
            Menu::Crafting => &mut self.crafting,
            Menu::Inventory => &mut self.inventory,
            Menu::Quests => &mut self.quests,
            Menu::Customization => &mut self.customization,
        };
        *flag = !*flag;
    }

    pub fn any_open(&self) -> bool {
        self.crafting || self.inventory || self.quests || self.customization
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS: the command boundary and cross-domain notifications
// ═══════════════════════════════════════════════════════════════════════

/// Every user intent enters the simulation through this event, whether it
/// comes from the keyboard adapter, the presentation layer or a test.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum GameCommand {
    /// A movement key went down; integrated every fixed tick while held.
    HoldMove(Facing),
    ReleaseMove(Facing),
    /// Discrete one-step move from the touch controls.
    Step(Facing),
    Attack,
    ToggleMenu(Menu),
    ChangeLocation(Location),
    SelectCharacter(Character),
    Customize { dog_glyph: String, parrot_glyph: String },
    Craft(String),
    Equip(ItemId),
    AcceptNarratorQuest,
    DismissNarrator,
    AdvanceCutscene,
    DismissCutscene,
}

/// Systems that turn device input into [`GameCommand`]s. Anything that must
/// see this frame's commands before the fixed tick orders after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmitCommands;

/// The single consumer of [`GameCommand`]s. Commands are applied one at a
/// time in the order they were sent, after [`EmitCommands`] and before the
/// frame's fixed steps.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplyCommands;

/// Emitted once per quest when it first becomes completed.
#[derive(Event, Debug, Clone)]
pub struct QuestCompletedEvent {
    pub quest_id: String,
    pub title: String,
}

// ═══════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// True while gameplay input (movement, attack, menu shortcuts) is accepted.
pub fn gameplay_input_allowed(cutscene: &CutscenePlayer) -> bool {
    !cutscene.is_active()
}
