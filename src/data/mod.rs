//! Data layer: seeds the session at startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the recipe
//! catalog, the enemy roster, the quest list and the starting pack from
//! the hard-coded game-design data defined in submodules, then opens the
//! intro cutscene.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

pub mod config;
pub mod cutscenes;
pub mod recipes;
pub mod roster;

use bevy::prelude::*;
use crate::encounter::start_cutscene;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then starts the intro.
fn load_all_data(
    mut recipe_registry: ResMut<RecipeRegistry>,
    mut roster: ResMut<EnemyRoster>,
    mut quest_log: ResMut<QuestLog>,
    mut inventory: ResMut<Inventory>,
    mut cutscene: ResMut<CutscenePlayer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: seeding session…");

    recipes::populate_recipes(&mut recipe_registry);
    info!("  Recipes loaded: {}", recipe_registry.recipes.len());

    roster::populate_roster(&mut roster);
    info!("  Enemies on the roster: {}", roster.enemies.len());

    roster::populate_quests(&mut quest_log);
    info!("  Quests: {}", quest_log.quests.len());

    roster::populate_inventory(&mut inventory);
    info!("  Starting items: {}", inventory.items.len());

    start_cutscene(&mut cutscene, CutsceneKind::Intro);
    next_state.set(GameState::Cutscene);
}
