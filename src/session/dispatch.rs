//! The one place [`GameCommand`]s are applied.
//!
//! Commands from one frame are applied strictly in the order they were
//! sent, so `[Craft, Equip]` equips the fresh item and `[Step, Attack]`
//! swings from the stepped position. Runs in `PreUpdate` after the input
//! adapters and the deferred tasks, ahead of the frame's fixed steps.

use bevy::prelude::*;

use crate::combat::player_attack;
use crate::crafting::{craft_recipe, equip_item};
use crate::deferred::ScheduledTasks;
use crate::encounter::{accept_offer, cutscene_input, dismiss_narrator, enter_location};
use crate::player::movement::step_player;
use crate::shared::*;

use super::{apply_customization, select_character, toggle_menu};

#[allow(clippy::too_many_arguments)]
pub fn dispatch_commands(
    mut game_commands: EventReader<GameCommand>,
    config: Res<GameConfig>,
    recipe_registry: Res<RecipeRegistry>,
    mut held: ResMut<HeldKeys>,
    mut player: ResMut<PlayerState>,
    mut character: ResMut<CharacterState>,
    mut inventory: ResMut<Inventory>,
    mut roster: ResMut<EnemyRoster>,
    mut quest_log: ResMut<QuestLog>,
    mut encounter: ResMut<EncounterState>,
    mut cutscene: ResMut<CutscenePlayer>,
    mut narrator: ResMut<Narrator>,
    mut menus: ResMut<MenuVisibility>,
    mut tasks: ResMut<ScheduledTasks>,
) {
    for command in game_commands.read() {
        match command {
            GameCommand::HoldMove(facing) => {
                held.directions.insert(*facing);
            }
            GameCommand::ReleaseMove(facing) => {
                held.directions.remove(facing);
            }
            GameCommand::Step(facing) => {
                step_player(&mut player, *facing, config.touch_step, &config);
            }
            GameCommand::Attack => {
                player_attack(
                    &config,
                    &character,
                    &encounter,
                    &cutscene,
                    &mut player,
                    &mut inventory,
                    &mut roster,
                    &mut quest_log,
                    &mut tasks,
                );
            }
            GameCommand::ToggleMenu(menu) => {
                toggle_menu(&mut menus, &cutscene, *menu);
            }
            GameCommand::ChangeLocation(target) => {
                enter_location(
                    *target,
                    &mut encounter,
                    &roster,
                    &mut cutscene,
                    &mut tasks,
                    &config,
                );
            }
            GameCommand::SelectCharacter(selected) => {
                select_character(&mut character, *selected);
            }
            GameCommand::Customize {
                dog_glyph,
                parrot_glyph,
            } => {
                apply_customization(&mut character, &mut menus, dog_glyph, parrot_glyph);
            }
            GameCommand::Craft(recipe_id) => {
                craft_recipe(&recipe_registry, &mut inventory, &mut quest_log, recipe_id);
            }
            GameCommand::Equip(item_id) => {
                equip_item(&mut player, &inventory, item_id);
            }
            GameCommand::AcceptNarratorQuest => {
                accept_offer(&mut narrator, &mut quest_log);
            }
            GameCommand::DismissNarrator => {
                dismiss_narrator(&mut narrator);
            }
            GameCommand::AdvanceCutscene => {
                cutscene_input(false, &mut cutscene, &mut encounter, &mut tasks, &config);
            }
            GameCommand::DismissCutscene => {
                cutscene_input(true, &mut cutscene, &mut encounter, &mut tasks, &config);
            }
        }
    }
}
