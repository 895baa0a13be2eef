//! Game session controller: the command dispatcher, the commands that touch
//! session-only state (menus, character selection, customization) and the
//! `GameState` mirror of the cutscene player.

pub mod dispatch;
pub mod snapshot;

use bevy::prelude::*;
use crate::shared::*;

pub use dispatch::dispatch_commands;
pub use snapshot::{CutsceneView, SessionSnapshot};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldKeys>()
            .init_resource::<MenuVisibility>()
            .init_resource::<CharacterState>()
            .configure_sets(PreUpdate, ApplyCommands.after(EmitCommands))
            .add_systems(PreUpdate, dispatch_commands.in_set(ApplyCommands))
            .add_systems(
                PostUpdate,
                sync_game_state.run_if(not(in_state(GameState::Loading))),
            );
    }
}

/// Menu shortcuts are ignored while a cutscene is showing.
pub fn toggle_menu(menus: &mut MenuVisibility, cutscene: &CutscenePlayer, menu: Menu) -> bool {
    if !gameplay_input_allowed(cutscene) {
        debug!("Menu toggle ignored during cutscene");
        return false;
    }
    menus.toggle(menu);
    true
}

pub fn select_character(character: &mut CharacterState, selected: Character) {
    if character.selected != selected {
        info!("Character selected: {:?}", selected);
        character.selected = selected;
    }
}

/// Save a customization and close its menu. Foreign glyphs leave everything
/// as it was.
pub fn apply_customization(
    character: &mut CharacterState,
    menus: &mut MenuVisibility,
    dog_glyph: &str,
    parrot_glyph: &str,
) -> bool {
    if !customize(character, dog_glyph, parrot_glyph) {
        warn!(
            "Rejected customization: {} / {} not in the option sets",
            dog_glyph, parrot_glyph
        );
        return false;
    }
    menus.customization = false;
    true
}

/// Apply both glyphs if each is in its character's option set.
pub fn customize(character: &mut CharacterState, dog_glyph: &str, parrot_glyph: &str) -> bool {
    if !DOG_GLYPHS.contains(&dog_glyph) || !PARROT_GLYPHS.contains(&parrot_glyph) {
        return false;
    }
    character.dog_glyph = dog_glyph.to_string();
    character.parrot_glyph = parrot_glyph.to_string();
    info!("Appearance saved: {} {}", dog_glyph, parrot_glyph);
    true
}

/// Keeps `GameState` in step with whether a cutscene is showing.
pub fn sync_game_state(
    cutscene: Res<CutscenePlayer>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wanted = if cutscene.is_active() {
        GameState::Cutscene
    } else {
        GameState::Playing
    };
    if *state.get() != wanted {
        next_state.set(wanted);
    }
}
