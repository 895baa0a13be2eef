use bevy::input::InputSystem;
use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            read_keyboard.in_set(EmitCommands).after(InputSystem),
        );
    }
}

const MOVE_KEYS: [(KeyCode, Facing); 8] = [
    (KeyCode::KeyW, Facing::Up),
    (KeyCode::ArrowUp, Facing::Up),
    (KeyCode::KeyS, Facing::Down),
    (KeyCode::ArrowDown, Facing::Down),
    (KeyCode::KeyA, Facing::Left),
    (KeyCode::ArrowLeft, Facing::Left),
    (KeyCode::KeyD, Facing::Right),
    (KeyCode::ArrowRight, Facing::Right),
];

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// The single point where keyboard input becomes [`GameCommand`]s.
#[allow(clippy::too_many_arguments)]
fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    cutscene: Res<CutscenePlayer>,
    menus: Res<MenuVisibility>,
    character: Res<CharacterState>,
    recipe_registry: Res<RecipeRegistry>,
    inventory: Res<Inventory>,
    encounter: Res<EncounterState>,
    mut game_commands: EventWriter<GameCommand>,
) {
    for (key, facing) in MOVE_KEYS {
        if keys.just_pressed(key) {
            game_commands.send(GameCommand::HoldMove(facing));
        }
        // Only release once no other key for the same direction is down.
        if keys.just_released(key) && !direction_pressed(&keys, facing) {
            game_commands.send(GameCommand::ReleaseMove(facing));
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        game_commands.send(if cutscene.is_active() {
            GameCommand::AdvanceCutscene
        } else {
            GameCommand::Attack
        });
    }
    if keys.just_pressed(KeyCode::Enter) {
        game_commands.send(GameCommand::AdvanceCutscene);
    }

    for (key, menu) in [
        (KeyCode::KeyC, Menu::Crafting),
        (KeyCode::KeyI, Menu::Inventory),
        (KeyCode::KeyQ, Menu::Quests),
        (KeyCode::KeyK, Menu::Customization),
    ] {
        if keys.just_pressed(key) {
            game_commands.send(GameCommand::ToggleMenu(menu));
        }
    }

    // The character selector appears with the HUD.
    if keys.just_pressed(KeyCode::Tab) && encounter.hud_revealed {
        game_commands.send(GameCommand::SelectCharacter(character.selected.other()));
    }
    if keys.just_pressed(KeyCode::KeyY) {
        game_commands.send(GameCommand::AcceptNarratorQuest);
    }
    if keys.just_pressed(KeyCode::Escape) {
        game_commands.send(GameCommand::DismissNarrator);
    }

    for (slot, key) in DIGIT_KEYS.iter().enumerate() {
        if !keys.just_pressed(*key) {
            continue;
        }
        if let Some(command) = digit_command(
            slot,
            &menus,
            &character,
            &recipe_registry,
            &inventory,
            encounter.hud_revealed,
        ) {
            game_commands.send(command);
        }
    }
}

fn direction_pressed(keys: &ButtonInput<KeyCode>, facing: Facing) -> bool {
    MOVE_KEYS
        .iter()
        .any(|(key, dir)| *dir == facing && keys.pressed(*key))
}

/// Number keys act on whichever menu is open, or travel when none is.
/// Travel keys do nothing until the HUD has been revealed.
pub fn digit_command(
    slot: usize,
    menus: &MenuVisibility,
    character: &CharacterState,
    recipe_registry: &RecipeRegistry,
    inventory: &Inventory,
    hud_revealed: bool,
) -> Option<GameCommand> {
    if menus.crafting {
        let recipe = recipe_registry.recipes.get(slot)?;
        return Some(GameCommand::Craft(recipe.id.clone()));
    }
    if menus.inventory {
        let item = inventory.items.get(slot)?;
        return Some(GameCommand::Equip(item.id.clone()));
    }
    if menus.customization {
        let (dog_glyph, parrot_glyph) = match character.selected {
            Character::Dog => (DOG_GLYPHS.get(slot)?.to_string(), character.parrot_glyph.clone()),
            Character::Parrot => (character.dog_glyph.clone(), PARROT_GLYPHS.get(slot)?.to_string()),
        };
        return Some(GameCommand::Customize {
            dog_glyph,
            parrot_glyph,
        });
    }

    if !hud_revealed {
        return None;
    }
    let location = match slot {
        0 => Location::Kingdom,
        1 => Location::Mine,
        2 => Location::BossArena,
        _ => return None,
    };
    Some(GameCommand::ChangeLocation(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::recipes::populate_recipes;

    #[test]
    fn test_digits_travel_when_no_menu_open() {
        let cmd = digit_command(
            2,
            &MenuVisibility::default(),
            &CharacterState::default(),
            &RecipeRegistry::default(),
            &Inventory::default(),
            true,
        );
        assert_eq!(cmd, Some(GameCommand::ChangeLocation(Location::BossArena)));

        let none = digit_command(
            5,
            &MenuVisibility::default(),
            &CharacterState::default(),
            &RecipeRegistry::default(),
            &Inventory::default(),
            true,
        );
        assert_eq!(none, None);
    }

    #[test]
    fn test_digits_do_not_travel_before_hud() {
        let cmd = digit_command(
            2,
            &MenuVisibility::default(),
            &CharacterState::default(),
            &RecipeRegistry::default(),
            &Inventory::default(),
            false,
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_digits_craft_when_crafting_open() {
        let mut registry = RecipeRegistry::default();
        populate_recipes(&mut registry);
        let menus = MenuVisibility {
            crafting: true,
            ..default()
        };

        let cmd = digit_command(0, &menus, &CharacterState::default(), &registry, &Inventory::default(), true);
        assert_eq!(cmd, Some(GameCommand::Craft("iron-sword".into())));
    }

    #[test]
    fn test_digits_pick_glyph_for_selected_character() {
        let menus = MenuVisibility {
            customization: true,
            ..default()
        };
        let character = CharacterState {
            selected: Character::Parrot,
            ..default()
        };

        let cmd = digit_command(1, &menus, &character, &RecipeRegistry::default(), &Inventory::default(), true);
        assert_eq!(
            cmd,
            Some(GameCommand::Customize {
                dog_glyph: DOG_GLYPHS[0].to_string(),
                parrot_glyph: PARROT_GLYPHS[1].to_string(),
            })
        );
    }
}
