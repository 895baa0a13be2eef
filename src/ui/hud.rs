use bevy::prelude::*;
use crate::encounter::current_frame;
use crate::data::cutscenes::script;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudText;

#[derive(Component)]
pub struct MenuPanelText;

#[derive(Component)]
pub struct NarratorPanel;

#[derive(Component)]
pub struct NarratorText;

#[derive(Component)]
pub struct CutsceneOverlay;

#[derive(Component)]
pub struct CutsceneText;

const PANEL_BG: Color = Color::srgba(0.05, 0.05, 0.08, 0.85);

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    // Top-left status line, hidden until the first cutscene closes.
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));

    commands.spawn((
        MenuPanelText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            right: Val::Px(8.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
        Visibility::Hidden,
    ));

    commands
        .spawn((
            NarratorPanel,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Percent(10.0),
                width: Val::Percent(80.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                NarratorText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
            ));
        });

    commands
        .spawn((
            CutsceneOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.92)),
            GlobalZIndex(10),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                CutsceneText,
                Text::new(""),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// TEXT BUILDERS
// ═══════════════════════════════════════════════════════════════════════

pub fn hud_line(
    player: &PlayerState,
    inventory: &Inventory,
    character: &CharacterState,
    encounter: &EncounterState,
    config: &GameConfig,
) -> String {
    let weapon = player
        .equipped_weapon
        .as_deref()
        .and_then(|id| inventory.get(id))
        .map(|item| format!("{} {}", item.icon, item.name))
        .unwrap_or_else(|| "Bare paws".to_string());
    let damage = crate::combat::resolve::attack_damage(player, inventory, character, config);

    let mut line = format!(
        "{} ❤️ {}/{}   {}   ⚔️ {}   📍 {}",
        character.glyph(),
        player.health,
        player.max_health,
        weapon,
        damage,
        location_name(encounter.location),
    );
    if encounter.boss_unlocked && encounter.location != Location::BossArena {
        line.push_str("   [3] Boss arena is open!");
    }
    line
}

pub fn location_name(location: Location) -> &'static str {
    match location {
        Location::Kingdom => "Kingdom",
        Location::Mine => "Mine",
        Location::BossArena => "Boss Arena",
    }
}

/// Every open menu, stacked in a fixed order.
pub fn menu_text(
    menus: &MenuVisibility,
    recipes: &RecipeRegistry,
    inventory: &Inventory,
    quests: &QuestLog,
    character: &CharacterState,
) -> String {
    let mut sections = Vec::new();

    if menus.crafting {
        let mut s = String::from("🔨 CRAFTING");
        for (i, recipe) in recipes.recipes.iter().enumerate() {
            let needs: Vec<String> = recipe
                .materials
                .iter()
                .map(|(id, qty)| format!("{} {}/{}", id, inventory.count(id), qty))
                .collect();
            let mark = if crate::crafting::can_craft(inventory, recipe) { "✔" } else { "✖" };
            s.push_str(&format!("\n[{}] {} {} {} ({})", i + 1, mark, recipe.icon, recipe.name, needs.join(", ")));
        }
        sections.push(s);
    }

    if menus.inventory {
        let mut s = String::from("🎒 INVENTORY");
        for (i, item) in inventory.items.iter().enumerate() {
            s.push_str(&format!("\n[{}] {} {} x{}", i + 1, item.icon, item.name, item.count));
            if let Some(attack) = item.attack {
                s.push_str(&format!("  atk {}", attack));
            }
            if let Some(defense) = item.defense {
                s.push_str(&format!("  def {}", defense));
            }
        }
        sections.push(s);
    }

    if menus.quests {
        let mut s = String::from("📜 QUESTS");
        for quest in &quests.quests {
            let mark = if quest.completed { "✅" } else { "⬜" };
            s.push_str(&format!("\n{} {} ({}/{})", mark, quest.title, quest.progress, quest.goal));
        }
        sections.push(s);
    }

    if menus.customization {
        let (options, current): (&[&str], &str) = match character.selected {
            Character::Dog => (&DOG_GLYPHS[..], character.dog_glyph.as_str()),
            Character::Parrot => (&PARROT_GLYPHS[..], character.parrot_glyph.as_str()),
        };
        let mut s = String::from("🎨 APPEARANCE");
        for (i, glyph) in options.iter().enumerate() {
            let mark = if *glyph == current { ">" } else { " " };
            s.push_str(&format!("\n{}[{}] {}", mark, i + 1, glyph));
        }
        sections.push(s);
    }

    sections.join("\n\n")
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn update_hud(
    config: Res<GameConfig>,
    player: Res<PlayerState>,
    inventory: Res<Inventory>,
    character: Res<CharacterState>,
    encounter: Res<EncounterState>,
    mut query: Query<(&mut Text, &mut Visibility), With<HudText>>,
) {
    for (mut text, mut visibility) in &mut query {
        *visibility = if encounter.hud_revealed {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        **text = hud_line(&player, &inventory, &character, &encounter, &config);
    }
}

pub fn update_menu_panel(
    menus: Res<MenuVisibility>,
    recipes: Res<RecipeRegistry>,
    inventory: Res<Inventory>,
    quests: Res<QuestLog>,
    character: Res<CharacterState>,
    mut query: Query<(&mut Text, &mut Visibility), With<MenuPanelText>>,
) {
    for (mut text, mut visibility) in &mut query {
        if !menus.any_open() {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Inherited;
        **text = menu_text(&menus, &recipes, &inventory, &quests, &character);
    }
}

pub fn update_narrator_panel(
    narrator: Res<Narrator>,
    mut panels: Query<&mut Visibility, With<NarratorPanel>>,
    mut texts: Query<&mut Text, With<NarratorText>>,
) {
    if !narrator.is_changed() {
        return;
    }

    for mut visibility in &mut panels {
        *visibility = if narrator.message.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    let Some(message) = narrator.message.as_ref() else {
        return;
    };
    let hint = if message.offer.is_some() {
        "[Y] Accept   [Esc] Not now"
    } else {
        "[Esc] Close"
    };
    for mut text in &mut texts {
        **text = format!("🪿 {}\n{}", message.text, hint);
    }
}

pub fn update_cutscene_overlay(
    cutscene: Res<CutscenePlayer>,
    mut overlays: Query<&mut Visibility, With<CutsceneOverlay>>,
    mut texts: Query<&mut Text, With<CutsceneText>>,
) {
    if !cutscene.is_changed() {
        return;
    }

    for mut visibility in &mut overlays {
        *visibility = if cutscene.is_active() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    let (Some(kind), Some(frame)) = (cutscene.active, current_frame(&cutscene)) else {
        return;
    };
    let script = script(kind);
    for mut text in &mut texts {
        **text = format!(
            "{}\n\n{}\n\n{}\n\n{}/{}   [Space] Next",
            script.title,
            frame.image,
            frame.text,
            cutscene.frame + 1,
            script.frames.len()
        );
    }
}
