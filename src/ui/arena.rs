use bevy::prelude::*;
use std::collections::HashSet;
use crate::shared::*;

#[derive(Component)]
pub struct ArenaBackdrop;

#[derive(Component)]
pub struct PlayerGlyph;

#[derive(Component)]
pub struct EnemyGlyph {
    pub id: String,
}

const ACTOR_FONT_SIZE: f32 = 36.0;

/// Arena coordinates have y growing downward with the origin at the
/// top-left corner; world space is centred on the camera.
pub fn arena_to_world(x: f32, y: f32, config: &GameConfig, z: f32) -> Vec3 {
    Vec3::new(
        x - config.arena_width / 2.0,
        config.arena_height / 2.0 - y,
        z,
    )
}

pub fn location_color(location: Location) -> Color {
    match location {
        Location::Kingdom => Color::srgb(0.42, 0.62, 0.35),
        Location::Mine => Color::srgb(0.30, 0.27, 0.25),
        Location::BossArena => Color::srgb(0.45, 0.16, 0.14),
    }
}

pub fn spawn_arena(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn(Camera2d);

    commands.spawn((
        ArenaBackdrop,
        Sprite {
            color: location_color(Location::Kingdom),
            custom_size: Some(Vec2::new(config.arena_width, config.arena_height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    commands.spawn((
        PlayerGlyph,
        Text2d::new(""),
        TextFont {
            font_size: ACTOR_FONT_SIZE,
            ..default()
        },
        Transform::default(),
    ));
}

pub fn update_backdrop(
    encounter: Res<EncounterState>,
    mut backdrops: Query<&mut Sprite, With<ArenaBackdrop>>,
) {
    if !encounter.is_changed() {
        return;
    }
    for mut sprite in &mut backdrops {
        sprite.color = location_color(encounter.location);
    }
}

pub fn sync_player_glyph(
    config: Res<GameConfig>,
    player: Res<PlayerState>,
    character: Res<CharacterState>,
    mut glyphs: Query<(&mut Text2d, &mut Transform), With<PlayerGlyph>>,
) {
    for (mut text, mut transform) in &mut glyphs {
        let glyph = character.glyph();
        if text.0 != glyph {
            text.0 = glyph.to_string();
        }
        transform.translation = arena_to_world(player.x, player.y, &config, 2.0);
        // Swinging pose while the attack is recovering.
        transform.scale = Vec3::splat(if player.attacking { 1.2 } else { 1.0 });
    }
}

/// One glyph per roster entry; dead enemies stay spawned but hidden.
pub fn sync_enemy_glyphs(
    mut commands: Commands,
    config: Res<GameConfig>,
    roster: Res<EnemyRoster>,
    mut glyphs: Query<(&EnemyGlyph, &mut Transform, &mut Visibility)>,
) {
    let mut present = HashSet::new();

    for (glyph, mut transform, mut visibility) in &mut glyphs {
        present.insert(glyph.id.clone());
        let Some(enemy) = roster.get(&glyph.id) else {
            continue;
        };
        transform.translation = arena_to_world(enemy.x, enemy.y, &config, 1.0);
        *visibility = if enemy.alive {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for enemy in roster.enemies.iter().filter(|e| !present.contains(&e.id)) {
        commands.spawn((
            EnemyGlyph {
                id: enemy.id.clone(),
            },
            Text2d::new(enemy.kind.glyph()),
            TextFont {
                font_size: ACTOR_FONT_SIZE,
                ..default()
            },
            Transform::from_translation(arena_to_world(enemy.x, enemy.y, &config, 1.0)),
            if enemy.alive {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            },
        ));
    }
}
