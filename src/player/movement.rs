use bevy::prelude::*;
use crate::shared::*;

/// Core movement system: advances the player one fixed tick from the held
/// movement keys. Runs in `FixedUpdate` at `GameConfig::tick_hz`.
///
/// Suppressed while attacking or while a cutscene is showing.
pub fn player_movement(
    held: Res<HeldKeys>,
    config: Res<GameConfig>,
    character: Res<CharacterState>,
    cutscene: Res<CutscenePlayer>,
    mut player: ResMut<PlayerState>,
) {
    if held.directions.is_empty() || player.attacking || !gameplay_input_allowed(&cutscene) {
        return;
    }

    let speed = character.speed(&config);
    integrate_movement(&mut player, &held, speed, &config);
}

/// One tick of held-key movement.
///
/// Keys are evaluated in [`Facing::PRECEDENCE`] order, each against the
/// position at the start of the tick, so on a shared axis the later key
/// wins (down beats up, right beats left). Facing follows the last key
/// that actually changed a coordinate.
pub fn integrate_movement(player: &mut PlayerState, held: &HeldKeys, speed: f32, config: &GameConfig) {
    let (start_x, start_y) = (player.x, player.y);
    let mut next_x = start_x;
    let mut next_y = start_y;
    let mut facing = player.facing;

    for dir in Facing::PRECEDENCE {
        if !held.is_held(dir) {
            continue;
        }
        match dir {
            Facing::Up | Facing::Down => {
                let candidate = config.clamp_y(start_y + axis_delta(dir) * speed);
                next_y = candidate;
                if candidate != start_y {
                    facing = dir;
                }
            }
            Facing::Left | Facing::Right => {
                let candidate = config.clamp_x(start_x + axis_delta(dir) * speed);
                next_x = candidate;
                if candidate != start_x {
                    facing = dir;
                }
            }
        }
    }

    player.x = next_x;
    player.y = next_y;
    player.facing = facing;
}

/// Move one discrete touch-control step. Facing always turns toward the
/// step. Unlike the held-key path, steps are not suppressed by attacks or
/// cutscenes.
pub fn step_player(player: &mut PlayerState, dir: Facing, distance: f32, config: &GameConfig) {
    match dir {
        Facing::Up | Facing::Down => player.y = config.clamp_y(player.y + axis_delta(dir) * distance),
        Facing::Left | Facing::Right => player.x = config.clamp_x(player.x + axis_delta(dir) * distance),
    }
    player.facing = dir;
}

/// Screen coordinates: y grows downward.
fn axis_delta(dir: Facing) -> f32 {
    match dir {
        Facing::Up | Facing::Left => -1.0,
        Facing::Down | Facing::Right => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(dirs: &[Facing]) -> HeldKeys {
        HeldKeys {
            directions: dirs.iter().copied().collect(),
        }
    }

    fn player_at(x: f32, y: f32) -> PlayerState {
        PlayerState {
            x,
            y,
            ..default()
        }
    }

    #[test]
    fn test_up_clamps_at_top_edge() {
        let config = GameConfig::default();
        let mut player = player_at(100.0, 2.0);
        let keys = held(&[Facing::Up]);

        integrate_movement(&mut player, &keys, 3.0, &config);
        assert_eq!(player.y, 0.0);
        integrate_movement(&mut player, &keys, 3.0, &config);
        assert_eq!(player.y, 0.0, "never negative");
    }

    #[test]
    fn test_down_overrides_up() {
        let config = GameConfig::default();
        let mut player = player_at(100.0, 100.0);

        integrate_movement(&mut player, &held(&[Facing::Up, Facing::Down]), 3.0, &config);
        assert_eq!(player.y, 103.0);
        assert_eq!(player.facing, Facing::Down);
    }

    #[test]
    fn test_right_overrides_left_and_sets_facing_last() {
        let config = GameConfig::default();
        let mut player = player_at(100.0, 100.0);

        integrate_movement(
            &mut player,
            &held(&[Facing::Left, Facing::Right, Facing::Up]),
            3.0,
            &config,
        );
        assert_eq!(player.x, 103.0);
        assert_eq!(player.y, 97.0);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_facing_unchanged_when_blocked_by_edge() {
        let config = GameConfig::default();
        let mut player = player_at(750.0, 100.0);
        player.facing = Facing::Up;

        integrate_movement(&mut player, &held(&[Facing::Right]), 3.0, &config);
        assert_eq!(player.x, 750.0);
        assert_eq!(player.facing, Facing::Up);
    }

    #[test]
    fn test_no_keys_leaves_player_untouched() {
        let config = GameConfig::default();
        let mut player = player_at(10.0, 10.0);
        let before = player.clone();

        integrate_movement(&mut player, &HeldKeys::default(), 3.0, &config);
        assert_eq!(player, before);
    }

    #[test]
    fn test_step_turns_even_when_clamped() {
        let config = GameConfig::default();
        let mut player = player_at(2.0, 50.0);

        step_player(&mut player, Facing::Left, 5.0, &config);
        assert_eq!(player.x, 0.0);
        assert_eq!(player.facing, Facing::Left);

        step_player(&mut player, Facing::Down, 5.0, &config);
        assert_eq!(player.y, 55.0);
        assert_eq!(player.facing, Facing::Down);
    }
}
