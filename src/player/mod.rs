pub mod movement;

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Fixed movement tick --
        let tick_hz = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.tick_hz)
            .filter(|hz| hz.is_finite() && *hz > 0.0)
            .unwrap_or(60.0);
        app.insert_resource(Time::<Fixed>::from_hz(tick_hz));

        app.add_systems(FixedUpdate, movement::player_movement);
    }
}
