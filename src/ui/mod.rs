//! Presentation layer. Reads session resources and draws them; the only
//! thing it ever writes back is entities of its own.

mod arena;
mod debug_overlay;
mod hud;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (arena::spawn_arena, hud::spawn_hud));

        // ─── WORLD GLYPHS ───
        app.add_systems(
            Update,
            (
                arena::update_backdrop,
                arena::sync_player_glyph,
                arena::sync_enemy_glyphs,
            ),
        );

        // ─── OVERLAYS ───
        app.add_systems(
            Update,
            (
                hud::update_hud,
                hud::update_menu_panel,
                hud::update_narrator_panel,
                hud::update_cutscene_overlay,
            ),
        );

        app.add_systems(Last, debug_overlay::dump_snapshot_on_f3);
    }
}
