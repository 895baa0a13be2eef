use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use last_warrior::shared::*;
use last_warrior::{
    data, deferred, encounter, input, player, quests, session, ui,
};

fn main() {
    let config = GameConfig::load();
    let resolution = WindowResolution::new(config.arena_width + 150.0, config.arena_height + 140.0);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Last Warrior".into(),
                resolution,
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        // Config first: plugins read it while building
        .insert_resource(config)
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<PlayerState>()
        .init_resource::<CharacterState>()
        .init_resource::<HeldKeys>()
        .init_resource::<Inventory>()
        .init_resource::<RecipeRegistry>()
        .init_resource::<EnemyRoster>()
        .init_resource::<QuestLog>()
        .init_resource::<EncounterState>()
        .init_resource::<CutscenePlayer>()
        .init_resource::<Narrator>()
        .init_resource::<MenuVisibility>()
        // Events
        .add_event::<GameCommand>()
        .add_event::<QuestCompletedEvent>()
        // Domain plugins
        .add_plugins(deferred::DeferredPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(quests::QuestPlugin)
        .add_plugins(encounter::EncounterPlugin)
        .add_plugins(session::SessionPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
