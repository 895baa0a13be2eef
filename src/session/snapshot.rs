//! Read-only view of the session for presentation and debugging.

use bevy::prelude::*;
use serde::Serialize;

use crate::data::cutscenes::script;
use crate::shared::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutsceneView {
    pub kind: CutsceneKind,
    pub title: &'static str,
    pub frame: usize,
    pub frame_count: usize,
    pub text: &'static str,
    pub image: &'static str,
}

impl CutsceneView {
    pub fn of(cutscene: &CutscenePlayer) -> Option<Self> {
        let kind = cutscene.active?;
        let script = script(kind);
        let frame = script.frames.get(cutscene.frame)?;
        Some(Self {
            kind,
            title: script.title,
            frame: cutscene.frame,
            frame_count: script.frames.len(),
            text: frame.text,
            image: frame.image,
        })
    }
}

/// Everything the presentation layer renders, copied out of the world.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub player: PlayerState,
    pub character: CharacterState,
    pub enemies: Vec<Enemy>,
    pub quests: Vec<Quest>,
    pub inventory: Vec<InventoryItem>,
    pub location: Location,
    pub cutscene: Option<CutsceneView>,
    pub boss_unlocked: bool,
    pub hud_revealed: bool,
    pub narrator: Option<NarratorMessage>,
    pub menus: MenuVisibility,
}

impl SessionSnapshot {
    /// None until every session resource has been inserted.
    pub fn capture(world: &World) -> Option<Self> {
        let encounter = world.get_resource::<EncounterState>()?;
        Some(Self {
            player: world.get_resource::<PlayerState>()?.clone(),
            character: world.get_resource::<CharacterState>()?.clone(),
            enemies: world.get_resource::<EnemyRoster>()?.enemies.clone(),
            quests: world.get_resource::<QuestLog>()?.quests.clone(),
            inventory: world.get_resource::<Inventory>()?.items.clone(),
            location: encounter.location,
            cutscene: CutsceneView::of(world.get_resource::<CutscenePlayer>()?),
            boss_unlocked: encounter.boss_unlocked,
            hud_revealed: encounter.hud_revealed,
            narrator: world.get_resource::<Narrator>()?.message.clone(),
            menus: *world.get_resource::<MenuVisibility>()?,
        })
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Snapshot serialization failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_requires_session_resources() {
        let world = World::new();
        assert!(SessionSnapshot::capture(&world).is_none());
    }

    #[test]
    fn test_capture_and_serialize() {
        let mut world = World::new();
        world.init_resource::<PlayerState>();
        world.init_resource::<CharacterState>();
        world.init_resource::<EnemyRoster>();
        world.init_resource::<QuestLog>();
        world.init_resource::<Inventory>();
        world.init_resource::<EncounterState>();
        world.init_resource::<Narrator>();
        world.init_resource::<MenuVisibility>();
        world.insert_resource(CutscenePlayer {
            active: Some(CutsceneKind::Victory),
            frame: 1,
        });

        let snapshot = SessionSnapshot::capture(&world).unwrap();
        let view = snapshot.cutscene.clone().unwrap();
        assert_eq!(view.frame_count, 3);
        assert_eq!(view.text, "The Kingdom of Dogs is saved!");

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"location\": \"Kingdom\""));
        assert!(json.contains("\"boss_unlocked\": false"));
    }
}
