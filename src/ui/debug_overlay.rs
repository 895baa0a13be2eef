use bevy::prelude::*;
use crate::session::SessionSnapshot;

/// F3 writes the whole read model to the log as JSON.
pub fn dump_snapshot_on_f3(world: &World) {
    let pressed = world
        .get_resource::<ButtonInput<KeyCode>>()
        .is_some_and(|keys| keys.just_pressed(KeyCode::F3));
    if !pressed {
        return;
    }

    let Some(snapshot) = SessionSnapshot::capture(world) else {
        warn!("Snapshot unavailable: session not initialised");
        return;
    };
    match snapshot.to_json() {
        Ok(json) => info!("Session snapshot:\n{}", json),
        Err(e) => warn!("{}", e),
    }
}
