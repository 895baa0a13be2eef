//! Tunable constants, optionally overridden from a RON file.
//!
//! Set `LAST_WARRIOR_CONFIG=path/to/config.ron` to override any subset of
//! fields; anything left out keeps its default.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "LAST_WARRIOR_CONFIG";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Fixed movement ticks per second.
    pub tick_hz: f64,
    /// Per-tick movement, by character.
    pub dog_speed: f32,
    pub parrot_speed: f32,
    /// Displacement of one discrete touch-control step.
    pub touch_step: f32,
    pub melee_range: f32,
    pub unarmed_attack: u32,
    pub parrot_damage_multiplier: f32,
    pub attack_recovery_ms: u64,
    pub boss_spawn_delay_ms: u64,
    pub victory_delay_ms: u64,
    pub narrator_delay_ms: u64,
    pub boss_unlock_kills: usize,
    pub boss_spawn_x: f32,
    pub boss_spawn_y: f32,
    pub boss_health: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 750.0,
            arena_height: 500.0,
            tick_hz: 60.0,
            dog_speed: 3.0,
            parrot_speed: 5.0,
            touch_step: 5.0,
            melee_range: 50.0,
            unarmed_attack: 5,
            parrot_damage_multiplier: 1.2,
            attack_recovery_ms: 300,
            boss_spawn_delay_ms: 3000,
            victory_delay_ms: 500,
            narrator_delay_ms: 1000,
            boss_unlock_kills: 5,
            boss_spawn_x: 400.0,
            boss_spawn_y: 100.0,
            boss_health: 300,
        }
    }
}

impl GameConfig {
    /// Parse and validate an override. Values that parse but are out of
    /// range are rejected the same way as a syntax error.
    pub fn from_ron_str(source: &str) -> Result<Self, String> {
        let config: Self = ron::from_str(source).map_err(|e| format!("Invalid config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Invalid config: {}", e))?;
        Ok(config)
    }

    /// Arena size and tick rate must be positive, distances and multipliers
    /// non-negative, and the boss must spawn inside the arena. NaN and
    /// infinities fail every check.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(format!("tick_hz must be positive, got {}", self.tick_hz));
        }
        for (name, value) in [
            ("dog_speed", self.dog_speed),
            ("parrot_speed", self.parrot_speed),
            ("touch_step", self.touch_step),
            ("melee_range", self.melee_range),
            ("parrot_damage_multiplier", self.parrot_damage_multiplier),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }
        let in_arena = (0.0..=self.arena_width).contains(&self.boss_spawn_x)
            && (0.0..=self.arena_height).contains(&self.boss_spawn_y);
        if !in_arena {
            return Err(format!(
                "boss spawn ({}, {}) is outside the arena",
                self.boss_spawn_x, self.boss_spawn_y
            ));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, String> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
        Self::from_ron_str(&source)
    }

    /// Defaults, overridden by the file named in [`CONFIG_ENV_VAR`] if set.
    /// A broken override file is logged and ignored.
    pub fn load() -> Self {
        load_override().unwrap_or_default()
    }

    pub fn attack_recovery(&self) -> Duration {
        Duration::from_millis(self.attack_recovery_ms)
    }

    pub fn boss_spawn_delay(&self) -> Duration {
        Duration::from_millis(self.boss_spawn_delay_ms)
    }

    pub fn victory_delay(&self) -> Duration {
        Duration::from_millis(self.victory_delay_ms)
    }

    pub fn narrator_delay(&self) -> Duration {
        Duration::from_millis(self.narrator_delay_ms)
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.arena_width)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_override() -> Option<GameConfig> {
    let path = std::env::var(CONFIG_ENV_VAR).ok()?;
    match GameConfig::from_file(std::path::Path::new(&path)) {
        Ok(config) => {
            info!("Loaded config overrides from {}", path);
            Some(config)
        }
        Err(e) => {
            warn!("{}; using default config", e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_override() -> Option<GameConfig> {
    None
}
