//! Session configuration.
//!
//! Defaults come from the compile-time constants in `tui-runner-types`.
//! [`GameConfig::from_env`] applies environment overrides:
//!
//! - `RUNNER_SCENE_WIDTH`: scene columns (default: 50)
//! - `RUNNER_SCENE_HEIGHT`: scene rows (default: 30)
//! - `RUNNER_TICK_MS`: fixed tick length (default: 100)
//! - `RUNNER_SEED`: RNG seed (default: derived from the clock)
//! - `RUNNER_LOG_PATH`: log file; logging is off when unset

use crate::types::{
    Vector, CROUCH_RELEASE_MS, OBSTACLE_SPAWN_FACTORS, OBSTACLE_SLOTS, PLAYER_SPAWN_RISE,
    PLAYER_SPAWN_X, SCENE_HEIGHT, SCENE_WIDTH, TICK_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub scene_width: u16,
    pub scene_height: u16,
    pub tick_ms: u32,
    pub crouch_release_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            tick_ms: TICK_MS,
            crouch_release_ms: CROUCH_RELEASE_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable or zero dimensions fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let scene_width = lookup("RUNNER_SCENE_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&w: &u16| w > 0)
            .unwrap_or(defaults.scene_width);

        let scene_height = lookup("RUNNER_SCENE_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&h: &u16| h > 0)
            .unwrap_or(defaults.scene_height);

        let tick_ms = lookup("RUNNER_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&t: &u32| t > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("RUNNER_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("RUNNER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            scene_width,
            scene_height,
            tick_ms,
            crouch_release_ms: defaults.crouch_release_ms,
            seed,
            log_path,
        }
    }

    /// Top-left world bound.
    pub fn min_bounds(&self) -> Vector {
        Vector::ZERO
    }

    /// Bottom-right world bound; its `y` is the ground line.
    pub fn max_bounds(&self) -> Vector {
        Vector::new(self.scene_width as f32, self.scene_height as f32)
    }

    pub fn player_spawn(&self) -> Vector {
        Vector::new(
            PLAYER_SPAWN_X,
            self.scene_height.saturating_sub(PLAYER_SPAWN_RISE) as f32,
        )
    }

    /// Spawn column of every obstacle slot.
    pub fn obstacle_spawn_xs(&self) -> [f32; OBSTACLE_SLOTS] {
        // Truncated to whole columns.
        OBSTACLE_SPAWN_FACTORS.map(|f| (self.scene_width as f32 * f).trunc())
    }
}
