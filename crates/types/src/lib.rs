//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the runner.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Scene Dimensions
//!
//! The playfield is a fixed character grid:
//!
//! - **Width**: 50 columns (indexed 0-49)
//! - **Height**: 30 rows (indexed 0-29)
//! - **Ground line**: the bottom edge of the scene (`y = SCENE_HEIGHT`)
//!
//! # Timing and Physics
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval |
//! | `CROUCH_RELEASE_MS` | 500 | Crouch auto-release delay |
//! | `GRAVITY` | 0.3 | Vertical speed added per tick while airborne |
//! | `JUMP_SPEED` | -3.0 | Upward impulse applied by a jump |
//! | `OBSTACLE_SPEED` | -1.4 | Horizontal obstacle speed per tick |
//!
//! Physics is expressed per tick, not per second: changing `TICK_MS` changes
//! how fast the game plays.
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{GameAction, Vector, SCENE_HEIGHT, SCENE_WIDTH};
//!
//! let mut position = Vector::new(3.0, 23.0);
//! position += Vector::new(0.0, -3.0);
//! assert_eq!(position, Vector::new(3.0, 20.0));
//!
//! assert_eq!(GameAction::from_str("jump"), Some(GameAction::Jump));
//!
//! assert_eq!(SCENE_WIDTH, 50);
//! assert_eq!(SCENE_HEIGHT, 30);
//! ```

use std::ops::{Add, AddAssign};

/// Scene width in columns (50)
pub const SCENE_WIDTH: u16 = 50;

/// Scene height in rows (30)
pub const SCENE_HEIGHT: u16 = 30;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Time a crouch is held before the player stands back up.
pub const CROUCH_RELEASE_MS: u32 = 500;

/// Vertical acceleration applied once per tick.
pub const GRAVITY: f32 = 0.3;

/// Vertical speed set by a jump (negative is up).
pub const JUMP_SPEED: f32 = -3.0;

/// Horizontal speed shared by every obstacle kind.
pub const OBSTACLE_SPEED: f32 = -1.4;

/// Player spawn column.
pub const PLAYER_SPAWN_X: f32 = 3.0;

/// Player spawns this many rows above the ground line.
pub const PLAYER_SPAWN_RISE: u16 = 7;

/// Meteors spawn this many rows above the ground line.
pub const METEOR_RISE: u16 = 15;

/// Cacti spawn this many rows above the ground line.
pub const CACTUS_RISE: u16 = 6;

/// Number of live obstacles in a session.
pub const OBSTACLE_SLOTS: usize = 2;

/// Spawn column of each obstacle slot, as a multiple of the scene width.
pub const OBSTACLE_SPAWN_FACTORS: [f32; OBSTACLE_SLOTS] = [1.0, 1.5];

/// 2D point or velocity in scene units.
///
/// Entities own their `Vector`s and mutate them in place every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Jump,
    Crouch,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_runner_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("CROUCH"), Some(GameAction::Crouch));
    /// assert_eq!(GameAction::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(GameAction::Jump),
            "crouch" => Some(GameAction::Crouch),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Jump => "jump",
            GameAction::Crouch => "crouch",
            GameAction::Restart => "restart",
        }
    }
}

/// Obstacle variants
///
/// - **Meteor**: flies at mid height, must be crouched under
/// - **Cactus**: sits on the ground, must be jumped over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Meteor,
    Cactus,
}

impl ObstacleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Meteor => "meteor",
            ObstacleKind::Cactus => "cactus",
        }
    }

    /// Rows above the ground line at which this kind spawns.
    pub fn spawn_rise(&self) -> u16 {
        match self {
            ObstacleKind::Meteor => METEOR_RISE,
            ObstacleKind::Cactus => CACTUS_RISE,
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
