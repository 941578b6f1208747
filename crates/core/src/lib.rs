//! Core game logic module - entities, collision and the session loop
//!
//! This crate contains every game rule. It has **no dependencies** on terminal
//! I/O, which keeps it:
//!
//! - **Deterministic**: the same seed and inputs replay the same session
//! - **Testable**: physics, collision and respawn are plain function calls
//! - **Portable**: any frontend can drive [`GameState::tick`]
//!
//! # Module Structure
//!
//! - [`collider`]: axis-aligned boxes anchored to their owner's live position
//! - [`object`]: base [`GameObject`] and the [`Movable`] capability
//! - [`player`]: crouch/stand posture, jump and ground clamp
//! - [`obstacle`]: meteors, cacti and the spawner that respawns them in place
//! - [`crouch`]: deferred crouch release consumed at tick boundaries
//! - [`game_state`]: Playing/GameOver session, collision and scoring
//! - [`config`]: defaults plus environment overrides
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{GameConfig, GameState, TickEvent};
//! use tui_runner_types::{GameAction, TICK_MS};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//!
//! // First tick lands the player on the ground.
//! assert_eq!(game.tick(TICK_MS), TickEvent::Advanced);
//! assert!(game.apply_action(GameAction::Jump));
//!
//! game.tick(TICK_MS);
//! assert_eq!(game.score(), 2);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: physics constants are per tick, and the
//! elapsed milliseconds passed to [`GameState::tick`] only drive the
//! crouch-release deadline.

pub mod collider;
pub mod config;
pub mod crouch;
pub mod game_state;
pub mod image;
pub mod object;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod sprites;

pub use tui_runner_types as types;

pub use collider::{Aabb, Collider, ColliderShape};
pub use config::GameConfig;
pub use crouch::CrouchRelease;
pub use game_state::{GameState, TickEvent};
pub use image::Image;
pub use object::{GameObject, Movable, MoveOutcome};
pub use obstacle::{Obstacle, ObstacleSpawner};
pub use player::Player;
pub use rng::SimpleRng;
