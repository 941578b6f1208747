//! Game state module - owns one play session and advances it tick by tick
//!
//! This module ties together the player, the obstacle slots, the RNG and the
//! crouch-release deadline. It handles collision, scoring, respawn and the
//! Playing/GameOver lifecycle. It does no I/O.

use log::{debug, info};

use crate::config::GameConfig;
use crate::crouch::CrouchRelease;
use crate::object::{Movable, MoveOutcome};
use crate::obstacle::{Obstacle, ObstacleSpawner};
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::types::{GameAction, GamePhase, OBSTACLE_SLOTS};

/// What a call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing advanced (the session is over).
    Idle,
    /// Entities moved and the score went up.
    Advanced,
    /// The player hit an obstacle this tick.
    GameOver,
}

/// Complete session state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    spawner: ObstacleSpawner,
    rng: SimpleRng,
    player: Player,
    /// Fixed obstacle slots. A destroyed obstacle is replaced in place.
    obstacles: [Obstacle; OBSTACLE_SLOTS],
    crouch_release: CrouchRelease,
    phase: GamePhase,
    score: u32,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    /// Obstacles replaced during the current session.
    respawns: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let spawner = spawner_for(&config);
        let mut rng = SimpleRng::new(seed);
        let player = player_for(&config);
        let obstacles = config
            .obstacle_spawn_xs()
            .map(|x| spawner.spawn(&mut rng, x));

        info!(
            "session start: {}x{} scene, seed {}",
            config.scene_width, config.scene_height, seed
        );

        Self::from_parts(config, rng, player, obstacles)
    }

    /// Assemble a session from prebuilt entities.
    pub fn from_parts(
        config: GameConfig,
        rng: SimpleRng,
        player: Player,
        obstacles: [Obstacle; OBSTACLE_SLOTS],
    ) -> Self {
        Self {
            spawner: spawner_for(&config),
            config,
            rng,
            player,
            obstacles,
            crouch_release: CrouchRelease::new(),
            phase: GamePhase::Playing,
            score: 0,
            episode_id: 0,
            respawns: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle; OBSTACLE_SLOTS] {
        &self.obstacles
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn respawns(&self) -> u32 {
        self.respawns
    }

    pub fn crouch_release(&self) -> &CrouchRelease {
        &self.crouch_release
    }

    /// Swap the obstacle in `slot`, returning the previous one.
    pub fn replace_obstacle(&mut self, slot: usize, obstacle: Obstacle) -> Option<Obstacle> {
        self.obstacles
            .get_mut(slot)
            .map(|current| std::mem::replace(current, obstacle))
    }

    /// Apply a player command. Returns whether it changed anything.
    ///
    /// Jump and crouch are only accepted while playing; restart only after a
    /// game over. Everything else is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (GamePhase::Playing, GameAction::Jump) => {
                let jumped = self.player.jump();
                if jumped {
                    self.crouch_release.cancel();
                }
                jumped
            }
            (GamePhase::Playing, GameAction::Crouch) => {
                let crouched = self.player.crouch();
                // Repeated crouch requests keep the crouch alive.
                if self.player.is_crouching() {
                    self.crouch_release.arm(self.config.crouch_release_ms);
                }
                crouched
            }
            (GamePhase::GameOver, GameAction::Restart) => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    /// Index of the first obstacle overlapping the player.
    pub fn colliding_obstacle(&self) -> Option<usize> {
        let player = self.player.object();
        self.obstacles
            .iter()
            .position(|o| player.collides_with(o.object()))
    }

    /// Advance one fixed tick of `elapsed_ms` game time.
    ///
    /// Order: crouch-release deadline, collision test, player move, obstacle
    /// moves (with in-place respawn), score.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvent {
        if self.phase == GamePhase::GameOver {
            return TickEvent::Idle;
        }

        if self.crouch_release.advance(elapsed_ms) && self.player.stand_up() {
            debug!("crouch released after {}ms", self.config.crouch_release_ms);
        }

        if let Some(slot) = self.colliding_obstacle() {
            self.phase = GamePhase::GameOver;
            self.crouch_release.cancel();
            info!(
                "game over: hit {} in slot {} (score {}, episode {})",
                self.obstacles[slot].kind().as_str(),
                slot,
                self.score,
                self.episode_id
            );
            return TickEvent::GameOver;
        }

        self.player.advance();

        for (slot, obstacle) in self.obstacles.iter_mut().enumerate() {
            if obstacle.advance() == MoveOutcome::Destroyed {
                let fresh = self.spawner.respawn(&mut self.rng, obstacle);
                debug!(
                    "slot {}: {} left the scene, respawned {} at x={}",
                    slot,
                    obstacle.kind().as_str(),
                    fresh.kind().as_str(),
                    fresh.spawn_x()
                );
                *obstacle = fresh;
                self.respawns += 1;
            }
        }

        self.score += 1;
        TickEvent::Advanced
    }

    /// Rebuild player, obstacles and score from scratch.
    ///
    /// The RNG keeps its state so the next session differs from the last.
    pub fn restart(&mut self) {
        self.player = player_for(&self.config);
        let spawner = self.spawner;
        let rng = &mut self.rng;
        self.obstacles = self.config.obstacle_spawn_xs().map(|x| spawner.spawn(rng, x));
        self.crouch_release.cancel();
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.respawns = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("restart: episode {}", self.episode_id);
    }
}

fn spawner_for(config: &GameConfig) -> ObstacleSpawner {
    ObstacleSpawner::new(config.min_bounds(), config.max_bounds(), config.scene_height)
}

fn player_for(config: &GameConfig) -> Player {
    Player::new(config.player_spawn(), config.min_bounds(), config.max_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObstacleKind, Vector, TICK_MS};

    fn fresh() -> GameState {
        GameState::new(GameConfig::default(), 12345)
    }

    fn far_obstacles(config: &GameConfig) -> [Obstacle; OBSTACLE_SLOTS] {
        let spawner = spawner_for(config);
        [
            spawner.spawn_kind(ObstacleKind::Cactus, 10_000.0),
            spawner.spawn_kind(ObstacleKind::Meteor, 10_000.0),
        ]
    }

    /// Session whose obstacles are far away and never reach the player.
    fn quiet() -> GameState {
        let config = GameConfig::default();
        let obstacles = far_obstacles(&config);
        let player = player_for(&config);
        GameState::from_parts(config, SimpleRng::new(1), player, obstacles)
    }

    fn grounded(state: &mut GameState) {
        state.tick(TICK_MS);
        assert!(state.player().is_grounded());
    }

    #[test]
    fn test_new_game_state() {
        let state = fresh();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.obstacles()[0].spawn_x(), 50.0);
        assert_eq!(state.obstacles()[1].spawn_x(), 75.0);
        assert_eq!(state.player().position(), Vector::new(3.0, 23.0));
    }

    #[test]
    fn tick_increments_score() {
        let mut state = quiet();
        for i in 1..=5 {
            assert_eq!(state.tick(TICK_MS), TickEvent::Advanced);
            assert_eq!(state.score(), i);
        }
    }

    #[test]
    fn crouch_auto_releases_after_deadline() {
        let mut state = quiet();
        grounded(&mut state);

        assert!(state.apply_action(GameAction::Crouch));
        assert!(state.crouch_release().is_armed());

        // Five rendered ticks cover the full 500ms.
        for _ in 0..5 {
            state.tick(TICK_MS);
            assert!(state.player().is_crouching());
        }
        state.tick(TICK_MS);
        assert!(!state.player().is_crouching());
        assert_eq!(state.player().bottom(), Some(30.0));
    }

    #[test]
    fn crouch_survives_a_tick_as_long_as_the_deadline() {
        let config = GameConfig {
            tick_ms: 500,
            ..GameConfig::default()
        };
        let mut state = GameState::from_parts(
            config.clone(),
            SimpleRng::new(1),
            player_for(&config),
            far_obstacles(&config),
        );
        state.tick(500);
        assert!(state.player().is_grounded());

        assert!(state.apply_action(GameAction::Crouch));
        state.tick(500);
        assert!(state.player().is_crouching());
        state.tick(500);
        assert!(!state.player().is_crouching());
    }

    #[test]
    fn repeated_crouch_extends_deadline() {
        let mut state = quiet();
        grounded(&mut state);

        state.apply_action(GameAction::Crouch);
        for _ in 0..3 {
            state.tick(TICK_MS);
        }
        assert!(!state.apply_action(GameAction::Crouch));
        for _ in 0..5 {
            state.tick(TICK_MS);
            assert!(state.player().is_crouching());
        }
        state.tick(TICK_MS);
        assert!(!state.player().is_crouching());
    }

    #[test]
    fn jump_cancels_crouch_release() {
        let mut state = quiet();
        grounded(&mut state);

        state.apply_action(GameAction::Crouch);
        assert!(state.apply_action(GameAction::Jump));
        assert!(!state.crouch_release().is_armed());
        assert!(!state.player().is_crouching());
    }

    #[test]
    fn restart_ignored_while_playing() {
        let mut state = quiet();
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn destroyed_obstacle_is_replaced_in_slot() {
        let config = GameConfig::default();
        let spawner = spawner_for(&config);
        let mut near_edge = spawner.spawn_kind(ObstacleKind::Cactus, 50.0);
        // Move it just past the left edge without touching the player.
        near_edge.object_mut().position.x = -5.0;
        let obstacles = [near_edge, spawner.spawn_kind(ObstacleKind::Meteor, 10_000.0)];
        let player = player_for(&config);
        let mut state = GameState::from_parts(config, SimpleRng::new(5), player, obstacles);

        assert_eq!(state.tick(TICK_MS), TickEvent::Advanced);
        assert_eq!(state.respawns(), 1);
        let replaced = &state.obstacles()[0];
        assert_eq!(replaced.spawn_x(), 50.0);
        assert_eq!(replaced.position().x, 50.0);
    }
}
