//! Obstacles and the spawner that (re)creates them.
//!
//! Each obstacle remembers the column it was spawned at. When it scrolls off
//! the left edge the owner replaces its slot with [`ObstacleSpawner::respawn`],
//! which picks a fresh kind at that same column regardless of how far the old
//! obstacle travelled.

use crate::collider::Collider;
use crate::image::Image;
use crate::object::{GameObject, Movable, MoveOutcome};
use crate::rng::SimpleRng;
use crate::sprites;
use crate::types::{ObstacleKind, Vector, OBSTACLE_SPEED};

#[derive(Debug)]
pub struct Obstacle {
    kind: ObstacleKind,
    spawn_x: f32,
    object: GameObject,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, position: Vector) -> Self {
        match kind {
            ObstacleKind::Meteor => Self::meteor(position),
            ObstacleKind::Cactus => Self::cactus(position),
        }
    }

    /// Meteor with a circle collider of radius `width / 2`.
    pub fn meteor(position: Vector) -> Self {
        let image = sprites::meteor();
        let collider = Collider::circle(image.width() as i32 / 2);
        Self::build(ObstacleKind::Meteor, position, image, collider)
    }

    /// Cactus with a collider matching its sprite.
    pub fn cactus(position: Vector) -> Self {
        let image = sprites::cactus();
        let collider = Collider::rect(image.width() as i32, image.height() as i32);
        Self::build(ObstacleKind::Cactus, position, image, collider)
    }

    fn build(kind: ObstacleKind, position: Vector, image: Image, collider: Collider) -> Self {
        let object = GameObject::new(position)
            .with_image(image)
            .with_collider(collider)
            .with_speed(Vector::new(OBSTACLE_SPEED, 0.0));
        Self {
            kind,
            spawn_x: position.x,
            object,
        }
    }

    pub fn with_bounds(mut self, min: Vector, max: Vector) -> Self {
        self.object.min_bounds = Some(min);
        self.object.max_bounds = Some(max);
        self
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Column this obstacle was first constructed at.
    pub fn spawn_x(&self) -> f32 {
        self.spawn_x
    }

    pub fn position(&self) -> Vector {
        self.object.position
    }
}

impl Movable for Obstacle {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    fn advance(&mut self) -> MoveOutcome {
        self.object.advance()
    }
}

/// Creates obstacles inside a scene's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSpawner {
    min_bounds: Vector,
    max_bounds: Vector,
    scene_height: u16,
}

impl ObstacleSpawner {
    pub fn new(min_bounds: Vector, max_bounds: Vector, scene_height: u16) -> Self {
        Self {
            min_bounds,
            max_bounds,
            scene_height,
        }
    }

    /// Row at which `kind` spawns.
    pub fn spawn_y(&self, kind: ObstacleKind) -> f32 {
        self.scene_height.saturating_sub(kind.spawn_rise()) as f32
    }

    pub fn spawn_kind(&self, kind: ObstacleKind, x: f32) -> Obstacle {
        Obstacle::new(kind, Vector::new(x, self.spawn_y(kind)))
            .with_bounds(self.min_bounds, self.max_bounds)
    }

    /// Random kind (even odds) at column `x`.
    pub fn spawn(&self, rng: &mut SimpleRng, x: f32) -> Obstacle {
        let kind = rng.obstacle_kind();
        self.spawn_kind(kind, x)
    }

    /// Replacement for a destroyed obstacle, at its original spawn column.
    pub fn respawn(&self, rng: &mut SimpleRng, destroyed: &Obstacle) -> Obstacle {
        self.spawn(rng, destroyed.spawn_x())
    }
}
