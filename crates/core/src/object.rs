//! Base entity and the movement capability shared by every entity.

use std::fmt;

use crate::collider::{Aabb, Collider};
use crate::image::Image;
use crate::types::Vector;

/// Hook invoked when an entity leaves the scene on the left.
type DestroyHook = Box<dyn FnMut()>;

/// Result of one positional update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The entity's right edge passed the minimum bound. It is still alive;
    /// the owner decides whether to replace it.
    Destroyed,
}

/// Entity with a position and optional sprite, collider, velocity and bounds.
pub struct GameObject {
    pub position: Vector,
    pub image: Option<Image>,
    pub collider: Option<Collider>,
    pub speed: Option<Vector>,
    pub min_bounds: Option<Vector>,
    pub max_bounds: Option<Vector>,
    on_destroy: Option<DestroyHook>,
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("position", &self.position)
            .field("image", &self.image.as_ref().map(|i| (i.width(), i.height())))
            .field("collider", &self.collider)
            .field("speed", &self.speed)
            .field("min_bounds", &self.min_bounds)
            .field("max_bounds", &self.max_bounds)
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

impl GameObject {
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            image: None,
            collider: None,
            speed: None,
            min_bounds: None,
            max_bounds: None,
            on_destroy: None,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_speed(mut self, speed: Vector) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_bounds(mut self, min: Vector, max: Vector) -> Self {
        self.min_bounds = Some(min);
        self.max_bounds = Some(max);
        self
    }

    pub fn with_on_destroy(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_destroy = Some(Box::new(hook));
        self
    }

    /// Collider edges at the current position.
    pub fn bounds(&self) -> Option<Aabb> {
        self.collider.map(|c| c.bounds_at(self.position))
    }

    pub fn collides_with(&self, other: &GameObject) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }

    /// Apply velocity, then test the left bound.
    ///
    /// The bound test runs after the move and only when both an image and a
    /// minimum bound are present.
    pub fn advance(&mut self) -> MoveOutcome {
        if let Some(speed) = self.speed {
            self.position += speed;
        }

        let off_screen = match (&self.image, self.min_bounds) {
            (Some(image), Some(min)) => self.position.x + (image.width() as f32) < min.x,
            _ => false,
        };

        if off_screen {
            if let Some(hook) = self.on_destroy.as_mut() {
                hook();
            }
            MoveOutcome::Destroyed
        } else {
            MoveOutcome::Moved
        }
    }
}

/// Movement capability.
///
/// Every entity is driven through this trait so the specialized update
/// (gravity for the player, respawn bookkeeping for obstacles) always runs.
pub trait Movable {
    fn object(&self) -> &GameObject;

    fn object_mut(&mut self) -> &mut GameObject;

    fn advance(&mut self) -> MoveOutcome;
}

impl Movable for GameObject {
    fn object(&self) -> &GameObject {
        self
    }

    fn object_mut(&mut self) -> &mut GameObject {
        self
    }

    fn advance(&mut self) -> MoveOutcome {
        GameObject::advance(self)
    }
}
