//! Player entity: crouch/stand posture, jumping and the ground clamp.

use crate::collider::Collider;
use crate::image::Image;
use crate::object::{GameObject, Movable, MoveOutcome};
use crate::sprites;
use crate::types::{Vector, GRAVITY, JUMP_SPEED};

#[derive(Debug)]
pub struct Player {
    object: GameObject,
    standing_image: Image,
    crouching_image: Image,
    standing_collider: Collider,
    crouching_collider: Collider,
    crouching: bool,
    grounded: bool,
}

impl Player {
    /// Standing player with its top-left corner at `position`.
    ///
    /// The player starts airborne with no velocity; the first
    /// [`Movable::advance`] snaps it onto the ground line if it is at or
    /// below it.
    pub fn new(position: Vector, min_bounds: Vector, max_bounds: Vector) -> Self {
        Self::with_sprites(
            position,
            min_bounds,
            max_bounds,
            sprites::player_standing(),
            sprites::player_crouching(),
        )
    }

    pub fn with_sprites(
        position: Vector,
        min_bounds: Vector,
        max_bounds: Vector,
        standing_image: Image,
        crouching_image: Image,
    ) -> Self {
        let standing_collider = Collider::rect(
            standing_image.width() as i32,
            standing_image.height() as i32,
        );
        let crouching_collider = Collider::rect(
            crouching_image.width() as i32,
            crouching_image.height() as i32,
        );

        let object = GameObject::new(position)
            .with_image(standing_image.clone())
            .with_collider(standing_collider)
            .with_bounds(min_bounds, max_bounds);

        Self {
            object,
            standing_image,
            crouching_image,
            standing_collider,
            crouching_collider,
            crouching: false,
            grounded: false,
        }
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn position(&self) -> Vector {
        self.object.position
    }

    pub fn speed(&self) -> Option<Vector> {
        self.object.speed
    }

    /// Bottom edge of the active collider.
    pub fn bottom(&self) -> Option<f32> {
        self.object.bounds().map(|b| b.bottom)
    }

    // Offset that keeps the feet in place when swapping postures.
    fn posture_shift(&self) -> f32 {
        let standing = self.standing_collider.bounds_at(self.object.position);
        let crouching = self.crouching_collider.bounds_at(self.object.position);
        standing.bottom - crouching.bottom
    }

    /// Switch to the crouching sprite. Only valid while grounded and standing.
    pub fn crouch(&mut self) -> bool {
        if self.crouching || !self.grounded {
            return false;
        }
        let shift = self.posture_shift();
        self.object.image = Some(self.crouching_image.clone());
        self.object.collider = Some(self.crouching_collider);
        self.object.position.y += shift;
        self.crouching = true;
        true
    }

    /// Switch back to the standing sprite. Only valid while crouching.
    pub fn stand_up(&mut self) -> bool {
        if !self.crouching {
            return false;
        }
        let shift = self.posture_shift();
        self.object.image = Some(self.standing_image.clone());
        self.object.collider = Some(self.standing_collider);
        self.object.position.y -= shift;
        self.crouching = false;
        true
    }

    /// Stand up and launch upward. Only valid while grounded.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.stand_up();
        self.object.speed = Some(Vector::new(0.0, JUMP_SPEED));
        true
    }

    fn clamp_to_ground(&mut self) {
        let Some(collider) = self.object.collider else {
            return;
        };
        let ground = self.object.max_bounds.map(|b| b.y).unwrap_or(0.0);
        let bottom = collider.bounds_at(self.object.position).bottom;

        if bottom >= ground {
            self.object.position.y = ground - collider.height() as f32;
            self.object.speed = Some(Vector::ZERO);
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

impl Movable for Player {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    /// Gravity, positional update, then ground clamp.
    fn advance(&mut self) -> MoveOutcome {
        let mut outcome = MoveOutcome::Moved;
        if let Some(speed) = self.object.speed.as_mut() {
            speed.y += GRAVITY;
            outcome = self.object.advance();
        }
        self.clamp_to_ground();
        outcome
    }
}
