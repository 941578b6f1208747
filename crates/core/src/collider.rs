//! Axis-aligned collision boxes.
//!
//! A [`Collider`] is only a shape. It is anchored to its owner's live position
//! at query time through [`Collider::bounds_at`], so moving an entity is
//! immediately visible to collision tests without any sync step.

use crate::types::Vector;

/// How a collider was constructed.
///
/// Circles are stored as their square bounding box; there is no circular math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderShape {
    Rect,
    Circle { radius: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    shape: ColliderShape,
    width: i32,
    height: i32,
}

impl Collider {
    pub fn rect(width: i32, height: i32) -> Self {
        Self {
            shape: ColliderShape::Rect,
            width,
            height,
        }
    }

    /// Square box of side `2 * radius`.
    pub fn circle(radius: i32) -> Self {
        Self {
            shape: ColliderShape::Circle { radius },
            width: radius * 2,
            height: radius * 2,
        }
    }

    pub fn shape(&self) -> ColliderShape {
        self.shape
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Edges of this collider when its top-left corner sits at `position`.
    pub fn bounds_at(&self, position: Vector) -> Aabb {
        Aabb {
            left: position.x,
            right: position.x + self.width as f32,
            top: position.y,
            bottom: position.y + self.height as f32,
        }
    }
}

/// Resolved box edges in scene coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Open-interval overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: i32, h: i32) -> Aabb {
        Collider::rect(w, h).bounds_at(Vector::new(x, y))
    }

    #[test]
    fn edges_follow_position() {
        let b = boxed(2.0, 3.0, 4, 5);
        assert_eq!(b.left, 2.0);
        assert_eq!(b.right, 6.0);
        assert_eq!(b.top, 3.0);
        assert_eq!(b.bottom, 8.0);
    }

    #[test]
    fn circle_is_square_of_diameter() {
        let c = Collider::circle(3);
        assert_eq!(c.width(), 6);
        assert_eq!(c.height(), 6);
        assert_eq!(c.shape(), ColliderShape::Circle { radius: 3 });
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (boxed(0.0, 0.0, 4, 4), boxed(2.0, 2.0, 4, 4)),
            (boxed(0.0, 0.0, 4, 4), boxed(10.0, 0.0, 4, 4)),
            (boxed(0.0, 0.0, 10, 10), boxed(3.0, 3.0, 1, 1)),
            (boxed(-2.5, 1.0, 3, 3), boxed(0.0, 0.0, 3, 3)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 4, 4);
        assert!(!a.overlaps(&boxed(4.0, 0.0, 4, 4)));
        assert!(!a.overlaps(&boxed(-4.0, 0.0, 4, 4)));
        assert!(!a.overlaps(&boxed(0.0, 4.0, 4, 4)));
        assert!(!a.overlaps(&boxed(0.0, -4.0, 4, 4)));
    }

    #[test]
    fn containment_and_partial_overlap() {
        let a = boxed(0.0, 0.0, 4, 4);
        assert!(a.overlaps(&boxed(3.9, 3.9, 4, 4)));
        assert!(a.overlaps(&boxed(1.0, 1.0, 1, 1)));
        assert!(a.overlaps(&a));
    }
}
