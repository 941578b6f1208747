//! Scene: blits entity sprites onto a fixed-size character grid.
//!
//! This module is pure (no I/O). Entities are drawn strictly in the order
//! given, so later layers overwrite earlier ones where they overlap. Every
//! sprite cell is written, spaces included.

use crate::core::GameObject;
use crate::fb::{CellStyle, FrameBuffer};

/// One entity to draw and the style of its glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub object: &'a GameObject,
    pub style: CellStyle,
}

impl<'a> Layer<'a> {
    pub fn new(object: &'a GameObject, style: CellStyle) -> Self {
        Self { object, style }
    }
}

/// Drawable region `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    width: u16,
    height: u16,
}

impl Scene {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Screen cell of an object's top-left corner.
    fn origin(object: &GameObject) -> (i32, i32) {
        (
            object.position.x.floor() as i32,
            object.position.y.floor() as i32,
        )
    }

    /// Whether any cell of the object's sprite lands inside the scene.
    pub fn is_visible(&self, object: &GameObject) -> bool {
        let Some(image) = &object.image else {
            return false;
        };
        let (ox, oy) = Self::origin(object);
        ox + (image.width() as i32) > 0
            && ox < self.width as i32
            && oy + (image.height() as i32) > 0
            && oy < self.height as i32
    }

    /// Draw `layers` in order, clipping every cell against the scene.
    pub fn draw<'a>(&self, fb: &mut FrameBuffer, layers: impl IntoIterator<Item = Layer<'a>>) {
        for layer in layers {
            if !self.is_visible(layer.object) {
                continue;
            }
            let Some(image) = &layer.object.image else {
                continue;
            };
            let (ox, oy) = Self::origin(layer.object);

            for (dy, row) in image.rows().enumerate() {
                let sy = oy + dy as i32;
                if sy < 0 || sy >= self.height as i32 {
                    continue;
                }
                for (dx, &ch) in row.iter().enumerate() {
                    let sx = ox + dx as i32;
                    if sx < 0 || sx >= self.width as i32 {
                        continue;
                    }
                    fb.put_char(sx as u16, sy as u16, ch, layer.style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Image;
    use crate::types::Vector;

    fn sprite(x: f32, y: f32, rows: &[&str]) -> GameObject {
        GameObject::new(Vector::new(x, y)).with_image(Image::from_rows(rows))
    }

    fn render(scene: Scene, objects: &[&GameObject]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(scene.width(), scene.height());
        scene.draw(
            &mut fb,
            objects.iter().map(|o| Layer::new(o, CellStyle::default())),
        );
        fb
    }

    #[test]
    fn draws_at_position() {
        let obj = sprite(1.0, 1.0, &["ab", "cd"]);
        let fb = render(Scene::new(4, 3), &[&obj]);
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), " ab ");
        assert_eq!(fb.row_text(2), " cd ");
    }

    #[test]
    fn clips_partially_visible_sprites() {
        let left = sprite(-1.0, 0.0, &["abc"]);
        let right = sprite(3.0, 1.0, &["xyz"]);
        let fb = render(Scene::new(4, 2), &[&left, &right]);
        assert_eq!(fb.row_text(0), "bc  ");
        assert_eq!(fb.row_text(1), "   x");
    }

    #[test]
    fn fractional_positions_floor() {
        let obj = sprite(1.6, 0.4, &["#"]);
        let fb = render(Scene::new(3, 1), &[&obj]);
        assert_eq!(fb.row_text(0), " # ");

        let neg = sprite(-0.4, 0.0, &["ab"]);
        let fb = render(Scene::new(3, 1), &[&neg]);
        assert_eq!(fb.row_text(0), "b  ");
    }

    #[test]
    fn later_layers_overdraw_earlier() {
        let a = sprite(0.0, 0.0, &["aaa"]);
        let b = sprite(1.0, 0.0, &["b"]);
        let fb = render(Scene::new(3, 1), &[&a, &b]);
        assert_eq!(fb.row_text(0), "aba");

        let fb = render(Scene::new(3, 1), &[&b, &a]);
        assert_eq!(fb.row_text(0), "aaa");
    }

    #[test]
    fn offscreen_and_imageless_objects_are_skipped() {
        let scene = Scene::new(4, 4);
        assert!(!scene.is_visible(&sprite(4.0, 0.0, &["#"])));
        assert!(!scene.is_visible(&sprite(-2.0, 0.0, &["##"])));
        assert!(!scene.is_visible(&sprite(0.0, 4.0, &["#"])));
        assert!(!scene.is_visible(&GameObject::new(Vector::ZERO)));
        assert!(scene.is_visible(&sprite(-1.0, -1.0, &["##", "##"])));
    }
}
