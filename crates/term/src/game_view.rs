//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! Layout (origin at the terminal's top-left corner):
//!
//! - rows `0..height`: the scene, entities drawn player first, then obstacles
//! - row `0`: the score line, drawn over the scene
//! - row `height`: the game-over message, when the session has ended
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Movable};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::scene::{Layer, Scene};
use crate::types::ObstacleKind;

pub const GAME_OVER_MESSAGE: &str = "You lost! Press 'R' to restart.";

/// Glyph colors per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: CellStyle,
    pub player: CellStyle,
    pub meteor: CellStyle,
    pub cactus: CellStyle,
    pub text: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: CellStyle::default(),
            player: CellStyle::fg(Rgb::new(230, 230, 230)).bold(),
            meteor: CellStyle::fg(Rgb::new(255, 140, 60)),
            cactus: CellStyle::fg(Rgb::new(100, 200, 110)),
            text: CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        }
    }
}

/// A lightweight terminal view for the runner.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Framebuffer size needed for a session: the scene plus the message row.
    pub fn frame_size(state: &GameState) -> (u16, u16) {
        let config = state.config();
        (config.scene_width, config.scene_height.saturating_add(1))
    }

    /// Render the current game state into a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let (w, h) = Self::frame_size(state);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(state, &mut fb);
        fb
    }

    /// Render into a reused framebuffer. The frame is fully cleared first.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let (w, h) = Self::frame_size(state);
        if fb.width() != w || fb.height() != h {
            fb.reset(w, h);
        }
        fb.clear(Cell::blank(self.palette.background));

        let config = state.config();
        let scene = Scene::new(config.scene_width, config.scene_height);

        let player = Layer::new(state.player().object(), self.palette.player);
        let obstacles = state.obstacles().iter().map(|o| {
            let style = match o.kind() {
                ObstacleKind::Meteor => self.palette.meteor,
                ObstacleKind::Cactus => self.palette.cactus,
            };
            Layer::new(o.object(), style)
        });
        scene.draw(fb, std::iter::once(player).chain(obstacles));

        fb.put_str(0, 0, &format!("Score: {}", state.score()), self.palette.text);

        if state.is_game_over() {
            fb.put_str(0, config.scene_height, GAME_OVER_MESSAGE, self.palette.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::types::TICK_MS;

    #[test]
    fn frame_has_message_row() {
        let state = GameState::new(GameConfig::default(), 1);
        let fb = GameView::default().render(&state);
        assert_eq!((fb.width(), fb.height()), (50, 31));
    }

    #[test]
    fn score_line_overlays_scene() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.tick(TICK_MS);
        state.tick(TICK_MS);
        let fb = GameView::default().render(&state);
        assert!(fb.row_text(0).starts_with("Score: 2"));
    }

    #[test]
    fn no_message_while_playing() {
        let state = GameState::new(GameConfig::default(), 1);
        let fb = GameView::default().render(&state);
        assert!(fb.row_text(30).trim().is_empty());
    }
}
