//! Terminal runner (default binary).
//!
//! Fixed-tick loop: read at most one key, advance the session, render, sleep
//! out the rest of the tick. Input, physics and rendering all happen on this
//! one thread.

use std::fs::OpenOptions;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_runner::core::{GameConfig, GameState};
use tui_runner::input::{handle_key_event, should_quit};
use tui_runner::term::{FrameBuffer, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `RUNNER_LOG_PATH` only; the terminal is owned by the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let tick_ms = config.tick_ms;
    let tick_duration = Duration::from_millis(tick_ms as u64);

    let mut game = GameState::new(config, seed);
    let view = GameView::default();
    let (w, h) = GameView::frame_size(&game);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let tick_start = Instant::now();

        // One buffered key per tick; anything else waits for later ticks.
        if event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        game.tick(tick_ms);

        view.render_into(&game, &mut fb);
        term.draw(&fb)?;

        thread::sleep(tick_duration.saturating_sub(tick_start.elapsed()));
    }
}
