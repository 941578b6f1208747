use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_runner::core::{Collider, GameConfig, GameState};
use tui_runner::term::{FrameBuffer, GameView};
use tui_runner::types::{GameAction, Vector, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345);

    c.bench_function("game_tick_100ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.apply_action(GameAction::Restart);
            }
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_overlap(c: &mut Criterion) {
    let a = Collider::rect(8, 10).bounds_at(Vector::new(3.0, 20.0));
    let b = Collider::circle(3).bounds_at(Vector::new(7.5, 15.0));

    c.bench_function("aabb_overlap", |bench| {
        bench.iter(|| black_box(&a).overlaps(black_box(&b)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345);
    for _ in 0..20 {
        state.tick(TICK_MS);
    }
    let view = GameView::default();
    let (w, h) = GameView::frame_size(&state);
    let mut fb = FrameBuffer::new(w, h);

    c.bench_function("render_frame", |b| {
        b.iter(|| view.render_into(black_box(&state), &mut fb))
    });
}

criterion_group!(benches, bench_tick, bench_overlap, bench_render);
criterion_main!(benches);
