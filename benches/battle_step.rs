use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_battle::{render_state, step, store, BattleState, GameRng};

fn bench_step(c: &mut Criterion) {
    c.bench_function("step", |b| {
        let mut rng = GameRng::new(42);
        let mut state = BattleState::initial();
        b.iter(|| {
            state = step(black_box(state), &mut rng).0;
        });
    });
}

fn bench_state_text(c: &mut Criterion) {
    let text = store::format(&BattleState::initial());
    c.bench_function("parse_state", |b| b.iter(|| store::parse(black_box(&text))));
    c.bench_function("render_board", |b| {
        b.iter(|| render_state(black_box(&BattleState::initial())))
    });
}

criterion_group!(benches, bench_step, bench_state_text);
criterion_main!(benches);
