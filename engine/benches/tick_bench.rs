use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use torus_snake_engine::{Direction, SessionRng, SnakeEngine};

const TURNS: [Direction; 4] = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];

fn run_ticks(width: i32, height: i32, ticks: usize) {
    let mut engine = SnakeEngine::with_rng(width, height, SessionRng::new(42))
        .expect("bench field size is valid");
    for step in 0..ticks {
        if engine.is_over() {
            engine.reset();
        }
        if step % 9 == 0 {
            engine.set_direction(TURNS[(step / 9) % TURNS.len()]);
        }
        engine.tick();
        black_box(engine.current_state());
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("1000_steps_30x20", |b| {
        b.iter(|| run_ticks(black_box(30), black_box(20), 1000))
    });

    group.bench_function("1000_steps_200x200", |b| {
        b.iter(|| run_ticks(black_box(200), black_box(200), 1000))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
