use cgolpaint::{Cell, Simulation};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn make_alive(width: i32, height: i32) -> Vec<Cell> {
    let mut alive = Vec::new();
    for row in 0..height {
        for col in 0..width {
            if (row + col) % 3 == 0 {
                alive.push(Cell { row, col });
            }
        }
    }
    alive
}

fn running(alive: &[Cell]) -> Simulation {
    let mut game = Simulation::from_alive(alive.iter().copied());
    game.run();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    for size in [20, 64, 128] {
        let alive = make_alive(size, size);

        group.bench_with_input(BenchmarkId::new("serial", size), &alive, |b, alive| {
            b.iter_batched(
                || running(alive),
                |mut game| game.tick(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &alive, |b, alive| {
            b.iter_batched(
                || running(alive),
                |mut game| game.tick_parallel(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
