use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rps_rounds::{Move, PerfectPolicy, RoundConfig, RoundEngine, RoundState, SelfPlay, SelfPlayConfig};

fn bench_resolve(c: &mut Criterion) {
    let engine = RoundEngine::with_seed(RoundConfig::default(), 42).unwrap();

    c.bench_function("resolve", |b| {
        b.iter(|| {
            let mut state = RoundState::new(black_box(Move::Rock), black_box(true));
            engine.resolve(&mut state, black_box(Move::Paper))
        })
    });
}

fn bench_self_play(c: &mut Criterion) {
    let runner = SelfPlay::new(RoundConfig::default(), SelfPlayConfig::new().with_games(100));

    c.bench_function("self_play_100_games", |b| {
        b.iter(|| runner.run(|_| PerfectPolicy))
    });
}

criterion_group!(benches, bench_resolve, bench_self_play);
criterion_main!(benches);
