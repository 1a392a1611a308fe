use kinarow::alpha_beta_searcher::{search_best_move, CacheKeying, SearchConfig, SearchSession};
use kinarow::board::{GameType, State};
use kinarow::evaluate::SequenceEvaluator;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let game = GameType::five_in_a_row();
    let opening: State = "......./......./...X.../...O.../......./......./......."
        .parse()
        .unwrap();

    c.bench_function("five in a row depth 3 alpha-beta", |b| {
        b.iter(|| search(&game, &opening, SearchConfig::new(3)))
    });
    c.bench_function("five in a row depth 3 plain minimax", |b| {
        b.iter(|| search(&game, &opening, SearchConfig::new(3).with_alpha_beta(false)))
    });
    c.bench_function("five in a row depth 3 alpha-beta with cache", |b| {
        b.iter(|| {
            search(
                &game,
                &opening,
                SearchConfig::new(3).with_transposition_cache(Some(CacheKeying::DepthAware)),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search(game: &GameType, state: &State, config: SearchConfig) {
    let mut session = SearchSession::new(game, 0);
    search_best_move(&mut session, state, &config, &SequenceEvaluator).unwrap();
}
