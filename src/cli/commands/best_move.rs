//! Best move command - search a single position and report the decision.

use std::time::Duration;

use kinarow::alpha_beta_searcher::{search_best_move, CacheKeying, SearchConfig, SearchSession};
use kinarow::board::{GameType, State};
use kinarow::evaluate::SequenceEvaluator;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long = "position")]
    pub state: State,
    #[structopt(short, default_value = "3", help = "Run length needed to win")]
    pub k: usize,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "no-alpha-beta")]
    pub no_alpha_beta: bool,
    #[structopt(long = "cache", help = "Enable the transposition cache")]
    pub cache: bool,
    #[structopt(
        long = "depth-blind-cache",
        help = "Key the cache on position alone (implies --cache); faster but approximate"
    )]
    pub depth_blind_cache: bool,
    #[structopt(long = "no-ordering")]
    pub no_ordering: bool,
    #[structopt(
        long = "time-limit-ms",
        help = "Deepen iteratively; no new depth starts after this many milliseconds"
    )]
    pub time_limit_ms: Option<u64>,
    #[structopt(long, default_value = "0", help = "Seed for the position hash keys")]
    pub seed: u64,
}

impl BestMoveArgs {
    fn search_config(&self) -> SearchConfig {
        let keying = if self.depth_blind_cache {
            Some(CacheKeying::PositionOnly)
        } else if self.cache {
            Some(CacheKeying::DepthAware)
        } else {
            None
        };

        SearchConfig::new(self.depth)
            .with_alpha_beta(!self.no_alpha_beta)
            .with_transposition_cache(keying)
            .with_move_ordering(!self.no_ordering)
            .with_time_limit(self.time_limit_ms.map(Duration::from_millis))
    }
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = self.search_config();
        let game = match GameType::new("custom", self.k, self.state) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("Invalid position: {}", err);
                std::process::exit(1);
            }
        };
        let mut session = SearchSession::new(&game, self.seed);

        let result = search_best_move(
            &mut session,
            game.initial_state(),
            &config,
            &SequenceEvaluator,
        );
        match result {
            Ok(result) => {
                println!("{}", result.best_move);
                println!("value: {}", result.value);
                println!(
                    "depth: {}{}",
                    result.depth,
                    if result.timed_out { " (timed out)" } else { "" }
                );
                println!("stats: {}", result.stats);
                println!("time: {:?}", result.duration);
                println!();
                print!("{}", result.state);
            }
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        }
    }
}
