//! Watch command - watch the computer play a whole game.

use std::str::FromStr;

use kinarow::alpha_beta_searcher::{CacheKeying, SearchConfig};
use kinarow::board::GameType;
use kinarow::game::{Agent, AgentConfig, GameAgent, Match, RandomAgent};
use structopt::StructOpt;
use thiserror::Error;

use super::Command;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Minimax,
    Random,
}

#[derive(Error, Debug)]
#[error("unknown opponent `{0}`, expected `minimax` or `random`")]
pub struct InvalidOpponent(String);

impl FromStr for Opponent {
    type Err = InvalidOpponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(Opponent::Minimax),
            "random" => Ok(Opponent::Random),
            _ => Err(InvalidOpponent(s.to_string())),
        }
    }
}

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        long = "game",
        default_value = "tic-tac-toe",
        help = "tic-tac-toe, four-in-a-row, five-in-a-row or five-in-a-row-forbidden"
    )]
    pub game_type: GameType,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "max-moves", default_value = "1000")]
    pub max_moves: usize,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
    #[structopt(long, default_value = "minimax")]
    pub opponent: Opponent,
    #[structopt(long = "cache", help = "Enable the transposition cache")]
    pub cache: bool,
}

impl WatchArgs {
    fn minimax_agent(&self, nickname: &str) -> Box<dyn GameAgent> {
        let keying = if self.cache {
            Some(CacheKeying::DepthAware)
        } else {
            None
        };
        let search = SearchConfig::new(self.depth).with_transposition_cache(keying);
        Box::new(Agent::new(AgentConfig {
            nickname: nickname.to_string(),
            ..AgentConfig::with_search(search)
        }))
    }
}

impl Command for WatchArgs {
    fn execute(self) {
        let x_agent = self.minimax_agent("Minimax X");
        let o_agent: Box<dyn GameAgent> = match self.opponent {
            Opponent::Minimax => self.minimax_agent("Minimax O"),
            Opponent::Random => Box::new(RandomAgent::default()),
        };

        let mut game = Match::new(self.game_type, x_agent, o_agent).with_seed(self.seed);
        match game.play(self.max_moves) {
            Ok(report) => print!("{}", report),
            Err(err) => {
                eprintln!("Match failed: {}", err);
                std::process::exit(1);
            }
        }
    }
}
