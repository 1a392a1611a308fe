//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "kinarow",
    about = "A K-in-a-Row move-search engine using minimax with alpha-beta pruning"
)]
pub enum KInARow {
    #[structopt(
        name = "best-move",
        about = "Search the position given with `--position` (rows separated by `/`, `X`, `O`, `.` for empty and `-` for forbidden, optionally followed by ` x` or ` o` for the side to move) and print the chosen move. `-k` sets the run length needed to win (default: 3) and `--depth` the search depth (default: 3)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play a whole game of `--game` (default: tic-tac-toe) at the given `--depth` (default: 3) and print the transcript. Use `--opponent random` to have O play random moves."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for KInARow {
    fn execute(self) {
        match self {
            Self::BestMove(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
