//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod watch;
