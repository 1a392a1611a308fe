mod cli;

use cli::commands::Command;
use cli::KInARow;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    KInARow::from_args().execute();
}
