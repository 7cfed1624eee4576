mod cli;

use cli::commands::Command;
use cli::Chess;
use structopt::StructOpt;

fn main() {
    #[cfg(feature = "instrumentation")]
    lookahead_chess::instrumentation::init_tracing();
    #[cfg(not(feature = "instrumentation"))]
    env_logger::init();

    Chess::from_args().execute();
}
