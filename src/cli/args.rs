//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, pvp::PvpArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "Chess with a three-ply lookahead computer opponent ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer. You play white unless you pick `--color black` or `--color random`. Enter moves as `e2e4` or as square indices like `12 28`, and `quit` to leave."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, pausing `--delay-ms` (default: 1000) between moves."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
        }
    }
}
