//! Watch command - watch the computer play against itself.

use std::time::Duration;

use lookahead_chess::board::side::Controller;
use lookahead_chess::board::Board;
use lookahead_chess::game::input_source::HumanInput;
use lookahead_chess::game::r#loop::GameLoop;
use lookahead_chess::game::GameConfig;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = GameConfig {
            white: Controller::Automated,
            black: Controller::Automated,
            starting_position: Board::starting_position(),
        };
        let game_loop =
            GameLoop::new(HumanInput, config).with_delay(Duration::from_millis(self.delay_ms));
        run_game_loop(game_loop);
    }
}
