//! PvP command - play a game against another human.

use lookahead_chess::board::side::Controller;
use lookahead_chess::board::Board;
use lookahead_chess::game::input_source::HumanInput;
use lookahead_chess::game::r#loop::GameLoop;
use lookahead_chess::game::GameConfig;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let config = GameConfig {
            white: Controller::Human,
            black: Controller::Human,
            starting_position: Board::starting_position(),
        };
        run_game_loop(GameLoop::new(HumanInput, config));
    }
}
