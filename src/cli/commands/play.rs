//! Play command - play a game against the computer.

use lookahead_chess::board::color::Color;
use lookahead_chess::board::side::Controller;
use lookahead_chess::board::Board;
use lookahead_chess::game::input_source::HumanInput;
use lookahead_chess::game::r#loop::GameLoop;
use lookahead_chess::game::GameConfig;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let (white, black) = match self.color {
            Color::White => (Controller::Human, Controller::Automated),
            Color::Black => (Controller::Automated, Controller::Human),
        };
        let config = GameConfig {
            white,
            black,
            starting_position: Board::starting_position(),
        };
        run_game_loop(GameLoop::new(HumanInput, config));
    }
}
