//! Shared utilities for commands.

use lookahead_chess::game::input_source::InputSource;
use lookahead_chess::game::r#loop::{GameLoop, LoopExit};
use lookahead_chess::game::GameStatus;

pub(crate) fn run_game_loop<I: InputSource>(mut game_loop: GameLoop<I>) {
    match game_loop.run() {
        Ok(LoopExit::Finished(ending)) => println!("{}", GameStatus::Over(ending)),
        Ok(LoopExit::Quit) => println!("Goodbye!"),
        Err(error) => {
            eprintln!("error: {}", error);
            std::process::exit(1);
        }
    }
}
