use std::thread;
use std::time::Duration;

use log::{debug, error};

use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Game, GameConfig, GameError, GameStatus, MoveOutcome};
use crate::game::input_source::InputSource;
use crate::input_handler::{InputError, MoveInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    Finished(GameEnding),
    Quit,
}

pub struct GameLoop<I: InputSource> {
    game: Game,
    ui: GameDisplay,
    input: I,
    delay: Option<Duration>,
    message: Option<String>,
}

impl<I: InputSource> GameLoop<I> {
    pub fn new(input: I, config: GameConfig) -> Self {
        Self::with_display(input, GameDisplay::new(), config)
    }

    pub fn with_display(input: I, ui: GameDisplay, config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            ui,
            input,
            delay: None,
            message: None,
        }
    }

    /// Pause after every automated move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> Result<LoopExit, GameError> {
        loop {
            let message = self.message.take();
            self.ui.render(&self.game, message.as_deref());

            match self.game.status() {
                GameStatus::Over(ending) => return Ok(LoopExit::Finished(ending)),
                GameStatus::AwaitingPromotion { side, .. } => {
                    match self.input.get_promotion(side) {
                        Ok(choice) => {
                            self.game.promote(choice)?;
                        }
                        Err(error) => {
                            if let Some(exit) = self.handle_input_error(error) {
                                return Ok(exit);
                            }
                        }
                    }
                }
                GameStatus::ToMove(side) if side.is_automated() => {
                    self.game.play_automated()?;
                    if let Some(delay) = self.delay {
                        thread::sleep(delay);
                    }
                }
                GameStatus::ToMove(side) => match self.input.get_move(side) {
                    Ok(MoveInput::Quit) => return Ok(LoopExit::Quit),
                    Ok(MoveInput::Coordinate { from, to }) => {
                        if let MoveOutcome::Rejected(verdict) = self.game.attempt_move(from, to)? {
                            self.message = Some(format!("{}: {}{}", verdict, from, to));
                        }
                    }
                    Err(error) => {
                        if let Some(exit) = self.handle_input_error(error) {
                            return Ok(exit);
                        }
                    }
                },
            }
        }
    }

    fn handle_input_error(&mut self, input_error: InputError) -> Option<LoopExit> {
        match input_error {
            InputError::IOError { .. } => {
                error!("{}", input_error);
                Some(LoopExit::Quit)
            }
            _ => {
                debug!("{}", input_error);
                self.message = Some(input_error.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::piece::Piece;
    use crate::board::side::Controller;
    use crate::board::square::*;
    use crate::board::Board;
    use crate::chess_position;
    use crate::game::input_source::ScriptedInput;

    fn scripted(lines: &[&str], config: GameConfig) -> GameLoop<ScriptedInput> {
        GameLoop::with_display(
            ScriptedInput::new(lines.iter().copied()),
            GameDisplay::plain(),
            config,
        )
    }

    fn pvp_config(starting_position: Board) -> GameConfig {
        GameConfig {
            white: Controller::Human,
            black: Controller::Human,
            starting_position,
        }
    }

    #[test]
    fn test_fools_mate() {
        let mut game_loop = scripted(
            &["f2f3", "e7e5", "g2g4", "d8h4"],
            pvp_config(Board::starting_position()),
        );
        assert_eq!(
            game_loop.run(),
            Ok(LoopExit::Finished(GameEnding::Checkmate {
                loser: Color::White
            }))
        );
    }

    #[test]
    fn test_bad_input_is_reported_and_skipped() {
        let mut game_loop = scripted(
            &["e2e5", "hello", "99 12", "e2e4", "quit"],
            pvp_config(Board::starting_position()),
        );
        assert_eq!(game_loop.run(), Ok(LoopExit::Quit));
        assert_eq!(game_loop.game().board().get(E4), Some((Piece::Pawn, Color::White)));
        assert_eq!(game_loop.game().board().get(E2), None);
    }

    #[test]
    fn test_promotion_prompt() {
        let mut game_loop = scripted(
            &["a7a8", "x", "n", "quit"],
            pvp_config(chess_position! {
                .......k
                P.......
                ........
                ........
                ........
                ........
                ........
                ....K...
            }),
        );
        assert_eq!(game_loop.run(), Ok(LoopExit::Quit));
        assert_eq!(
            game_loop.game().board().get(A8),
            Some((Piece::Knight, Color::White))
        );
    }

    #[test]
    fn test_computer_side_moves_without_input() {
        let mut game_loop = scripted(
            &["e2e4", "quit"],
            GameConfig::default(),
        );
        assert_eq!(game_loop.run(), Ok(LoopExit::Quit));
        let black_pieces = game_loop
            .game()
            .codes()
            .iter()
            .filter(|&&code| code < 0)
            .count();
        assert_eq!(black_pieces, 16);
        assert!(game_loop.game().last_move().is_some());
        assert_ne!(game_loop.game().codes(), {
            let mut board = Board::starting_position();
            board.apply_move(E2, E4).unwrap();
            board.codes()
        });
    }
}
