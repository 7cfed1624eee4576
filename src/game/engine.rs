use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PromotionChoice};
use crate::board::side::{Controller, Side};
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, GameEnding};
use crate::search::{self, PlayedMove, SearchError};
use crate::validator::{self, MoveVerdict};

/// Who controls each color and where the game starts. White moves first.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub white: Controller,
    pub black: Controller,
    pub starting_position: Board,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: Controller::Human,
            black: Controller::Automated,
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    ToMove(Side),
    /// A human pawn reached its final rank and the half-move waits for a
    /// promotion choice.
    AwaitingPromotion { side: Side, square: Square },
    Over(GameEnding),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ToMove(side) => write!(f, "Turn: {}", side),
            GameStatus::AwaitingPromotion { side, square } => {
                write!(f, "Turn: {}, promoting on {}", side, square)
            }
            GameStatus::Over(GameEnding::Checkmate { loser }) => {
                write!(f, "Checkmate! {} wins", loser.opposite())
            }
            GameStatus::Over(GameEnding::Stalemate { stuck }) => {
                write!(f, "Stalemate! {} has no move", stuck)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted { promotion_pending: bool },
    Rejected(MoveVerdict),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not a human player's turn")]
    NotHumanTurn,
    #[error("it is not the computer's turn")]
    NotAutomatedTurn,
    #[error("a promotion choice is pending")]
    PromotionPending,
    #[error("there is no pawn waiting to be promoted")]
    NoPromotionPending,
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Runs one game: validates human moves, plays the automated side and
/// tracks whose turn it is until one side has no move left.
pub struct Game {
    board: Board,
    white: Controller,
    black: Controller,
    status: GameStatus,
    last_move: Option<PlayedMove>,
    last_search_duration: Option<Duration>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self {
            board: config.starting_position,
            white: config.white,
            black: config.black,
            status: GameStatus::ToMove(Side {
                color: Color::White,
                controller: config.white,
            }),
            last_move: None,
            last_search_duration: None,
        };
        game.hand_turn_to(Color::White);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Signed piece codes of the current position, a1 first.
    pub fn codes(&self) -> [i8; 64] {
        self.board.codes()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.last_move
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    pub fn side(&self, color: Color) -> Side {
        let controller = match color {
            Color::White => self.white,
            Color::Black => self.black,
        };
        Side { color, controller }
    }

    /// True if the king of the side whose turn it is stands attacked. While
    /// a promotion is pending the turn still belongs to the promoting side;
    /// the opponent is only looked at once the new piece is on the board.
    /// Once the game is over this reports on the side that was left without
    /// a move.
    pub fn in_check(&self) -> bool {
        let color = match self.status {
            GameStatus::ToMove(side) => side.color,
            GameStatus::AwaitingPromotion { side, .. } => side.color,
            GameStatus::Over(GameEnding::Checkmate { loser }) => loser,
            GameStatus::Over(GameEnding::Stalemate { stuck }) => stuck,
        };
        let mut board = self.board;
        validator::king_in_check(&mut board, color)
    }

    /// Attempts a human move. An illegal move leaves the game untouched and
    /// is reported as `MoveOutcome::Rejected`.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let side = self.current_side()?;
        if side.is_automated() {
            return Err(GameError::NotHumanTurn);
        }

        let verdict = validator::validate_move(&mut self.board, from, to, side.color);
        if !verdict.is_legal() {
            debug!("rejected {}{} for {}: {:?}", from, to, side, verdict);
            return Ok(MoveOutcome::Rejected(verdict));
        }

        let effect = self.board.apply_move(from, to)?;
        self.last_move = Some(PlayedMove {
            from,
            to,
            piece: effect.piece,
            captured: effect.captured,
            promoted: false,
        });
        info!("{} played {}{}", side, from, to);

        if self.board.has_promotable_pawn(to) {
            self.status = GameStatus::AwaitingPromotion { side, square: to };
            return Ok(MoveOutcome::Accepted {
                promotion_pending: true,
            });
        }

        self.hand_turn_to(side.color.opposite());
        Ok(MoveOutcome::Accepted {
            promotion_pending: false,
        })
    }

    /// Finishes a human pawn's move onto its final rank.
    pub fn promote(&mut self, choice: PromotionChoice) -> Result<Piece, GameError> {
        let (side, square) = match self.status {
            GameStatus::AwaitingPromotion { side, square } => (side, square),
            GameStatus::Over(_) => return Err(GameError::GameOver),
            GameStatus::ToMove(_) => return Err(GameError::NoPromotionPending),
        };

        let piece = self.board.promote(square, choice)?;
        if let Some(last_move) = self.last_move.as_mut() {
            last_move.promoted = true;
        }
        info!("{} promoted to {} on {}", side, piece, square);

        self.hand_turn_to(side.color.opposite());
        Ok(piece)
    }

    /// Plays the automated side's move. `None` means it had no move, which
    /// ends the game.
    pub fn play_automated(&mut self) -> Result<Option<PlayedMove>, GameError> {
        let side = self.current_side()?;
        if !side.is_automated() {
            return Err(GameError::NotAutomatedTurn);
        }

        let started = Instant::now();
        let result = search::play_rollout_move(&mut self.board, side.color);
        self.last_search_duration = Some(started.elapsed());

        match result {
            Ok(played) => {
                info!("{} played {}{}", side, played.from, played.to);
                self.last_move = Some(played);
                self.hand_turn_to(side.color.opposite());
                Ok(Some(played))
            }
            Err(SearchError::Checkmated { color }) => {
                let ending = evaluate::game_ending(&mut self.board, color)
                    .unwrap_or(GameEnding::Checkmate { loser: color });
                self.status = GameStatus::Over(ending);
                Ok(None)
            }
            Err(SearchError::Board(error)) => Err(error.into()),
        }
    }

    fn current_side(&self) -> Result<Side, GameError> {
        match self.status {
            GameStatus::ToMove(side) => Ok(side),
            GameStatus::AwaitingPromotion { .. } => Err(GameError::PromotionPending),
            GameStatus::Over(_) => Err(GameError::GameOver),
        }
    }

    fn hand_turn_to(&mut self, color: Color) {
        self.status = match evaluate::game_ending(&mut self.board, color) {
            Some(ending) => {
                info!("game over: {:?}", ending);
                GameStatus::Over(ending)
            }
            None => GameStatus::ToMove(self.side(color)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::chess_position;

    fn pvp(starting_position: Board) -> Game {
        Game::new(GameConfig {
            white: Controller::Human,
            black: Controller::Human,
            starting_position,
        })
    }

    #[test]
    fn test_new_game_starts_with_white() {
        let game = Game::default();
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::White)));
        assert!(!game.in_check());
        assert_eq!(game.codes(), Board::starting_position().codes());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = pvp(Board::starting_position());
        assert_eq!(
            game.attempt_move(E2, E4),
            Ok(MoveOutcome::Accepted {
                promotion_pending: false
            })
        );
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::Black)));

        // white may not move twice
        assert_eq!(
            game.attempt_move(D2, D4),
            Ok(MoveOutcome::Rejected(MoveVerdict::IllegalShape))
        );
        assert_eq!(
            game.attempt_move(E7, E5),
            Ok(MoveOutcome::Accepted {
                promotion_pending: false
            })
        );
    }

    #[test]
    fn test_rejected_move_reports_self_check() {
        let mut game = pvp(chess_position! {
            ....r..k
            ........
            ........
            ........
            ........
            ........
            ....B...
            ....K...
        });
        let before = *game.board();
        assert_eq!(
            game.attempt_move(E2, D3),
            Ok(MoveOutcome::Rejected(MoveVerdict::LeavesKingInCheck))
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::White)));
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut game = Game::default();
        game.attempt_move(E2, E4).unwrap();
        assert_eq!(game.attempt_move(E7, E5), Err(GameError::NotHumanTurn));
        assert_eq!(game.promote(PromotionChoice::Queen), Err(GameError::NoPromotionPending));

        let mut game = Game::default();
        assert_eq!(game.play_automated(), Err(GameError::NotAutomatedTurn));
    }

    #[test]
    fn test_computer_answers() {
        let mut game = Game::default();
        game.attempt_move(E2, E4).unwrap();

        let played = game.play_automated().unwrap().unwrap();
        assert_eq!(game.board().color_at(played.to), Some(Color::Black));
        assert_eq!(game.last_move(), Some(played));
        assert!(game.last_search_duration().is_some());
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::White)));
    }

    #[test]
    fn test_promotion_waits_for_choice() {
        let mut game = pvp(chess_position! {
            .......k
            P.......
            ........
            ........
            ........
            ........
            ........
            ....K...
        });
        assert_eq!(
            game.attempt_move(A7, A8),
            Ok(MoveOutcome::Accepted {
                promotion_pending: true
            })
        );
        assert_eq!(
            game.status(),
            GameStatus::AwaitingPromotion {
                side: Side::human(Color::White),
                square: A8
            }
        );
        assert_eq!(game.attempt_move(E1, E2), Err(GameError::PromotionPending));

        assert_eq!(game.promote(PromotionChoice::Rook), Ok(Piece::Rook));
        assert_eq!(game.board().get(A8), Some((Piece::Rook, Color::White)));
        assert!(game.last_move().map_or(false, |m| m.promoted));
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::Black)));
        assert!(game.in_check());
    }

    #[test]
    fn test_check_waits_for_the_promoted_piece() {
        let mut game = pvp(chess_position! {
            ........
            RP.....k
            ........
            ........
            ........
            ........
            ........
            ....K...
        });
        // the pawn uncovers the rook's attack on h7 as it reaches b8
        game.attempt_move(B7, B8).unwrap();
        assert!(matches!(game.status(), GameStatus::AwaitingPromotion { .. }));
        assert!(!game.in_check());

        game.promote(PromotionChoice::Queen).unwrap();
        assert_eq!(game.status(), GameStatus::ToMove(Side::human(Color::Black)));
        assert!(game.in_check());
    }

    #[test]
    fn test_checkmate_ends_the_game() {
        let mut game = pvp(chess_position! {
            ......k.
            r.......
            ........
            ........
            ........
            ........
            .....PPP
            .......K
        });
        game.attempt_move(F2, F3).unwrap();
        game.attempt_move(A7, A1).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Over(GameEnding::Checkmate {
                loser: Color::White
            })
        );
        assert!(game.in_check());
        assert_eq!(game.attempt_move(H1, H2), Err(GameError::GameOver));
    }

    #[test]
    fn test_stalemate_ends_the_game() {
        let mut game = pvp(chess_position! {
            k.......
            ..Q.....
            ........
            ........
            ........
            ........
            ........
            ....K...
        });
        game.attempt_move(C7, B6).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Over(GameEnding::Stalemate {
                stuck: Color::Black
            })
        );
        assert!(!game.in_check());
    }

    #[test]
    fn test_computer_delivers_mate() {
        let mut game = Game::new(GameConfig {
            white: Controller::Human,
            black: Controller::Automated,
            starting_position: chess_position! {
                r.....k.
                ........
                ........
                ........
                ........
                ........
                .....PPP
                ......K.
            },
        });
        game.attempt_move(G1, H1).unwrap();
        let played = game.play_automated().unwrap().unwrap();
        assert_eq!((played.from, played.to), (A8, A1));
        assert_eq!(
            game.status(),
            GameStatus::Over(GameEnding::Checkmate {
                loser: Color::White
            })
        );
    }
}
