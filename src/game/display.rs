use termion::{clear, cursor};

use crate::board::square::Square;
use crate::game::engine::{Game, GameStatus};

pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
            clear_screen: true,
        }
    }

    /// A display that only appends frames, for piped output and tests.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            self.buffer
                .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
        }
    }

    /// Draws the board, whose turn it is and an optional message into the
    /// frame buffer. The squares of the last move are bracketed.
    pub fn draw(&mut self, game: &Game, message: Option<&str>) {
        self.clear();

        let highlighted = game.last_move().map(|m| (m.from, m.to));
        let board = game.board();

        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for rank in (0..8u8).rev() {
            self.buffer.push_str(&format!("{} │", rank + 1));
            for file in 0..8u8 {
                let square = Square::from_rank_file(rank, file);
                let piece_char = match board.get(square) {
                    Some((piece, color)) => piece.to_unicode_piece_char(color),
                    None if (rank + file) % 2 == 0 => '·',
                    None => ' ',
                };
                let cell = match highlighted {
                    Some((from, to)) if square == from || square == to => {
                        format!("[{}]│", piece_char)
                    }
                    _ => format!(" {} │", piece_char),
                };
                self.buffer.push_str(&cell);
            }
            self.buffer.push_str(&format!(" {}\n", rank + 1));

            if rank > 0 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        self.buffer
            .push_str("    a   b   c   d   e   f   g   h\n\n");

        let check = match game.status() {
            GameStatus::ToMove(_) if game.in_check() => " (CHECK)",
            _ => "",
        };
        self.buffer
            .push_str(&format!("{}{}\n", game.status(), check));

        if let Some(played) = game.last_move() {
            self.buffer.push_str(&format!(
                "Last move: {} {}{}\n",
                played.piece, played.from, played.to
            ));
        }

        if let Some(elapsed) = game.last_search_duration() {
            self.buffer
                .push_str(&format!("* Move took: {:?}\n", elapsed));
        }

        if let Some(message) = message {
            self.buffer.push_str(&format!("\n{}\n", message));
        }
    }

    pub fn render(&mut self, game: &Game, message: Option<&str>) {
        self.draw(game, message);
        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
