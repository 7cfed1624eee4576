use super::square::Square;
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = match self.get(Square::from_rank_file(rank, file)) {
                    Some((piece, color)) => piece.to_fen(color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                // The diagram is drawn from white's side, so the first row
                // is rank 8 and the last character is h1.
                let row = i / 8;
                let col = i % 8;
                let transposed_row = 7 - row;
                let square = $crate::board::square::Square::from_rank_file(transposed_row as u8, col as u8);
                board.put(square, piece, color).expect("square listed twice");
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::square::*;
    use crate::board::Board;

    #[test]
    fn test_display_starting_position() {
        let rendered = Board::starting_position().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "8 rnbqkbnr");
        assert_eq!(lines[7], "1 RNBQKBNR");
        assert_eq!(lines[8], "  abcdefgh");
    }

    #[test]
    fn test_chess_position_orientation() {
        let board = chess_position! {
            k.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......K
        };
        assert!(board.is_occupied(A8));
        assert!(board.is_occupied(H1));
        assert_eq!(board.codes().iter().filter(|&&c| c != 0).count(), 2);
    }
}
