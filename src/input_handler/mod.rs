use std::io::{self, Write};

use crate::board::piece::PromotionChoice;

mod input;

pub use input::{parse_promotion, InputError, MoveInput};

fn read_line(prompt: &str) -> Result<String, InputError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err(InputError::IOError {
            error: "end of input".to_string(),
        }),
        Ok(_) => Ok(input.trim().to_string()),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

/// Reads one move from stdin: `e2e4`, `e2 e4`, `12 28` or `quit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    read_line("> ")?.parse()
}

pub fn parse_promotion_input() -> Result<PromotionChoice, InputError> {
    parse_promotion(&read_line("promote to (q, r, b, n): ")?)
}
