//! Move and promotion input parsing.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::piece::PromotionChoice;
use crate::board::square::Square;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])\\s*([a-h][1-8])$").expect("COORD_RE regex should be valid")
});
static INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(\\d{1,2})\\s+(\\d{1,2})$").expect("INDEX_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("square index {index} is off the board")]
    SquareOutOfRange { index: u32 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate { from: Square, to: Square },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        if trimmed == "q" || trimmed == "quit" {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = COORD_RE.captures(&trimmed) {
            return match (Square::from_algebraic(&caps[1]), Square::from_algebraic(&caps[2])) {
                (Some(from), Some(to)) => Ok(MoveInput::Coordinate { from, to }),
                _ => Err(InputError::InvalidInput {
                    input: input.to_string(),
                }),
            };
        }

        if let Some(caps) = INDEX_RE.captures(&trimmed) {
            let from = parse_index(&caps[1], input)?;
            let to = parse_index(&caps[2], input)?;
            return Ok(MoveInput::Coordinate { from, to });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

fn parse_index(digits: &str, input: &str) -> Result<Square, InputError> {
    let index: u32 = digits.parse().map_err(|_| InputError::InvalidInput {
        input: input.to_string(),
    })?;
    Square::try_from_index(index as i32).ok_or(InputError::SquareOutOfRange { index })
}

pub fn parse_promotion(input: &str) -> Result<PromotionChoice, InputError> {
    input.parse().map_err(|_| InputError::InvalidInput {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            "e2e4".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate { from: E2, to: E4 })
        );
        assert_eq!(
            "  G8 f6 ".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate { from: G8, to: F6 })
        );
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(
            "12 28".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate { from: E2, to: E4 })
        );
        assert_eq!(
            "12 64".parse::<MoveInput>(),
            Err(InputError::SquareOutOfRange { index: 64 })
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("quit".parse::<MoveInput>(), Ok(MoveInput::Quit));
        assert_eq!("Q".parse::<MoveInput>(), Ok(MoveInput::Quit));
    }

    #[test]
    fn test_reject_garbage() {
        for input in ["", "e9e4", "i2i4", "e2", "Nf3", "1228"] {
            assert!(matches!(
                input.parse::<MoveInput>(),
                Err(InputError::InvalidInput { .. })
            ), "{:?} should not parse", input);
        }
    }

    #[test]
    fn test_parse_promotion() {
        assert_eq!(parse_promotion("q"), Ok(PromotionChoice::Queen));
        assert_eq!(parse_promotion("N"), Ok(PromotionChoice::Knight));
        assert!(parse_promotion("k").is_err());
    }
}
