use std::collections::VecDeque;

use crate::board::piece::PromotionChoice;
use crate::board::side::Side;
use crate::input_handler::{self, parse_promotion, InputError, MoveInput};

/// Where the game loop gets a human player's moves from.
pub trait InputSource {
    fn get_move(&mut self, side: Side) -> Result<MoveInput, InputError>;
    fn get_promotion(&mut self, side: Side) -> Result<PromotionChoice, InputError>;
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&mut self, _side: Side) -> Result<MoveInput, InputError> {
        input_handler::parse_move_input()
    }

    fn get_promotion(&mut self, _side: Side) -> Result<PromotionChoice, InputError> {
        input_handler::parse_promotion_input()
    }
}

/// Replays a fixed list of input lines, then quits.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self, _side: Side) -> Result<MoveInput, InputError> {
        match self.lines.pop_front() {
            Some(line) => line.parse(),
            None => Ok(MoveInput::Quit),
        }
    }

    fn get_promotion(&mut self, _side: Side) -> Result<PromotionChoice, InputError> {
        let line = self.lines.pop_front().unwrap_or_else(|| "q".to_string());
        parse_promotion(&line)
    }
}
