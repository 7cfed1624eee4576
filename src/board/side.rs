use std::fmt;

use super::color::Color;

/// Who picks the moves for a color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Controller {
    Human,
    Automated,
}

/// A color together with its controller. Validation only cares about the
/// color; the search additionally keeps a full candidate list for automated
/// sides.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Side {
    pub color: Color,
    pub controller: Controller,
}

impl Side {
    pub const fn human(color: Color) -> Self {
        Self {
            color,
            controller: Controller::Human,
        }
    }

    pub const fn automated(color: Color) -> Self {
        Self {
            color,
            controller: Controller::Automated,
        }
    }

    pub fn is_automated(&self) -> bool {
        self.controller == Controller::Automated
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.controller {
            Controller::Human => write!(f, "{} (human)", self.color),
            Controller::Automated => write!(f, "{} (computer)", self.color),
        }
    }
}
