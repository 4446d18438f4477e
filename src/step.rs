use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::location::Coord;

/// A single-cell movement direction for a piece on the board.
///
/// Each direction maps to a unit offset vector and to the one-character
/// code used in move-sequence paths: `U`, `D`, `L` or `R`.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// One cell up, code `U`.
    Up,
    /// One cell down, code `D`.
    Down,
    /// One cell left, code `L`.
    Left,
    /// One cell right, code `R`.
    Right,
}

impl Step {
    /// The `(dx, dy)` offset of one move in this direction.
    pub fn offset(&self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The single-character path code for this direction.
    pub fn code(&self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Parse a direction from its path code, the inverse of [`Step::code`].
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
