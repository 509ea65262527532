//! Named cells for human-facing input and output.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A named cell on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

impl Position {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses what a person types: a cell number 1-9 as printed on the board,
    /// or a label such as `center` or `top left`.
    pub fn parse_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(input);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
