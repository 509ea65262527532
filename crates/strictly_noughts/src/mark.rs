//! The two sides of the game.

use serde::{Deserialize, Serialize};

/// A side's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Crosses, always moves first.
    X,
    /// Noughts.
    O,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Mark::from_str("x").unwrap(), Mark::X);
        assert_eq!(Mark::from_str("O").unwrap(), Mark::O);
        assert!(Mark::from_str("Z").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }
}
