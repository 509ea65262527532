//! The 3x3 grid.

use super::mark::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// 3x3 board, cells indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell, `None` if out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(cell, _)| cell)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Returns a copy of this board with `mark` written at `cell`.
    ///
    /// Callers check range and emptiness first.
    pub(crate) fn with_mark(&self, cell: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.squares[cell] = Square::Occupied(mark);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                match self.squares[cell] {
                    Square::Empty => write!(f, "{}", cell + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A board string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {}", message)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub message: String,
}

impl BoardParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parses nine cells written row by row: `X`, `O`, or one of `.`, `-`, `_`
/// for an empty cell. Row separators (`/`, `|`, whitespace) are skipped.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELL_COUNT];
        let mut filled = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            if filled == CELL_COUNT {
                return Err(BoardParseError::new(format!(
                    "more than {} cells in {:?}",
                    CELL_COUNT, s
                )));
            }
            squares[filled] = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            filled += 1;
        }

        if filled != CELL_COUNT {
            return Err(BoardParseError::new(format!(
                "expected {} cells, found {}",
                CELL_COUNT, filled
            )));
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|cell| board.is_empty(cell)));
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(next.count(Mark::X), 1);
    }

    #[test]
    fn test_parse_with_row_separators() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XX.".parse::<Board>().is_err());
        assert!("XX.OO....X".parse::<Board>().is_err());
        assert!("XX.OO...Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X...O...O".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|O");
    }
}
