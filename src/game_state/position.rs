//! Board coordinates.
//!
//! A `Position` is a (file, rank) pair that is always inside the board once
//! constructed. Files run `a..h` as `0..7`, ranks run `1..8` as `0..7`, so
//! `a1 == (0, 0)` and `h8 == (7, 7)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Builds a position, failing with `OutOfBounds` outside the board.
    pub fn new(file: i16, rank: i16) -> ChessResult<Self> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(ChessError::OutOfBounds { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Caller guarantees `file < 8 && rank < 8`.
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Square index with `a1 == 0`, `h1 == 7` and `h8 == 63`.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    /// Moves the position by a file and rank delta.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> ChessResult<Self> {
        Self::new(
            self.file as i16 + d_file as i16,
            self.rank as i16 + d_rank as i16,
        )
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file);
        let rank_char = char::from(b'1' + self.rank);
        write!(f, "{file_char}{rank_char}")
    }
}

impl FromStr for Position {
    type Err = ChessError;

    /// Parses algebraic coordinates such as `e4`.
    fn from_str(square: &str) -> Result<Self, Self::Err> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidNotation(format!(
                "invalid algebraic square: {square}"
            )));
        }

        let file = bytes[0];
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) {
            return Err(ChessError::InvalidNotation(format!(
                "invalid algebraic file: {}",
                file as char
            )));
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidNotation(format!(
                "invalid algebraic rank: {}",
                rank as char
            )));
        }

        Ok(Self::new_unchecked(file - b'a', rank - b'1'))
    }
}

impl TryFrom<String> for Position {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}
