//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_from_char(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

pub(crate) fn rank_from_char(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(rank as usize - '1' as usize),
        _ => None,
    }
}

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// Step by a (rank, file) delta, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0.checked_add_signed(dr)?;
        let file = self.1.checked_add_signed(df)?;
        Square::new(rank, file)
    }

    #[must_use]
    pub const fn shares_rank(self, other: Square) -> bool {
        self.0 == other.0
    }

    #[must_use]
    pub const fn shares_file(self, other: Square) -> bool {
        self.1 == other.1
    }

    /// True if both squares lie on a common diagonal or anti-diagonal.
    #[must_use]
    pub fn shares_diagonal(self, other: Square) -> bool {
        self.0.abs_diff(other.0) == self.1.abs_diff(other.1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file_from_char(f).ok_or_else(invalid)?;
        let rank = rank_from_char(r).ok_or_else(invalid)?;
        Ok(Square(rank, file))
    }
}
