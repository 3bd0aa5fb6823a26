//! Canonical board coordinate types for the project.

use std::fmt;
use std::str::FromStr;

use crate::board_markup::ELEMENT_ID_PREFIX;

/// Board column, `a` through `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// Board row, `1` through `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// Square coloring, named after the CSS class it renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl File {
    /// Files in left-to-right order.
    pub const ALL: [File; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Self::from_index(c as usize - 'a' as usize),
            _ => None,
        }
    }
}

impl Rank {
    /// Ranks in ascending order; iterate in reverse for top-to-bottom display.
    pub const ALL: [Rank; 8] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Eighth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The printed rank number, 1 through 8.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as usize - '1' as usize),
            _ => None,
        }
    }
}

impl Shade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    pub fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Dark when the rank number plus the file index is odd, so `a1` is dark.
    pub fn shade(self) -> Shade {
        if (self.rank.number() as usize + self.file.index()) % 2 == 1 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    /// The id carried by this square's cell in the board markup, e.g. `space-e4`.
    pub fn element_id(self) -> String {
        format!("{ELEMENT_ID_PREFIX}{self}")
    }

    /// Parse the id of a square cell back into its square.
    pub fn from_element_id(id: &str) -> Result<Self, SquareError> {
        id.strip_prefix(ELEMENT_ID_PREFIX)
            .ok_or_else(|| SquareError::MissingPrefix(id.to_string()))?
            .parse()
    }

    /// Zero-based `(rank, file)` pair: `a1` is `(0, 0)`, `h8` is `(7, 7)`.
    pub fn coordinates(self) -> (usize, usize) {
        (self.rank.index(), self.file.index())
    }

    pub fn from_coordinates(rank: usize, file: usize) -> Option<Self> {
        Some(Self::new(File::from_index(file)?, Rank::from_index(rank)?))
    }

    /// All 64 squares as they appear on screen: rank 8 first, `a` to `h` within a rank.
    pub fn all_in_display_order() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .rev()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(file, rank)))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidLength(s.to_string()));
        };

        let file = File::from_char(f).ok_or(SquareError::InvalidFile(f))?;
        let rank = Rank::from_char(r).ok_or(SquareError::InvalidRank(r))?;
        Ok(Square::new(file, rank))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("Expected a two-character square, got {0:?}")]
    InvalidLength(String),
    #[error("Invalid file character: {0}")]
    InvalidFile(char),
    #[error("Invalid rank character: {0}")]
    InvalidRank(char),
    #[error("Element id {0:?} does not start with \"space-\"")]
    MissingPrefix(String),
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
