use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: i8 = 8;
pub const NUM_SQUARES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Turns a value expressed relative to `self` into the White-positive convention.
    #[must_use]
    pub fn as_white_relative(self, advantage: f64) -> f64 {
        match self {
            Self::White => advantage,
            Self::Black => -advantage,
        }
    }
}

impl From<chess::Color> for Color {
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Self::White,
            chess::Color::Black => Self::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<chess::Piece> for PieceType {
    fn from(piece: chess::Piece) -> Self {
        match piece {
            chess::Piece::Pawn => Self::Pawn,
            chess::Piece::Knight => Self::Knight,
            chess::Piece::Bishop => Self::Bishop,
            chess::Piece::Rook => Self::Rook,
            chess::Piece::Queen => Self::Queen,
            chess::Piece::King => Self::King,
        }
    }
}

/// A board coordinate. `file` and `rank` are both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: i32, rank: i32) -> Result<Self, EngineError> {
        let on_board = 0..i32::from(BOARD_SIZE);
        if on_board.contains(&file) && on_board.contains(&rank) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(EngineError::OutOfRange { file, rank })
        }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `(d_file, d_rank)` away, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = i8::try_from(self.file).ok()?.checked_add(d_file)?;
        let rank = i8::try_from(self.rank).ok()?.checked_add(d_rank)?;
        Self::new(i32::from(file), i32::from(rank)).ok()
    }

    /// All 64 squares in index order. The order is stable.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..64).map(|i| Self {
            file: i % 8,
            rank: i / 8,
        })
    }

    pub fn to_chess(self) -> chess::Square {
        chess::Square::make_square(
            chess::Rank::from_index(self.rank as usize),
            chess::File::from_index(self.file as usize),
        )
    }
}

impl From<chess::Square> for Square {
    fn from(square: chess::Square) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self {
            file: square.get_file().to_index() as u8,
            rank: square.get_rank().to_index() as u8,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file);
        write!(f, "{file}{}", self.rank + 1)
    }
}

/// Read-only snapshot of a piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub location: Square,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color, location: Square) -> Self {
        Self {
            piece_type,
            color,
            location,
        }
    }
}
