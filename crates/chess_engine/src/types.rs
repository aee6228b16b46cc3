//! # Core Types - Plain Data for the Rules Engine
//!
//! - [`Square`] - a validated `(file, rank)` pair, both in `0..8`
//! - [`Color`] / [`PieceKind`] - tags with a few lookups
//! - [`Piece`] - kind, color, square and the number of committed moves it has made
//! - [`Move`] - from/to plus an optional promotion kind
//! - [`MoveRecord`] - what actually happened when a move was applied
//!
//! Pieces hold no reference to their board; move generation matches on [`PieceKind`] and takes the board as an
//! argument.
//!
//! ## Coordinates
//!
//! Files run `0..8` from the a-file to the h-file, ranks `0..8` from White's back rank to Black's back rank.
//! `Square::new(4, 3)` is e4.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn advance
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank pawns start on (and may double-step from)
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Farthest rank, where pawns promote
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, strongest first
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Bishop,
    ];

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Single-letter symbol, uppercase
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A square on the 8x8 grid
///
/// Always in range; the only constructors that take raw coordinates return `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from signed coordinates
    ///
    /// Returns `None` when either coordinate falls outside `0..8`, so callers can feed it raw offsets.
    #[inline]
    pub fn new(file: i32, rank: i32) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Square at `(file, rank)` for coordinates already known to be in range
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
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

    /// Linear index `rank * 8 + file` (a1 = 0, h8 = 63)
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Square displaced by `(d_file, d_rank)`, or `None` off the board
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::new(
            self.file as i32 + d_file as i32,
            self.rank as i32 + d_rank as i32,
        )
    }

    /// All 64 squares, rank-major from a1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::at(file, rank)))
    }

    /// Parse `"e4"` style names
    pub fn from_algebraic(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
            return None;
        }
        Self::new(file as i32 - 'a' as i32, rank as i32 - '1' as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// A piece on the board
///
/// `move_count` counts committed moves only; simulated moves during legality checks and search leave it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub move_count: u32,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            move_count: 0,
        }
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Uppercase for White, lowercase for Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

/// A requested move
///
/// Capture, en-passant and castling flags are not stored; they are derived from the board when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// What a committed (or simulated) move did
///
/// The last record of a game is the sole input to en-passant eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl MoveRecord {
    /// Pawn advance of two ranks
    #[inline]
    pub fn is_double_step(&self) -> bool {
        self.kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// `other` moved the same piece straight back along this record's path
    pub fn reverses(&self, other: &MoveRecord) -> bool {
        self.kind == other.kind
            && self.color == other.color
            && self.from == other.to
            && self.to == other.from
    }
}

/// Status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}
