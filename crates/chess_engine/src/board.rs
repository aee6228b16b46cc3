//! Board model
//!
//! A total mapping from [`Square`] to `Option<Piece>`, stored as an 8x8 array indexed `[rank][file]`. The board has
//! no rules of its own; it only keeps two things consistent:
//!
//! - at most one piece per square (the array makes that structural)
//! - a stored piece's `square` field always matches the slot it sits in
//!
//! The board is `Copy` (64 small slots), which is what lets the legality filter test a move on a throwaway copy.

use crate::constants::{BACK_RANK, KING_HOME_FILE};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard initial placement
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                board.set(Square::at(file as u8, color.back_rank()), Some((kind, color)));
            }
            for file in 0..8 {
                board.set(
                    Square::at(file, color.pawn_rank()),
                    Some((PieceKind::Pawn, color)),
                );
            }
        }
        debug_assert_eq!(board.king_square(Color::White).map(Square::file), Some(KING_HOME_FILE));
        board
    }

    /// Put a fresh piece on an empty square (board setup)
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> ChessEngineResult<()> {
        if self.piece_at(square).is_some() {
            return Err(ChessEngineError::SquareOccupied { square });
        }
        self.set(square, Some((kind, color)));
        Ok(())
    }

    /// Builder form of [`Board::place`]
    pub fn with(mut self, kind: PieceKind, color: Color, square: Square) -> ChessEngineResult<Self> {
        self.place(kind, color, square)?;
        Ok(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Bounds-checked lookup; out-of-range coordinates are simply empty
    #[inline]
    pub fn piece_at_coords(&self, file: i32, rank: i32) -> Option<Piece> {
        Square::new(file, rank).and_then(|square| self.piece_at(square))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Occupied by a piece of `color`
    #[inline]
    pub fn is_friendly(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|piece| piece.color == color)
    }

    /// Occupied by a piece of the other color
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|piece| piece.color != color)
    }

    /// All pieces, rank-major from a1
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|slot| *slot)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color).filter(|piece| piece.kind == kind).count()
    }

    /// Remove and return whatever stands on `square`
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    /// Store `piece` on `square`, rewriting its `square` field to match
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] =
            piece.map(|piece| Piece { square, ..piece });
    }

    fn set(&mut self, square: Square, kind_color: Option<(PieceKind, Color)>) {
        self.put(square, kind_color.map(|(kind, color)| Piece::new(kind, color, square)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(PieceKind::Pawn, Color::White), 8);
        assert_eq!(board.count(PieceKind::Pawn, Color::Black), 8);
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));

        let queen = board.piece_at(sq("d8")).unwrap();
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
        assert_eq!(queen.move_count, 0);
        assert!(board.is_empty(sq("e4")));
    }

    #[test]
    fn test_piece_square_field_matches_slot() {
        let board = Board::standard();
        for square in Square::all() {
            if let Some(piece) = board.piece_at(square) {
                assert_eq!(piece.square, square);
            }
        }
    }

    #[test]
    fn test_piece_at_coords_out_of_range_is_none() {
        let board = Board::standard();
        assert!(board.piece_at_coords(-1, 0).is_none());
        assert!(board.piece_at_coords(0, 8).is_none());
        assert!(board.piece_at_coords(100, -100).is_none());
        assert!(board.piece_at_coords(0, 0).is_some());
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::White, sq("a1")).unwrap();
        let err = board.place(PieceKind::Knight, Color::Black, sq("a1"));
        assert_eq!(err, Err(ChessEngineError::SquareOccupied { square: sq("a1") }));
    }

    #[test]
    fn test_put_rewrites_square_field() {
        let mut board = Board::standard();
        let knight = board.take(sq("g1")).unwrap();
        board.put(sq("f3"), Some(knight));
        assert_eq!(board.piece_at(sq("f3")).unwrap().square, sq("f3"));
        assert!(board.is_empty(sq("g1")));
    }

    #[test]
    fn test_friend_and_enemy_queries() {
        let board = Board::standard();
        assert!(board.is_friendly(sq("a2"), Color::White));
        assert!(board.is_enemy(sq("a7"), Color::White));
        assert!(!board.is_enemy(sq("a4"), Color::White));
    }
}
