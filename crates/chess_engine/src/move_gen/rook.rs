//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked; see [`super::sliding`].

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves (north, east, south, west rays)
pub fn generate_rook_moves(board: &Board, rook: &Piece, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(board, rook, &ROOK_DIRS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_on_open_board() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let board = Board::empty().with(PieceKind::Rook, Color::White, d4).unwrap();
        let mut moves = Vec::new();
        generate_rook_moves(&board, &board.piece_at(d4).unwrap(), &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
