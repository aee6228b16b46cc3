//! Queen move generation
//!
//! A queen is a rook and a bishop on the same square: orthogonal rays first, then diagonal ones.

use super::sliding;
use crate::board::Board;
use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::types::*;

pub fn generate_queen_moves(board: &Board, queen: &Piece, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(board, queen, &ROOK_DIRS, moves);
    sliding::generate_sliding_moves(board, queen, &BISHOP_DIRS, moves);
}
