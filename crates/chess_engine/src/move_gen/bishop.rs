//! Bishop move generation
//!
//! Bishops slide diagonally until blocked; see [`super::sliding`].

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves (north-east, south-east, south-west, north-west rays)
pub fn generate_bishop_moves(board: &Board, bishop: &Piece, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(board, bishop, &BISHOP_DIRS, moves);
}
