//! Knight move generation
//!
//! Knights jump in an L-shape (two squares one way, one square perpendicular), ignoring anything in between. A
//! destination is valid when it is on the board and not occupied by a friendly piece.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves in [`KNIGHT_OFFSETS`] order
pub fn generate_knight_moves(board: &Board, knight: &Piece, moves: &mut Vec<Square>) {
    moves.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| knight.square.offset(df, dr))
            .filter(|to| !board.is_friendly(*to, knight.color)),
    );
}
