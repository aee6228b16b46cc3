//! Material evaluation
//!
//! Kings are counted like everything else; both sides always have one, so they cancel.

use crate::board::Board;
use crate::constants::piece_value;
use crate::types::Color;

/// Material of `perspective` minus material of the opponent
pub fn material_balance(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|piece| {
            let value = piece_value(piece.kind);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}
