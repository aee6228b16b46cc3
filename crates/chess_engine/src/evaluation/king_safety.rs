//! King safety
//!
//! The king zone is the king's square and its (up to) eight neighbours. Each opposing attack on a zone square is a
//! penalty; each own piece other than the king covering a neighbour is a bonus.

use crate::board::Board;
use crate::constants::{KING_OFFSETS, KING_ZONE_ATTACK_PENALTY, KING_ZONE_COVER_BONUS};
use crate::move_gen::attack::attack_count;
use crate::types::*;

/// King-safety differential for `perspective`
pub fn king_safety(board: &Board, perspective: Color) -> i32 {
    side_safety(board, perspective) - side_safety(board, perspective.opposite())
}

fn side_safety(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let enemy = color.opposite();
    let neighbours = KING_OFFSETS.iter().filter_map(|&(df, dr)| king.offset(df, dr));

    let mut attacks = attack_count(board, king, enemy) as i32;
    let mut cover = 0;
    for square in neighbours {
        attacks += attack_count(board, square, enemy) as i32;
        // The king itself always covers its neighbours
        cover += attack_count(board, square, color) as i32 - 1;
    }
    cover * KING_ZONE_COVER_BONUS - attacks * KING_ZONE_ATTACK_PENALTY
}
