//! Move ordering for alpha-beta pruning
//!
//! Captures of the most valuable victim go first. The sort is stable, so moves of equal value keep generation order
//! and the search result stays reproducible.

use crate::board::Board;
use crate::constants::{piece_value, PAWN_VALUE};
use crate::move_gen::is_promotion;
use crate::types::*;

/// Value of whatever `mv` would capture; en passant counts as a pawn
pub(crate) fn captured_value(board: &Board, mv: &Move) -> i32 {
    match board.piece_at(mv.to) {
        Some(victim) => piece_value(victim.kind),
        None => match board.piece_at(mv.from) {
            Some(mover) if mover.kind == PieceKind::Pawn && mover.square.file() != mv.to.file() => PAWN_VALUE,
            _ => 0,
        },
    }
}

/// Replace each promoting move with one move per promotion kind, Queen first
pub(crate) fn expand_promotions(board: &Board, moves: Vec<Move>) -> Vec<Move> {
    let mut expanded = Vec::with_capacity(moves.len());
    for mv in moves {
        match board.piece_at(mv.from) {
            Some(piece) if is_promotion(&piece, mv.to) => expanded.extend(
                PieceKind::PROMOTIONS
                    .iter()
                    .map(|&kind| Move::with_promotion(mv.from, mv.to, kind)),
            ),
            _ => expanded.push(mv),
        }
    }
    expanded
}

/// Sort by descending captured value
pub(crate) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(captured_value(board, mv)));
}
