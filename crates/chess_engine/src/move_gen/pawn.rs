//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent if empty
//! - **Double push**: from the starting rank, two squares if both are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto the empty square an enemy pawn skipped over with a double push on the
//!   immediately preceding move, provided that pawn now stands beside this one
//!
//! Promotion is not decided here; a push or capture onto the last rank is emitted like any other destination and the
//! promotion kind is attached when the move is executed.

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves for `pawn`
///
/// Order: single push, double push, capture toward the a-file, capture toward the h-file.
pub fn generate_pawn_moves(
    board: &Board,
    pawn: &Piece,
    last_move: Option<&MoveRecord>,
    moves: &mut Vec<Square>,
) {
    let forward = pawn.color.forward();
    let from = pawn.square;

    if let Some(one) = from.offset(0, forward).filter(|sq| board.is_empty(*sq)) {
        moves.push(one);
        if from.rank() == pawn.color.pawn_rank() {
            if let Some(two) = from.offset(0, 2 * forward).filter(|sq| board.is_empty(*sq)) {
                moves.push(two);
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(side, forward) else {
            continue;
        };
        if board.is_enemy(target, pawn.color) {
            moves.push(target);
        } else if board.is_empty(target) && en_passant_victim(board, pawn, side, last_move).is_some() {
            moves.push(target);
        }
    }
}

/// Square of the enemy pawn `pawn` could take en passant toward `side` (-1 = a-file, +1 = h-file)
fn en_passant_victim(
    board: &Board,
    pawn: &Piece,
    side: i8,
    last_move: Option<&MoveRecord>,
) -> Option<Square> {
    let last = last_move?;
    let beside = pawn.square.offset(side, 0)?;
    if last.color == pawn.color || !last.is_double_step() || last.to != beside {
        return None;
    }
    board
        .piece_at(beside)
        .filter(|victim| victim.kind == PieceKind::Pawn && victim.color != pawn.color)
        .map(|victim| victim.square)
}
