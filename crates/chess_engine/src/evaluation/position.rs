//! Positional terms: mobility, center control, development

use crate::board::Board;
use crate::constants::{CENTER_SQUARES, CENTER_WEIGHT, DEVELOPMENT_WEIGHT, MOBILITY_WEIGHT};
use crate::game_state::GameState;
use crate::legality::legal_moves_for;
use crate::types::*;

/// Legal-move count differential
///
/// Both sides are counted on the same position, as if each were to move.
pub fn mobility(state: &GameState, perspective: Color) -> i32 {
    let own = legal_moves_for(state, perspective).len() as i32;
    let theirs = legal_moves_for(state, perspective.opposite()).len() as i32;
    (own - theirs) * MOBILITY_WEIGHT
}

/// Pieces standing on d4, e4, d5, e5
pub fn center_control(board: &Board, perspective: Color) -> i32 {
    let score: i32 = CENTER_SQUARES
        .iter()
        .filter_map(|&(file, rank)| board.piece_at(Square::at(file, rank)))
        .map(|piece| if piece.color == perspective { 1 } else { -1 })
        .sum();
    score * CENTER_WEIGHT
}

/// Knights, bishops, rooks and queens that have left their back rank
pub fn development(board: &Board, perspective: Color) -> i32 {
    let developed = |color: Color| {
        board
            .pieces_of(color)
            .filter(|piece| !matches!(piece.kind, PieceKind::Pawn | PieceKind::King))
            .filter(|piece| piece.square.rank() != color.back_rank())
            .count() as i32
    };
    (developed(perspective) - developed(perspective.opposite())) * DEVELOPMENT_WEIGHT
}
