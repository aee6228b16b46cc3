//! Move validation and execution
//!
//! [`validate_move`] answers "may this piece go there right now" with a typed rejection. `commit_move` then builds
//! the successor state on a clone, so a failure at any step leaves the caller's state exactly as it was.

use tracing::{debug, error};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::game_state::GameState;
use crate::legality::legal_moves;
use crate::make_unmake::apply;
use crate::types::*;

/// Check a from/to pair against the current position
///
/// # Errors
///
/// - [`ChessEngineError::NoPieceAtSquare`] if `from` is empty
/// - [`ChessEngineError::NotYourTurn`] if the piece belongs to the side not on move
/// - [`ChessEngineError::IllegalMove`] if `to` is not among the piece's legal destinations
///
/// # Examples
///
/// ```rust,ignore
/// let state = GameState::new();
/// let pawn = validate_move(&state, sq("e2"), sq("e4"))?;
/// assert_eq!(pawn.kind, PieceKind::Pawn);
/// ```
pub fn validate_move(state: &GameState, from: Square, to: Square) -> ChessEngineResult<Piece> {
    let piece = state
        .board
        .piece_at(from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

    if piece.color != state.side_to_move {
        return Err(ChessEngineError::NotYourTurn {
            square: from,
            color: piece.color,
            side_to_move: state.side_to_move,
        });
    }

    if !legal_moves(state, from).contains(&to) {
        debug!("[RULES] Rejected {}{}: not a legal destination", from, to);
        return Err(ChessEngineError::IllegalMove { from, to });
    }

    Ok(piece)
}

/// Build the state that follows a validated move
///
/// Committed moves are the only place `move_count` changes: the mover and a castling rook each gain one, and a
/// freshly promoted piece starts from zero.
pub(crate) fn commit_move(state: &GameState, mv: Move) -> ChessEngineResult<(GameState, MoveRecord)> {
    let mut next = state.clone();
    let (record, undo) = apply(&mut next.board, mv)?;

    if record.promotion.is_none() {
        bump_move_count(&mut next.board, mv.to);
    }
    if let Some((_, rook_to)) = undo.rook {
        bump_move_count(&mut next.board, rook_to);
    }

    next.history.push(record);
    next.side_to_move = state.side_to_move.opposite();

    for color in [Color::White, Color::Black] {
        if next.board.king_square(color).is_none() {
            error!("[GAME] {} king vanished after {}", color, mv);
            return Err(ChessEngineError::InvariantViolation {
                message: format!("{color} has no king after {mv}"),
            });
        }
    }

    Ok((next, record))
}

fn bump_move_count(board: &mut Board, square: Square) {
    let piece = board.take(square).map(|piece| Piece {
        move_count: piece.move_count + 1,
        ..piece
    });
    board.put(square, piece);
}
