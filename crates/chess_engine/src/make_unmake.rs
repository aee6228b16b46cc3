//! Make/unmake move operations
//!
//! [`apply`] and [`revert`] move pieces on a [`Board`] and back again, handling the three special cases that touch
//! more than the from/to squares:
//!
//! - en passant: a pawn moving diagonally onto an empty square removes the enemy pawn beside its origin
//! - castling: a two-file king move also relocates the rook from that corner
//! - promotion: a pawn reaching the last rank is replaced (Queen unless a kind is given)
//!
//! Reverting restores the board exactly, captured pieces included. Neither function touches `move_count`; only a
//! committed move in [`crate::api::Game`] does that.
//!
//! [`make_move`] / [`unmake_move`] wrap the board pair and also keep a [`GameState`]'s history and side to move in
//! step, which is what the search recurses with.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::game_state::GameState;
use crate::move_gen::is_promotion;
use crate::move_gen::king::CastleSide;
use crate::types::*;

/// Everything needed to take a move back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardUndo {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood before the move (still a pawn for promotions)
    pub moved: Piece,
    /// Captured piece, with its original square (differs from `to` en passant)
    pub captured: Option<Piece>,
    /// Castling rook `(from, to)`
    pub rook: Option<(Square, Square)>,
}

/// Apply `mv` to `board` without any legality checks
///
/// Fails only when `mv.from` is empty, leaving the board untouched.
pub fn apply(board: &mut Board, mv: Move) -> ChessEngineResult<(MoveRecord, BoardUndo)> {
    let moved = board
        .take(mv.from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })?;

    let captured = if is_en_passant(board, &moved, mv.to) {
        board.take(Square::at(mv.to.file(), mv.from.rank()))
    } else {
        board.take(mv.to)
    };

    let rook = if moved.kind == PieceKind::King {
        CastleSide::for_king_move(mv.from, mv.to).map(|side| {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = (Square::at(side.rook_from, rank), Square::at(side.rook_to, rank));
            let rook = board.take(rook_from);
            board.put(rook_to, rook);
            (rook_from, rook_to)
        })
    } else {
        None
    };

    let promotion = is_promotion(&moved, mv.to).then(|| mv.promotion.unwrap_or(PieceKind::Queen));
    let placed = match promotion {
        Some(kind) => Piece {
            kind,
            move_count: 0,
            ..moved
        },
        None => moved,
    };
    board.put(mv.to, Some(placed));

    let record = MoveRecord {
        kind: moved.kind,
        color: moved.color,
        from: mv.from,
        to: mv.to,
        captured: captured.map(|piece| piece.kind),
        promotion,
    };
    let undo = BoardUndo {
        from: mv.from,
        to: mv.to,
        moved,
        captured,
        rook,
    };
    Ok((record, undo))
}

/// Undo a move made with [`apply`]
pub fn revert(board: &mut Board, undo: &BoardUndo) {
    board.take(undo.to);
    board.put(undo.from, Some(undo.moved));
    if let Some(captured) = undo.captured {
        board.put(captured.square, Some(captured));
    }
    if let Some((rook_from, rook_to)) = undo.rook {
        let rook = board.take(rook_to);
        board.put(rook_from, rook);
    }
}

/// Pawn stepping diagonally onto an empty square
#[inline]
fn is_en_passant(board: &Board, piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && piece.square.file() != to.file() && board.is_empty(to)
}

/// Apply `mv` to the state: board, history and side to move
pub fn make_move(state: &mut GameState, mv: Move) -> ChessEngineResult<BoardUndo> {
    let (record, undo) = apply(&mut state.board, mv)?;
    state.history.push(record);
    state.side_to_move = state.side_to_move.opposite();
    Ok(undo)
}

/// Undo a move made with [`make_move`]
pub fn unmake_move(state: &mut GameState, undo: &BoardUndo) {
    revert(&mut state.board, undo);
    state.history.pop();
    state.side_to_move = state.side_to_move.opposite();
}
