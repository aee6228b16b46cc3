//! Attack detection and square checking
//!
//! A piece *attacks* (or covers) a square when it could capture something standing there:
//!
//! - pawns: the two forward diagonals, whatever is on them
//! - knights and kings: their step offsets (castling never attacks)
//! - sliders: each ray up to and including the first occupied square of either color
//!
//! Covering a friendly piece counts, which is what makes "defended" a plain attack query. For an occupied king square
//! this is the same set as "an opposing pseudo-move lands here", so check detection uses it directly.
//!
//! ## Algorithm
//!
//! Queries about one square work backwards from that square: look for knights a knight-jump away, pawns one diagonal
//! behind, and the first blocker along each ray. That touches at most a few dozen squares instead of generating
//! every enemy move.

use tracing::error;

use super::sliding::first_blocker;
use crate::board::Board;
use crate::constants::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
use crate::types::*;

/// Squares `piece` attacks, in generation order
pub fn attacked_squares(board: &Board, piece: &Piece) -> Vec<Square> {
    let from = piece.square;
    let steps = |offsets: &[(i8, i8)]| -> Vec<Square> {
        offsets.iter().filter_map(|&(df, dr)| from.offset(df, dr)).collect()
    };
    match piece.kind {
        PieceKind::Pawn => [-1, 1]
            .into_iter()
            .filter_map(|df| from.offset(df, piece.color.forward()))
            .collect(),
        PieceKind::Knight => steps(&KNIGHT_OFFSETS),
        PieceKind::King => steps(&KING_OFFSETS),
        PieceKind::Bishop => rays(board, from, &BISHOP_DIRS),
        PieceKind::Rook => rays(board, from, &ROOK_DIRS),
        PieceKind::Queen => {
            let mut squares = rays(board, from, &ROOK_DIRS);
            squares.extend(rays(board, from, &BISHOP_DIRS));
            squares
        }
    }
}

fn rays(board: &Board, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut squares = Vec::with_capacity(14);
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            squares.push(next);
            if !board.is_empty(next) {
                break;
            }
            current = next;
        }
    }
    squares
}

/// Number of `by` pieces attacking `square`
///
/// # Examples
///
/// ```rust,ignore
/// // Black pieces bearing on f7 in the starting position: only the king
/// let count = attack_count(&Board::standard(), Square::from_algebraic("f7").unwrap(), Color::Black);
/// assert_eq!(count, 1);
/// ```
pub fn attack_count(board: &Board, square: Square, by: Color) -> u32 {
    let is = |piece: Option<Piece>, kinds: &[PieceKind]| {
        piece.is_some_and(|p| p.color == by && kinds.contains(&p.kind))
    };
    let mut count = 0;

    for &(df, dr) in &KNIGHT_OFFSETS {
        if is(square.offset(df, dr).and_then(|s| board.piece_at(s)), &[PieceKind::Knight]) {
            count += 1;
        }
    }
    for &(df, dr) in &KING_OFFSETS {
        if is(square.offset(df, dr).and_then(|s| board.piece_at(s)), &[PieceKind::King]) {
            count += 1;
        }
    }
    // A `by` pawn attacks from one rank behind, relative to its own advance
    for df in [-1, 1] {
        let origin = square.offset(df, -by.forward());
        if is(origin.and_then(|s| board.piece_at(s)), &[PieceKind::Pawn]) {
            count += 1;
        }
    }
    for &(df, dr) in &ROOK_DIRS {
        if is(first_blocker(board, square, df, dr), &[PieceKind::Rook, PieceKind::Queen]) {
            count += 1;
        }
    }
    for &(df, dr) in &BISHOP_DIRS {
        if is(first_blocker(board, square, df, dr), &[PieceKind::Bishop, PieceKind::Queen]) {
            count += 1;
        }
    }
    count
}

/// Check if `square` is attacked by any piece of `by`
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    attack_count(board, square, by) > 0
}

/// Check if `color`'s king is attacked
///
/// A board without that king is an engine fault; it is logged and reported as "not in check" so callers can
/// surface the fault through their own invariant checks rather than panicking here.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => {
            error!("[RULES] No {} king on the board", color);
            false
        }
    }
}
