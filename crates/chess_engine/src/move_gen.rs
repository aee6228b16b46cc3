//! Pseudo-legal move generation
//!
//! Each piece kind has its own sub-generator; [`pseudo_moves`] dispatches on [`PieceKind`]. A pseudo-legal move
//! obeys the piece's movement pattern and occupancy rules but may still leave the mover's own king attacked; the
//! [`crate::legality`] filter removes those.
//!
//! Output order is deterministic: the sub-generator's own order, rays in the fixed direction order from
//! [`crate::constants`]. The search relies on that for reproducible tie-breaking.
//!
//! Generators never mutate the board and never look at `GameState::side_to_move`; the only history they read is
//! the last executed move (en passant).

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

use crate::board::Board;
use crate::game_state::GameState;
use crate::types::*;

/// Destination squares for `piece` on `board`
///
/// # Arguments
///
/// * `board` - Position to generate on
/// * `piece` - The moving piece; its `square` is the origin
/// * `last_move` - Most recently executed move, if any (en-passant eligibility)
///
/// # Examples
///
/// ```rust,ignore
/// let board = Board::standard();
/// let knight = board.piece_at(Square::from_algebraic("g1").unwrap()).unwrap();
/// let moves = pseudo_moves(&board, &knight, None);
/// // f3 and h3
/// ```
pub fn pseudo_moves(board: &Board, piece: &Piece, last_move: Option<&MoveRecord>) -> Vec<Square> {
    let mut moves = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, piece, last_move, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, piece, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, piece, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, piece, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, piece, &mut moves),
        PieceKind::King => king::generate_king_moves(board, piece, &mut moves),
    }
    moves
}

/// Every pseudo-legal move of `color`, pieces visited rank-major from a1
///
/// Promotions are not expanded here; a pawn reaching the last rank appears once with `promotion: None`.
pub fn pseudo_moves_for(state: &GameState, color: Color) -> Vec<Move> {
    let last_move = state.last_move();
    state
        .board
        .pieces_of(color)
        .flat_map(|piece| {
            pseudo_moves(&state.board, &piece, last_move)
                .into_iter()
                .map(move |to| Move::new(piece.square, to))
        })
        .collect()
}

/// Moving `piece` to `to` lands a pawn on its promotion rank
#[inline]
pub fn is_promotion(piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
}
