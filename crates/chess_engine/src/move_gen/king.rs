//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any direction, onto an empty or enemy-occupied square
//! - Castling: two squares toward a rook along the back rank, when
//!   - the king has never moved and stands on its home square (e-file)
//!   - the rook in that corner is present, the same color and has never moved
//!   - every square strictly between them is empty
//!
//! Whether the king's path is attacked is not a movement rule; [`crate::legality`] applies that depending on the
//! game's [`crate::game_state::CastlingRule`].

use crate::board::Board;
use crate::constants::{KING_HOME_FILE, KING_OFFSETS};
use crate::types::*;

/// One castling direction, as files on the mover's back rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSide {
    pub rook_from: u8,
    pub rook_to: u8,
    pub king_to: u8,
    /// Files that must be empty
    pub between: &'static [u8],
}

/// Kingside first, then queenside
pub const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        rook_from: 7,
        rook_to: 5,
        king_to: 6,
        between: &[5, 6],
    },
    CastleSide {
        rook_from: 0,
        rook_to: 3,
        king_to: 2,
        between: &[1, 2, 3],
    },
];

impl CastleSide {
    /// Side whose king destination is `to`, for a king move from `from`
    ///
    /// Any two-file king move along the back rank is a castle; there is no other way for a king to cover that
    /// distance.
    pub fn for_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.rank() != to.rank() || from.file().abs_diff(to.file()) != 2 {
            return None;
        }
        CASTLE_SIDES.into_iter().find(|side| side.king_to == to.file())
    }

    /// File the king crosses on its way to `king_to`
    #[inline]
    pub const fn pass_through(&self) -> u8 {
        (KING_HOME_FILE + self.king_to) / 2
    }
}

/// Generate king steps, then castling destinations
pub fn generate_king_moves(board: &Board, king: &Piece, moves: &mut Vec<Square>) {
    moves.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| king.square.offset(df, dr))
            .filter(|to| !board.is_friendly(*to, king.color)),
    );

    let rank = king.color.back_rank();
    if king.has_moved() || king.square != Square::at(KING_HOME_FILE, rank) {
        return;
    }
    for side in CASTLE_SIDES {
        if can_castle(board, king.color, &side) {
            moves.push(Square::at(side.king_to, rank));
        }
    }
}

fn can_castle(board: &Board, color: Color, side: &CastleSide) -> bool {
    let rank = color.back_rank();
    let rook_ready = board
        .piece_at(Square::at(side.rook_from, rank))
        .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved());
    rook_ready
        && side
            .between
            .iter()
            .all(|&file| board.is_empty(Square::at(file, rank)))
}
