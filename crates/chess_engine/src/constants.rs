//! # Engine Constants - Piece Values, Directions & Evaluation Weights
//!
//! ## Centipawn Valuation
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000 (effectively unbounded; kings are never captured, so both sides always carry it and it
//!   cancels out of the material balance)
//!
//! ## Mate Scores
//!
//! A side with no legal moves while in check scores `MATE_SCORE` against itself. `MATE_SCORE` sits far above any
//! reachable static evaluation (two kings plus every other piece is well under 100,000) so the search can never
//! confuse "up a lot of material" with "forced mate". The remaining depth is added on top so a shorter mate beats
//! a longer one.
//!
//! ## Evaluation Weights
//!
//! Every positional term is a count multiplied by one of the weights below and taken as a differential
//! (own minus opponent).

use crate::types::PieceKind;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

/// Score for being checkmated, before the depth bonus
pub const MATE_SCORE: i32 = 1_000_000;
/// Score of a stalemate
pub const DRAW_SCORE: i32 = 0;
/// Bound larger than any score the search can produce
pub const SCORE_INFINITY: i32 = i32::MAX / 2;

/// Per legal move
pub const MOBILITY_WEIGHT: i32 = 10;
/// Per piece standing on d4, e4, d5 or e5
pub const CENTER_WEIGHT: i32 = 30;
/// Per knight, bishop, rook or queen off its back rank
pub const DEVELOPMENT_WEIGHT: i32 = 15;
/// Per opposing attack on the king square or one of its neighbours
pub const KING_ZONE_ATTACK_PENALTY: i32 = 20;
/// Per own piece covering a square next to the king
pub const KING_ZONE_COVER_BONUS: i32 = 5;
/// Per pseudo-move landing on an enemy piece
pub const THREAT_WEIGHT: i32 = 5;
/// Hanging pieces cost `value / HANGING_DIVISOR`
pub const HANGING_DIVISOR: i32 = 2;
/// Capturing onto a square the opponent attacks
pub const BAD_CAPTURE_PENALTY: i32 = 60;
/// Moving a piece straight back where it came from
pub const OSCILLATION_PENALTY: i32 = 40;

/// Search depth used when a caller passes 0
pub const MIN_SEARCH_DEPTH: u32 = 1;

/// Knight jump offsets `(d_file, d_rank)`
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King step offsets `(d_file, d_rank)`
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Orthogonal rays: north, east, south, west
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal rays: north-east, south-east, south-west, north-west
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// d4, e4, d5, e5 as `(file, rank)`
pub const CENTER_SQUARES: [(u8, u8); 4] = [(3, 3), (4, 3), (3, 4), (4, 4)];

/// File the king starts on
pub const KING_HOME_FILE: u8 = 4;

/// Back-rank layout from the a-file to the h-file
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Material value of a piece kind
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}
