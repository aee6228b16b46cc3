//! Sliding piece move generation
//!
//! Common ray-casting for bishops, rooks and queens. Along each direction a ray:
//! 1. extends through empty squares
//! 2. includes the first enemy-occupied square (a capture) and stops
//! 3. stops just before a friendly-occupied square

use crate::board::Board;
use crate::types::*;

/// Cast rays from `piece` along `directions`, appending reachable squares
///
/// # Arguments
///
/// * `board` - Position to generate on
/// * `piece` - Sliding piece; its `square` is the origin
/// * `directions` - `(d_file, d_rank)` steps, visited in order
/// * `moves` - Output vector to append destinations to
pub fn generate_sliding_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(df, dr) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(df, dr) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// First occupied square along `(df, dr)` from `from`, exclusive
pub fn first_blocker(board: &Board, from: Square, df: i8, dr: i8) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(df, dr) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROOK_DIRS;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_ray_stops_at_pieces() {
        let board = Board::empty()
            .with(PieceKind::Rook, Color::White, sq("a1"))
            .and_then(|b| b.with(PieceKind::Pawn, Color::Black, sq("a3")))
            .and_then(|b| b.with(PieceKind::Pawn, Color::White, sq("c1")))
            .unwrap();
        let rook = board.piece_at(sq("a1")).unwrap();
        let mut moves = Vec::new();
        generate_sliding_moves(&board, &rook, &ROOK_DIRS, &mut moves);
        // North: a2, a3 (capture). East: b1, then own pawn.
        assert_eq!(moves, vec![sq("a2"), sq("a3"), sq("b1")]);
    }

    #[test]
    fn test_first_blocker() {
        let board = Board::standard();
        let blocker = first_blocker(&board, sq("e4"), 0, 1).unwrap();
        assert_eq!(blocker.square, sq("e7"));
        assert!(first_blocker(&board, sq("e4"), 1, 0).is_none());
    }
}
