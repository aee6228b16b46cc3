//! Legality filter
//!
//! A pseudo-legal move is legal when, after playing it on a throwaway copy of the board, the mover's king is not
//! attacked. Under [`CastlingRule::Standard`] a castle must also not start in check nor cross an attacked square;
//! the landing square is covered by the general test.
//!
//! Nothing here mutates the state it is given.

use crate::board::Board;
use crate::game_state::{CastlingRule, GameState};
use crate::make_unmake::apply;
use crate::move_gen::attack::{is_in_check, is_square_attacked};
use crate::move_gen::king::CastleSide;
use crate::move_gen::pseudo_moves;
use crate::types::*;

/// Is `mv` a legal move for whichever piece stands on `mv.from`?
///
/// Checks pseudo-legality too, so any from/to pair may be passed in. The side to move is not consulted; turn order
/// is the game's business.
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    let Some(piece) = state.board.piece_at(mv.from) else {
        return false;
    };
    pseudo_moves(&state.board, &piece, state.last_move()).contains(&mv.to)
        && keeps_king_safe(state, &piece, mv.to)
}

/// Second half of [`is_legal`], for a destination already known to be pseudo-legal
fn keeps_king_safe(state: &GameState, piece: &Piece, to: Square) -> bool {
    if piece.kind == PieceKind::King && state.rules.castling == CastlingRule::Standard {
        if let Some(side) = CastleSide::for_king_move(piece.square, to) {
            let enemy = piece.color.opposite();
            let crossing = Square::at(side.pass_through(), piece.square.rank());
            if is_in_check(&state.board, piece.color) || is_square_attacked(&state.board, crossing, enemy) {
                return false;
            }
        }
    }

    let mut scratch: Board = state.board;
    match apply(&mut scratch, Move::new(piece.square, to)) {
        Ok(_) => !is_in_check(&scratch, piece.color),
        Err(_) => false,
    }
}

/// Legal destinations of the piece on `square` (empty when the square is empty)
///
/// # Examples
///
/// ```rust,ignore
/// let state = GameState::new();
/// let targets = legal_moves(&state, Square::from_algebraic("e2").unwrap());
/// // e3 and e4
/// ```
pub fn legal_moves(state: &GameState, square: Square) -> Vec<Square> {
    let Some(piece) = state.board.piece_at(square) else {
        return Vec::new();
    };
    pseudo_moves(&state.board, &piece, state.last_move())
        .into_iter()
        .filter(|&to| keeps_king_safe(state, &piece, to))
        .collect()
}

/// All legal moves of `color`, pieces in rank-major order
///
/// Promotions are listed once without a kind.
pub fn legal_moves_for(state: &GameState, color: Color) -> Vec<Move> {
    state
        .board
        .pieces_of(color)
        .flat_map(|piece| {
            legal_moves(state, piece.square)
                .into_iter()
                .map(move |to| Move::new(piece.square, to))
        })
        .collect()
}

/// Whether `color` has at least one legal move; stops at the first one found
pub fn has_any_legal_move(state: &GameState, color: Color) -> bool {
    state.board.pieces_of(color).any(|piece| {
        pseudo_moves(&state.board, &piece, state.last_move())
            .into_iter()
            .any(|to| keeps_king_safe(state, &piece, to))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::RuleSet;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn state_of(pieces: &[(PieceKind, Color, &str)], side: Color) -> GameState {
        let mut board = Board::empty();
        for &(kind, color, at) in pieces {
            board.place(kind, color, sq(at)).unwrap();
        }
        GameState::from_board(board, side).unwrap()
    }

    #[test]
    fn test_opening_has_twenty_legal_moves() {
        let state = GameState::new();
        assert_eq!(legal_moves_for(&state, Color::White).len(), 20);
        assert_eq!(legal_moves_for(&state, Color::Black).len(), 20);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        use PieceKind::*;
        let state = state_of(
            &[
                (King, Color::White, "e1"),
                (Knight, Color::White, "e2"),
                (Rook, Color::Black, "e8"),
                (King, Color::Black, "a8"),
            ],
            Color::White,
        );
        assert!(legal_moves(&state, sq("e2")).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        use PieceKind::*;
        let state = state_of(
            &[
                (King, Color::White, "e1"),
                (Rook, Color::Black, "d8"),
                (King, Color::Black, "h8"),
            ],
            Color::White,
        );
        let moves = legal_moves(&state, sq("e1"));
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("f1")));
    }

    #[test]
    fn test_is_legal_rejects_non_pattern_moves() {
        let state = GameState::new();
        assert!(is_legal(&state, Move::new(sq("e2"), sq("e4"))));
        assert!(!is_legal(&state, Move::new(sq("e2"), sq("e5"))));
        assert!(!is_legal(&state, Move::new(sq("e4"), sq("e5"))));
    }

    fn castle_through_attack(rules: RuleSet) -> GameState {
        use PieceKind::*;
        // Black rook on f8 covers f1, the square the king crosses to reach g1
        state_of(
            &[
                (King, Color::White, "e1"),
                (Rook, Color::White, "h1"),
                (Rook, Color::Black, "f8"),
                (King, Color::Black, "a8"),
            ],
            Color::White,
        )
        .rules(rules)
    }

    #[test]
    fn test_standard_castling_forbids_crossing_attacked_square() {
        let state = castle_through_attack(RuleSet::new(CastlingRule::Standard));
        assert!(!legal_moves(&state, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_occupancy_only_castling_allows_crossing_attacked_square() {
        let state = castle_through_attack(RuleSet::new(CastlingRule::OccupancyOnly));
        assert!(legal_moves(&state, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_standard_castling_forbids_castling_out_of_check() {
        use PieceKind::*;
        let state = state_of(
            &[
                (King, Color::White, "e1"),
                (Rook, Color::White, "a1"),
                (Rook, Color::Black, "e8"),
                (King, Color::Black, "h8"),
            ],
            Color::White,
        );
        assert!(!legal_moves(&state, sq("e1")).contains(&sq("c1")));

        let relaxed = state.rules(RuleSet::new(CastlingRule::OccupancyOnly));
        assert!(legal_moves(&relaxed, sq("e1")).contains(&sq("c1")));
    }

    #[test]
    fn test_castling_into_check_is_illegal_under_both_rules() {
        use PieceKind::*;
        for rule in [CastlingRule::Standard, CastlingRule::OccupancyOnly] {
            let state = state_of(
                &[
                    (King, Color::White, "e1"),
                    (Rook, Color::White, "h1"),
                    (Rook, Color::Black, "g8"),
                    (King, Color::Black, "a8"),
                ],
                Color::White,
            )
            .rules(RuleSet::new(rule));
            assert!(!legal_moves(&state, sq("e1")).contains(&sq("g1")), "{rule:?}");
        }
    }

    #[test]
    fn test_has_any_legal_move_matches_list() {
        use PieceKind::*;
        // Black king boxed in the corner with no check: stalemate
        let state = state_of(
            &[
                (King, Color::Black, "a8"),
                (Queen, Color::White, "b6"),
                (King, Color::White, "c1"),
            ],
            Color::Black,
        );
        assert!(!has_any_legal_move(&state, Color::Black));
        assert!(legal_moves_for(&state, Color::Black).is_empty());
        assert!(has_any_legal_move(&state, Color::White));
    }
}
