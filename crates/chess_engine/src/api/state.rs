//! Game state queries
//!
//! Status is always computed for the side to move.

use crate::game_state::GameState;
use crate::legality::has_any_legal_move;
use crate::move_gen::attack::is_in_check;
use crate::types::{Color, GameStatus};

/// Status of the side to move
///
/// | in check | has a legal move | status    |
/// |----------|------------------|-----------|
/// | no       | yes              | Ongoing   |
/// | yes      | yes              | Check     |
/// | yes      | no               | Checkmate |
/// | no       | no               | Stalemate |
pub fn game_status(state: &GameState) -> GameStatus {
    let color = state.side_to_move;
    let in_check = is_in_check(&state.board, color);
    let has_legal_moves = has_any_legal_move(state, color);

    match (in_check, has_legal_moves) {
        (false, true) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}

/// Winning color; only a checkmate has one
pub fn winner(state: &GameState, status: GameStatus) -> Option<Color> {
    (status == GameStatus::Checkmate).then(|| state.side_to_move.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{PieceKind, Square};

    fn position(pieces: &[(PieceKind, Color, &str)], side: Color) -> GameState {
        let mut board = Board::empty();
        for &(kind, color, at) in pieces {
            board.place(kind, color, Square::from_algebraic(at).unwrap()).unwrap();
        }
        GameState::from_board(board, side).unwrap()
    }

    #[test]
    fn test_start_is_ongoing() {
        let state = GameState::new();
        assert_eq!(game_status(&state), GameStatus::Ongoing);
        assert_eq!(winner(&state, GameStatus::Ongoing), None);
    }

    #[test]
    fn test_same_box_is_stalemate_or_checkmate_depending_on_check() {
        use PieceKind::*;
        // Black king on h8 with no squares: g7/g8/h7 all covered
        let stalemate = position(
            &[
                (King, Color::Black, "h8"),
                (Queen, Color::White, "g6"),
                (King, Color::White, "a1"),
            ],
            Color::Black,
        );
        assert_eq!(game_status(&stalemate), GameStatus::Stalemate);
        assert_eq!(winner(&stalemate, GameStatus::Stalemate), None);

        // Same box, plus a rook checking along the h-file
        let mate = position(
            &[
                (King, Color::Black, "h8"),
                (Queen, Color::White, "g6"),
                (Rook, Color::White, "h1"),
                (King, Color::White, "a1"),
            ],
            Color::Black,
        );
        assert_eq!(game_status(&mate), GameStatus::Checkmate);
        assert_eq!(winner(&mate, GameStatus::Checkmate), Some(Color::White));
    }

    #[test]
    fn test_check_with_escape() {
        use PieceKind::*;
        let state = position(
            &[
                (King, Color::White, "e1"),
                (Rook, Color::Black, "e8"),
                (King, Color::Black, "a8"),
            ],
            Color::White,
        );
        assert_eq!(game_status(&state), GameStatus::Check);
    }
}
