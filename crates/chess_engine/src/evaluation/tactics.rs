//! Tactical terms
//!
//! - **Threats**: own pseudo-moves that land on an enemy piece
//! - **Hanging pieces**: own non-king pieces the opponent attacks and nobody defends, charged half their value
//! - **Last-move penalties**: the move that produced the position is checked for two habits of a shallow search,
//!   capturing onto a square the opponent still attacks, and moving a piece straight back where it came from. Both
//!   are charged to the side that made the move.

use crate::board::Board;
use crate::constants::{piece_value, BAD_CAPTURE_PENALTY, HANGING_DIVISOR, OSCILLATION_PENALTY, THREAT_WEIGHT};
use crate::game_state::GameState;
use crate::move_gen::attack::is_square_attacked;
use crate::move_gen::pseudo_moves;
use crate::types::*;

pub fn threats(state: &GameState, perspective: Color) -> i32 {
    let count = |color: Color| {
        state
            .board
            .pieces_of(color)
            .map(|piece| {
                pseudo_moves(&state.board, &piece, state.last_move())
                    .into_iter()
                    .filter(|to| state.board.is_enemy(*to, color))
                    .count() as i32
            })
            .sum::<i32>()
    };
    (count(perspective) - count(perspective.opposite())) * THREAT_WEIGHT
}

pub fn hanging_pieces(board: &Board, perspective: Color) -> i32 {
    let exposure = |color: Color| {
        board
            .pieces_of(color)
            .filter(|piece| piece.kind != PieceKind::King)
            .filter(|piece| {
                is_square_attacked(board, piece.square, color.opposite())
                    && !is_square_attacked(board, piece.square, color)
            })
            .map(|piece| piece_value(piece.kind) / HANGING_DIVISOR)
            .sum::<i32>()
    };
    exposure(perspective.opposite()) - exposure(perspective)
}

pub fn last_move_penalties(state: &GameState, perspective: Color) -> i32 {
    let Some(last) = state.last_move() else {
        return 0;
    };
    let mut penalty = 0;

    if last.captured.is_some() && is_square_attacked(&state.board, last.to, last.color.opposite()) {
        penalty += BAD_CAPTURE_PENALTY;
    }

    // The same side's previous move is two plies back
    let history = &state.history;
    if history.len() >= 3 && last.reverses(&history[history.len() - 3]) {
        penalty += OSCILLATION_PENALTY;
    }

    if last.color == perspective {
        -penalty
    } else {
        penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Game;
    use crate::constants::KNIGHT_VALUE;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(moves: &[(&str, &str)]) -> GameState {
        let mut game = Game::default();
        for &(from, to) in moves {
            game.execute_move(sq(from), sq(to), None).unwrap();
        }
        game.state().clone()
    }

    #[test]
    fn test_hanging_knight() {
        let board = Board::empty()
            .with(PieceKind::King, Color::White, sq("a1"))
            .and_then(|b| b.with(PieceKind::King, Color::Black, sq("h8")))
            .and_then(|b| b.with(PieceKind::Knight, Color::White, sq("d4")))
            .and_then(|b| b.with(PieceKind::Rook, Color::Black, sq("d8")))
            .unwrap();
        assert_eq!(hanging_pieces(&board, Color::White), -KNIGHT_VALUE / HANGING_DIVISOR);

        // A defending pawn takes it off the hook
        let defended = board.with(PieceKind::Pawn, Color::White, sq("c3")).unwrap();
        assert_eq!(hanging_pieces(&defended, Color::White), 0);
    }

    #[test]
    fn test_threat_count() {
        let board = Board::empty()
            .with(PieceKind::King, Color::White, sq("a1"))
            .and_then(|b| b.with(PieceKind::King, Color::Black, sq("h8")))
            .and_then(|b| b.with(PieceKind::Pawn, Color::White, sq("d4")))
            .and_then(|b| b.with(PieceKind::Knight, Color::Black, sq("e5")))
            .unwrap();
        let state = GameState::from_board(board, Color::White).unwrap();
        // Only d4xe5 lands on an enemy; the knight reaches no white piece
        assert_eq!(threats(&state, Color::White), THREAT_WEIGHT);
    }

    #[test]
    fn test_oscillation_charged_to_mover() {
        let state = play(&[("g1", "f3"), ("g8", "f6"), ("f3", "g1")]);
        assert_eq!(last_move_penalties(&state, Color::White), -OSCILLATION_PENALTY);
        assert_eq!(last_move_penalties(&state, Color::Black), OSCILLATION_PENALTY);
    }

    #[test]
    fn test_bad_capture() {
        // 1.e4 d5 2.exd5 Qxd5: the queen lands where nothing white attacks
        let safe = play(&[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")]);
        assert_eq!(last_move_penalties(&safe, Color::Black), 0);

        // 1.e4 d5 2.exd5: the pawn on d5 is attacked by the d8 queen
        let recapturable = play(&[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
        assert_eq!(last_move_penalties(&recapturable, Color::White), -BAD_CAPTURE_PENALTY);
    }

    #[test]
    fn test_no_history_no_penalty() {
        assert_eq!(last_move_penalties(&GameState::new(), Color::White), 0);
    }
}
