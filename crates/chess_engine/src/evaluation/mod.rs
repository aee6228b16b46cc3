//! Static position evaluation
//!
//! Scores a position from one side's point of view; higher is better for that side. Every term is a differential
//! (own minus opponent), so `evaluate(state, White) == -evaluate(state, Black)` and the search can negate scores
//! freely.
//!
//! ## Module Organization
//!
//! - `material` - Piece values
//! - `position` - Mobility, center control and development
//! - `king_safety` - Attacks on and cover around each king
//! - `tactics` - Threats, hanging pieces, and penalties on the move just played

mod king_safety;
mod material;
mod position;
mod tactics;

pub use king_safety::king_safety;
pub use material::material_balance;
pub use position::{center_control, development, mobility};
pub use tactics::{hanging_pieces, last_move_penalties, threats};

use crate::game_state::GameState;
use crate::types::Color;

/// Per-term breakdown of an evaluation, each already weighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub material: i32,
    pub mobility: i32,
    pub center: i32,
    pub development: i32,
    pub king_safety: i32,
    pub threats: i32,
    pub hanging: i32,
    /// Bad-capture and oscillation penalties for the move that produced the position
    pub last_move: i32,
}

impl Evaluation {
    pub fn total(&self) -> i32 {
        self.material
            + self.mobility
            + self.center
            + self.development
            + self.king_safety
            + self.threats
            + self.hanging
            + self.last_move
    }
}

/// Full breakdown for `perspective`
pub fn evaluate_breakdown(state: &GameState, perspective: Color) -> Evaluation {
    let board = &state.board;
    Evaluation {
        material: material_balance(board, perspective),
        mobility: mobility(state, perspective),
        center: center_control(board, perspective),
        development: development(board, perspective),
        king_safety: king_safety(board, perspective),
        threats: threats(state, perspective),
        hanging: hanging_pieces(board, perspective),
        last_move: last_move_penalties(state, perspective),
    }
}

/// Evaluation score for `perspective`
#[inline]
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    evaluate_breakdown(state, perspective).total()
}
