//! Plain minimax (negamax form), no pruning
//!
//! Reference for the pruned search: both must agree on move and score at every depth.

use super::{candidate_moves, make_checked, no_move_score, SearchStats};
use crate::constants::SCORE_INFINITY;
use crate::evaluation::evaluate;
use crate::game_state::GameState;
use crate::make_unmake::unmake_move;

pub(crate) fn minimax(state: &mut GameState, depth: u32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return evaluate(state, state.side_to_move);
    }

    let moves = candidate_moves(state);
    if moves.is_empty() {
        return no_move_score(state, depth);
    }

    let mut best = -SCORE_INFINITY;
    for mv in moves {
        let Some(undo) = make_checked(state, mv) else {
            continue;
        };
        best = best.max(-minimax(state, depth - 1, stats));
        unmake_move(state, &undo);
    }
    best
}
