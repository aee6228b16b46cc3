//! Alpha-beta search with negamax
//!
//! Fail-soft: a node whose true value lies inside `(alpha, beta)` returns it exactly; outside the window the return
//! value is a bound on the same side. The root only ever asks "is this better than the best so far", so pruning
//! never changes which move is chosen or its score.

use super::{candidate_moves, make_checked, no_move_score, SearchStats};
use crate::constants::SCORE_INFINITY;
use crate::evaluation::evaluate;
use crate::game_state::GameState;
use crate::make_unmake::unmake_move;

/// Score of `state` for its side to move, `depth` plies deep, within `(alpha, beta)`
pub(crate) fn alphabeta(
    state: &mut GameState,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> i32 {
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
        let score = -alphabeta(state, depth - 1, -beta, -alpha, stats);
        unmake_move(state, &undo);

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}
