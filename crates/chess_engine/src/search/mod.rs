//! Move search
//!
//! Depth-limited negamax over legal moves with a static evaluation at the horizon. Every score is from the point of
//! view of the side to move at that node.
//!
//! The search never touches the caller's state: it clones it once and then recurses with strict
//! [`make_move`]/[`unmake_move`] pairs, so no half-applied move is visible outside its own frame.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Pruned search, what [`best_move`] uses
//! - `minimax` - The same tree without pruning, [`minimax_best_move`]
//! - `ordering` - Capture-first move ordering and promotion expansion

mod alphabeta;
mod minimax;
mod ordering;

use tracing::{debug, error};

use crate::constants::{DRAW_SCORE, MATE_SCORE, MIN_SEARCH_DEPTH, SCORE_INFINITY};
use crate::game_state::GameState;
use crate::legality::legal_moves_for;
use crate::make_unmake::{make_move, unmake_move};
use crate::move_gen::attack::is_in_check;
use crate::types::{Color, Move};

/// Chosen move and what the search thought of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    /// Score from the searching side's point of view
    pub score: i32,
    /// Positions visited
    pub nodes: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Best move for `color` searched `depth` plies deep, with alpha-beta pruning
///
/// `color` is treated as the side to move. A depth of 0 is searched as 1 so a move is always chosen when one exists;
/// `None` means `color` has no legal move (checkmate or stalemate).
///
/// # Examples
///
/// ```rust,ignore
/// let result = best_move(&GameState::new(), Color::White, 3).unwrap();
/// game.execute_move(result.mv.from, result.mv.to, result.mv.promotion)?;
/// ```
pub fn best_move(state: &GameState, color: Color, depth: u32) -> Option<SearchResult> {
    search_root(state, color, depth, "alpha-beta", |state, depth, alpha, stats| {
        -alphabeta::alphabeta(state, depth, -SCORE_INFINITY, -alpha, stats)
    })
}

/// [`best_move`] without pruning; visits the full tree
pub fn minimax_best_move(state: &GameState, color: Color, depth: u32) -> Option<SearchResult> {
    search_root(state, color, depth, "minimax", |state, depth, _alpha, stats| {
        -minimax::minimax(state, depth, stats)
    })
}

/// Root loop shared by both searches
///
/// `child` scores the position after a root move for the side that made it, given the remaining depth and the
/// best score found so far. A later move replaces the current best only when strictly better.
fn search_root(
    state: &GameState,
    color: Color,
    depth: u32,
    name: &str,
    mut child: impl FnMut(&mut GameState, u32, i32, &mut SearchStats) -> i32,
) -> Option<SearchResult> {
    let depth = depth.max(MIN_SEARCH_DEPTH);
    let mut scratch = state.clone();
    scratch.side_to_move = color;

    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let mut best: Option<(Move, i32)> = None;

    for mv in candidate_moves(&scratch) {
        let Some(undo) = make_checked(&mut scratch, mv) else {
            continue;
        };
        let alpha = best.map_or(-SCORE_INFINITY, |(_, score)| score);
        let score = child(&mut scratch, depth - 1, alpha, &mut stats);
        unmake_move(&mut scratch, &undo);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    debug!(
        "[AI] {} {} depth {}: {} nodes, {} cutoffs, best {:?}",
        name, color, depth, stats.nodes, stats.cutoffs, best
    );
    best.map(|(mv, score)| SearchResult {
        mv,
        score,
        nodes: stats.nodes,
    })
}

/// Legal moves for the side to move, promotions expanded, best captures first
pub(crate) fn candidate_moves(state: &GameState) -> Vec<Move> {
    let moves = legal_moves_for(state, state.side_to_move);
    let mut moves = ordering::expand_promotions(&state.board, moves);
    ordering::order_moves(&state.board, &mut moves);
    moves
}

/// Score for a side to move with no legal moves, `depth` plies before the horizon
pub(crate) fn no_move_score(state: &GameState, depth: u32) -> i32 {
    if is_in_check(&state.board, state.side_to_move) {
        -(MATE_SCORE + depth as i32)
    } else {
        DRAW_SCORE
    }
}

/// [`make_move`] for a move taken from [`candidate_moves`]; a failure there is an engine fault
pub(crate) fn make_checked(
    state: &mut GameState,
    mv: Move,
) -> Option<crate::make_unmake::BoardUndo> {
    match make_move(state, mv) {
        Ok(undo) => Some(undo),
        Err(err) => {
            error!("[AI] Generated move {} could not be made: {}", mv, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn position(pieces: &[(PieceKind, Color, &str)], side: Color) -> GameState {
        let mut board = Board::empty();
        for &(kind, color, at) in pieces {
            board.place(kind, color, sq(at)).unwrap();
        }
        GameState::from_board(board, side).unwrap()
    }

    #[test]
    fn test_finds_mate_in_one() {
        use PieceKind::*;
        // Back-rank mate: Ra1-a8
        let state = position(
            &[
                (King, Color::White, "g1"),
                (Rook, Color::White, "a1"),
                (King, Color::Black, "g8"),
                (Pawn, Color::Black, "f7"),
                (Pawn, Color::Black, "g7"),
                (Pawn, Color::Black, "h7"),
            ],
            Color::White,
        );
        let result = best_move(&state, Color::White, 2).unwrap();
        assert_eq!(result.mv, Move::new(sq("a1"), sq("a8")));
        assert!(result.score >= MATE_SCORE);
    }

    #[test]
    fn test_takes_free_queen() {
        use PieceKind::*;
        let state = position(
            &[
                (King, Color::White, "a1"),
                (Rook, Color::White, "d1"),
                (Queen, Color::Black, "d6"),
                (King, Color::Black, "h8"),
            ],
            Color::White,
        );
        let result = best_move(&state, Color::White, 1).unwrap();
        assert_eq!(result.mv, Move::new(sq("d1"), sq("d6")));
    }

    #[test]
    fn test_no_move_returns_none() {
        use PieceKind::*;
        let stalemate = position(
            &[
                (King, Color::Black, "h8"),
                (Queen, Color::White, "g6"),
                (King, Color::White, "a1"),
            ],
            Color::Black,
        );
        assert!(best_move(&stalemate, Color::Black, 3).is_none());
        assert!(minimax_best_move(&stalemate, Color::Black, 3).is_none());
    }

    #[test]
    fn test_depth_zero_still_moves() {
        let result = best_move(&GameState::new(), Color::White, 0);
        assert!(result.is_some());
    }

    #[test]
    fn test_searching_color_overrides_side_to_move() {
        let state = GameState::new();
        let result = best_move(&state, Color::Black, 1).unwrap();
        let piece = state.board.piece_at(result.mv.from).unwrap();
        assert_eq!(piece.color, Color::Black);
        // The caller's state is untouched
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_alphabeta_matches_minimax_from_start() {
        let state = GameState::new();
        for depth in 1..=2 {
            let pruned = best_move(&state, Color::White, depth).unwrap();
            let full = minimax_best_move(&state, Color::White, depth).unwrap();
            assert_eq!((pruned.mv, pruned.score), (full.mv, full.score), "depth {depth}");
            assert!(pruned.nodes <= full.nodes);
        }
    }

    #[test]
    fn test_prefers_promotion_to_queen() {
        use PieceKind::*;
        let state = position(
            &[
                (King, Color::White, "a1"),
                (Pawn, Color::White, "e7"),
                (King, Color::Black, "a8"),
            ],
            Color::White,
        );
        let result = best_move(&state, Color::White, 1).unwrap();
        assert_eq!(result.mv, Move::with_promotion(sq("e7"), sq("e8"), Queen));
    }
}
