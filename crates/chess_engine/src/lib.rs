//! # Chess Engine - Rules Core and Alpha-Beta Opponent
//!
//! Everything here works on an 8x8 logical grid; nothing knows about screens, cameras or input devices.
//!
//! ## Layers (leaf first)
//!
//! - [`board`] / [`types`] / [`game_state`] - plain data: squares, pieces, the board, the position
//! - [`move_gen`] - pseudo-legal moves, one sub-generator per piece kind, plus attack queries
//! - [`legality`] / [`make_unmake`] - filtering out moves that leave the mover's king attacked
//! - [`api`] - the [`Game`] state machine: turn order, special moves, status, notifications
//! - [`search`] / [`evaluation`] - depth-limited negamax with alpha-beta pruning and a multi-term evaluator
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use chess_engine::{best_move, Game, Square};
//!
//! let mut game = Game::default();
//! game.execute_move(Square::from_algebraic("e2").unwrap(), Square::from_algebraic("e4").unwrap(), None)?;
//! let reply = best_move(game.state(), game.side_to_move(), 3).expect("black has moves");
//! game.execute_move(reply.mv.from, reply.mv.to, reply.mv.promotion)?;
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod game_state;
pub mod legality;
pub mod make_unmake;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{game_status, Game, GameConfig, GameEvent, MoveOutcome, PendingPromotion, PromotionMode};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use game_state::{CastlingRule, GameState, RuleSet};
pub use legality::{is_legal, legal_moves, legal_moves_for};
pub use search::{best_move, minimax_best_move, SearchResult};
pub use types::{Color, GameStatus, Move, MoveRecord, Piece, PieceKind, Square};
