//! Public API for the chess engine
//!
//! The [`Game`] type is the single owner of the authoritative [`crate::game_state::GameState`]. Everything a
//! front-end needs goes through it: piece lookups, highlight sets, move execution, status and change notifications.
//!
//! ## Module Organization
//!
//! - `game` - [`Game`] lifecycle, configuration and the promotion sub-state
//! - `moves` - Move validation and the all-or-nothing commit
//! - `state` - Status queries (check, checkmate, stalemate, winner)
//! - `events` - Notifications delivered over channels

mod events;
mod game;
mod moves;
mod state;

pub use events::GameEvent;
pub use game::{Game, GameConfig, MoveOutcome, PendingPromotion, PromotionMode};
pub use moves::validate_move;
pub use state::{game_status, winner};
