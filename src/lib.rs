//! Terminal chess built on `chess_engine`
//!
//! - [`core`] - errors, logging and persisted settings
//! - [`game`] - sessions, computer opponents and text input/output

pub mod core;
pub mod game;

pub use core::{CoreError, CoreResult, Settings};
pub use game::session::GameSession;
