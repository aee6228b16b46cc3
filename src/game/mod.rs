//! Game module - sessions around the rules engine
//!
//! - [`session`] - one game plus whoever is seated at it
//! - [`ai`] - threaded computer opponents
//! - [`notation`] - parsing typed moves
//! - [`display`] - text board

pub mod ai;
pub mod display;
pub mod notation;
pub mod session;

pub use session::GameSession;
