//! Chess AI opponent
//!
//! The engine search runs on a worker thread so the interactive loop never blocks on it.
//!
//! # Architecture
//!
//! - [`resource`] - difficulty levels and who the computer plays
//! - [`opponent`] - the worker thread and its request/reply channels
//!
//! The session listens for the engine's turn-changed notification; when the new side to move belongs to an
//! opponent it sends that opponent a copy of the position, then commits the reply through the normal
//! `execute_move` path so computer moves follow the same validation as human ones.

pub mod opponent;
pub mod resource;

pub use opponent::{AiMove, AiOpponent};
pub use resource::{effective_depth, Difficulty, GameMode, MAX_AI_DEPTH, MIN_AI_DEPTH};
