//! Error types for core module
//!
//! Covers settings persistence, command input and the automated opponents. Rule violations keep their engine
//! error inside [`CoreError::Engine`] so callers can still match on them.

use chess_engine::{ChessEngineError, Color};
use thiserror::Error;

/// Errors that can occur outside the rules engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// File or thread I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The engine rejected an operation
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// Text that does not parse as a square or move
    #[error("Invalid input '{input}': {reason}")]
    Input { input: String, reason: String },

    /// A move was offered for a side the computer plays
    #[error("It is the computer's turn ({color})")]
    NotHumanTurn { color: Color },

    /// The opponent's worker thread went away
    #[error("{color} opponent is no longer running")]
    OpponentDisconnected { color: Color },
}

impl CoreError {
    pub(crate) fn input(input: &str, reason: impl Into<String>) -> Self {
        CoreError::Input {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
