//! Error types for chess engine
//!
//! Every rejection a caller can trigger (bad coordinates, empty squares, wrong side, illegal moves, a finished game)
//! is a plain `Err` and leaves the game untouched. `InvariantViolation` is the one exception: it means the engine's
//! own bookkeeping broke (for example a color without a king) and is not something a caller can recover from.

use thiserror::Error;

use crate::types::{Color, GameStatus, PieceKind, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Coordinates outside the 8x8 grid
    #[error("Invalid square ({file}, {rank}): coordinates must be 0-7")]
    InvalidSquare { file: i32, rank: i32 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece belongs to the side that is not on move
    #[error("Piece at {square} is {color} but it is {side_to_move}'s turn")]
    NotYourTurn {
        square: Square,
        color: Color,
        side_to_move: Color,
    },

    /// Destination is not among the piece's legal moves
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Checkmate or stalemate already reached
    #[error("Game is over ({status:?})")]
    GameOver { status: GameStatus },

    /// A promotion choice is outstanding
    #[error("Waiting for a promotion choice for the pawn moving to {square}")]
    PromotionPending { square: Square },

    /// `choose_promotion` without a parked promotion move
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Pawns may only become knights, bishops, rooks or queens
    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// Board setup placed two pieces on one square
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },

    /// Board setup that cannot start a game
    #[error("Invalid setup: {message}")]
    InvalidSetup { message: String },

    /// Internal consistency fault; never expected in correct play
    #[error("Engine invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl ChessEngineError {
    /// Internal faults, as opposed to rejected input
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChessEngineError::InvariantViolation { .. })
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
