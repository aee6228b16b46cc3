//! Position plus everything needed to continue from it
//!
//! [`GameState`] is the value the whole engine passes around: board, side to move, the executed move list and the
//! rule variant in force. The authoritative instance belongs to [`crate::api::Game`]; everything else (legality
//! checks, the search) works on clones or on strict make/unmake pairs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Color, MoveRecord, PieceKind};

/// How strictly castling is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingRule {
    /// King may not castle out of, through, or into check
    #[default]
    Standard,
    /// Only occupancy and move counts are checked; the destination must still be safe like any other move
    OccupancyOnly,
}

/// Rule variations a game can be played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleSet {
    pub castling: CastlingRule,
}

impl RuleSet {
    pub const fn new(castling: CastlingRule) -> Self {
        Self { castling }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Executed moves, oldest first
    pub history: Vec<MoveRecord>,
    pub rules: RuleSet,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position, White to move
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            history: Vec::new(),
            rules,
        }
    }

    /// Start from an arbitrary setup
    ///
    /// Rejects boards that do not carry exactly one king per color, since check detection has nothing to look at
    /// otherwise.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessEngineResult<Self> {
        for color in [Color::White, Color::Black] {
            let kings = board.count(PieceKind::King, color);
            if kings != 1 {
                return Err(ChessEngineError::InvalidSetup {
                    message: format!("{color} has {kings} kings, expected exactly one"),
                });
            }
        }
        Ok(Self {
            board,
            side_to_move,
            history: Vec::new(),
            rules: RuleSet::default(),
        })
    }

    /// Replace the rule set (builder style)
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Most recent executed move; the only input to en-passant eligibility
    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Number of half-moves played
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }
}
