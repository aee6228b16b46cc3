//! Opponent strength and seating
//!
//! # Difficulty Levels
//!
//! Strength is a fixed search depth; there is no clock, so depth is the only lever on response time.
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 2     |
//! | Medium     | 3     |
//! | Hard       | 4     |
//!
//! An explicit depth from settings or the command line overrides the table, clamped to
//! `MIN_AI_DEPTH..=MAX_AI_DEPTH`.

use chess_engine::Color;
use serde::{Deserialize, Serialize};

pub const MIN_AI_DEPTH: u32 = 1;
pub const MAX_AI_DEPTH: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Who sits at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans take turns at one terminal
    HotSeat,
    /// The computer plays `ai_color`
    VsAi { ai_color: Color },
    /// The computer plays both sides
    SelfPlay,
}

impl GameMode {
    pub fn from_ai_color(ai_color: Option<Color>) -> Self {
        match ai_color {
            Some(ai_color) => GameMode::VsAi { ai_color },
            None => GameMode::HotSeat,
        }
    }

    /// Colors the computer plays
    pub fn ai_colors(self) -> Vec<Color> {
        match self {
            GameMode::HotSeat => Vec::new(),
            GameMode::VsAi { ai_color } => vec![ai_color],
            GameMode::SelfPlay => vec![Color::White, Color::Black],
        }
    }
}

/// Resolve the depth to search: explicit override first, then the difficulty table
pub fn effective_depth(difficulty: Difficulty, depth: Option<u32>) -> u32 {
    depth
        .unwrap_or_else(|| difficulty.search_depth())
        .clamp(MIN_AI_DEPTH, MAX_AI_DEPTH)
}
