//! User settings
//!
//! Everything a session needs to start: who the computer plays, how strong it is, and which rule variants apply.
//! Missing fields in a settings file take their defaults, so older files keep loading.

use chess_engine::{CastlingRule, Color, GameConfig, PromotionMode, RuleSet};
use serde::{Deserialize, Serialize};

use crate::game::ai::resource::{effective_depth, Difficulty, GameMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color the computer plays; `None` is hot-seat
    pub ai_color: Option<Color>,
    pub difficulty: Difficulty,
    /// Overrides the difficulty's depth
    pub depth: Option<u32>,
    pub promotion: PromotionMode,
    pub castling: CastlingRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_color: Some(Color::Black),
            difficulty: Difficulty::default(),
            depth: None,
            promotion: PromotionMode::default(),
            castling: CastlingRule::default(),
        }
    }
}

impl Settings {
    pub fn search_depth(&self) -> u32 {
        effective_depth(self.difficulty, self.depth)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            promotion: self.promotion,
            rules: RuleSet::new(self.castling),
        }
    }

    pub fn mode(&self) -> GameMode {
        GameMode::from_ai_color(self.ai_color)
    }
}
