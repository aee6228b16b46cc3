//! Coordinate move input
//!
//! Accepts `e2e4`, `e2 e4`, `e2-e4` and a trailing promotion letter (`e7e8q`, `e7 e8 n`). Squares are
//! case-insensitive. Anything else is a [`CoreError::Input`].

use chess_engine::{PieceKind, Square};

use crate::core::{CoreError, CoreResult};

/// A parsed move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parse one square name
pub fn parse_square(text: &str) -> CoreResult<Square> {
    Square::from_algebraic(&text.trim().to_ascii_lowercase())
        .ok_or_else(|| CoreError::input(text, "expected a square from a1 to h8"))
}

/// Parse a promotion letter; only N, B, R and Q are accepted
pub fn parse_promotion(text: &str) -> CoreResult<PieceKind> {
    let mut chars = text.trim().chars();
    match (chars.next().and_then(PieceKind::from_symbol), chars.next()) {
        (Some(kind), None) if kind.is_promotion_target() => Ok(kind),
        _ => Err(CoreError::input(text, "promotion must be one of q, r, b, n")),
    }
}

/// Parse a full move
pub fn parse_move(text: &str) -> CoreResult<MoveInput> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(CoreError::input(text, "expected a move like e2e4 or e7e8q"));
    }

    let from = parse_square(&compact[0..2]).map_err(|_| CoreError::input(text, "bad origin square"))?;
    let to = parse_square(&compact[2..4]).map_err(|_| CoreError::input(text, "bad destination square"))?;
    let promotion = match compact.get(4..) {
        Some(letter) if !letter.is_empty() => Some(parse_promotion(letter)?),
        _ => None,
    };

    Ok(MoveInput { from, to, promotion })
}
