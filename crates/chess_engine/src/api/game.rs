//! Game lifecycle and turn state machine
//!
//! ```text
//!            execute_move (legal)               execute_move (legal, mate/stalemate)
//!   Ongoing ───────────────────────▶ Ongoing/Check ───────────────────────────────▶ Checkmate | Stalemate
//!      │                                    ▲
//!      │ pawn to last rank, no kind,        │ choose_promotion(kind)
//!      │ PromotionMode::Deferred            │
//!      └────────────▶ awaiting promotion ───┘
//! ```
//!
//! Terminal states accept no further moves. While a promotion is pending the board is untouched and the turn has not
//! flipped; only `choose_promotion` (or `reset`) leaves that sub-state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crossbeam_channel::Receiver;
use tracing::{debug, info};

use super::events::{EventBus, GameEvent};
use super::moves::{commit_move, validate_move};
use super::state::{game_status, winner};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::game_state::{GameState, RuleSet};
use crate::legality::legal_moves;
use crate::move_gen::is_promotion;
use crate::types::*;

/// How a promotion kind is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionMode {
    /// Taken from the move itself; a missing kind means Queen
    #[default]
    Inline,
    /// A move without a kind waits for [`Game::choose_promotion`]
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub promotion: PromotionMode,
    pub rules: RuleSet,
}

/// Pawn move parked until its promotion kind is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

/// Result of a successful `execute_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Completed { record: MoveRecord, status: GameStatus },
    AwaitingPromotion(PendingPromotion),
}

/// A game in progress
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = Game::default();
/// let events = game.subscribe();
/// game.execute_move(sq("e2"), sq("e4"), None)?;
/// assert_eq!(game.side_to_move(), Color::Black);
/// ```
#[derive(Debug)]
pub struct Game {
    state: GameState,
    config: GameConfig,
    status: GameStatus,
    pending: Option<PendingPromotion>,
    events: EventBus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// New game from the standard initial position
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::with_rules(config.rules),
            config,
            status: GameStatus::Ongoing,
            pending: None,
            events: EventBus::default(),
        }
    }

    /// Continue from an existing state; the config's rule set replaces the state's
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        let state = state.rules(config.rules);
        let status = game_status(&state);
        Self {
            state,
            config,
            status,
            pending: None,
            events: EventBus::default(),
        }
    }

    /// Back to the initial position; subscribers stay attached
    pub fn reset(&mut self) {
        info!("[GAME] Reset to the initial position");
        self.state = GameState::with_rules(self.config.rules);
        self.status = GameStatus::Ongoing;
        self.pending = None;
        self.events.emit(GameEvent::TurnChanged {
            side_to_move: self.state.side_to_move,
        });
    }

    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner, only after checkmate
    pub fn winner(&self) -> Option<Color> {
        winner(&self.state, self.status)
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.state.history
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.board.piece_at(square)
    }

    /// Bounds-checked lookup; out-of-range coordinates give `None`
    #[inline]
    pub fn piece_at_coords(&self, file: i32, rank: i32) -> Option<Piece> {
        self.state.board.piece_at_coords(file, rank)
    }

    /// Legal destinations for the piece on `square`, for highlighting
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves(&self.state, square)
    }

    /// Execute a move for the side to move
    ///
    /// # Errors
    ///
    /// Every error leaves the game unchanged:
    ///
    /// - [`ChessEngineError::GameOver`] after checkmate or stalemate
    /// - [`ChessEngineError::PromotionPending`] while a deferred promotion waits for its kind
    /// - [`ChessEngineError::InvalidPromotion`] for a King or Pawn promotion kind
    /// - the rejections of [`validate_move`]
    ///
    /// A promotion kind given for a move that does not promote is ignored.
    pub fn execute_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<MoveOutcome> {
        if self.status.is_terminal() {
            return Err(ChessEngineError::GameOver { status: self.status });
        }
        if let Some(pending) = self.pending {
            return Err(ChessEngineError::PromotionPending { square: pending.to });
        }
        if let Some(kind) = promotion.filter(|kind| !kind.is_promotion_target()) {
            return Err(ChessEngineError::InvalidPromotion { kind });
        }

        let piece = validate_move(&self.state, from, to).inspect_err(|err| {
            debug!("[GAME] Move {}{} rejected: {}", from, to, err);
        })?;

        if !is_promotion(&piece, to) {
            return self.commit(Move::new(from, to));
        }
        match (promotion, self.config.promotion) {
            (Some(kind), _) => self.commit(Move::with_promotion(from, to, kind)),
            (None, PromotionMode::Inline) => self.commit(Move::with_promotion(from, to, PieceKind::Queen)),
            (None, PromotionMode::Deferred) => {
                let pending = PendingPromotion {
                    from,
                    to,
                    color: piece.color,
                };
                info!("[GAME] {} pawn {}{} awaiting promotion choice", piece.color, from, to);
                self.pending = Some(pending);
                self.events.emit(GameEvent::PromotionRequired {
                    from,
                    to,
                    color: piece.color,
                });
                Ok(MoveOutcome::AwaitingPromotion(pending))
            }
        }
    }

    /// [`Game::execute_move`] with raw coordinates, as delivered by an input layer
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidSquare`] for coordinates outside the board, then as `execute_move`.
    pub fn execute_move_at(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<MoveOutcome> {
        let square = |(file, rank): (i32, i32)| {
            Square::new(file, rank).ok_or(ChessEngineError::InvalidSquare { file, rank })
        };
        let (from, to) = (square(from)?, square(to)?);
        self.execute_move(from, to, promotion)
    }

    /// Complete a parked promotion with `kind`
    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessEngineResult<MoveOutcome> {
        let pending = self.pending.ok_or(ChessEngineError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(ChessEngineError::InvalidPromotion { kind });
        }
        let outcome = self.commit(Move::with_promotion(pending.from, pending.to, kind))?;
        self.pending = None;
        Ok(outcome)
    }

    fn commit(&mut self, mv: Move) -> ChessEngineResult<MoveOutcome> {
        let (next, record) = commit_move(&self.state, mv)?;
        self.state = next;
        self.status = game_status(&self.state);

        info!(
            "[GAME] {} {} {}{}{} -> {:?}",
            record.color,
            record.kind.symbol(),
            record.from,
            record.to,
            record
                .promotion
                .map(|kind| format!("={}", kind.symbol()))
                .unwrap_or_default(),
            self.status
        );

        self.events.emit(GameEvent::MoveApplied(record));
        self.events.emit(GameEvent::TurnChanged {
            side_to_move: self.state.side_to_move,
        });
        if self.status.is_terminal() {
            let winner = self.winner();
            info!("[GAME] Game over: {:?}, winner {:?}", self.status, winner);
            self.events.emit(GameEvent::GameOver {
                status: self.status,
                winner,
            });
        }

        Ok(MoveOutcome::Completed {
            record,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for &(from, to) in moves {
            game.execute_move(sq(from), sq(to), None)
                .unwrap_or_else(|err| panic!("{from}{to} failed: {err}"));
        }
    }

    fn promotion_game(mode: PromotionMode) -> Game {
        let board = Board::empty()
            .with(PieceKind::Pawn, Color::White, sq("b7"))
            .and_then(|b| b.with(PieceKind::King, Color::White, sq("e1")))
            .and_then(|b| b.with(PieceKind::King, Color::Black, sq("h5")))
            .unwrap();
        let state = GameState::from_board(board, Color::White).unwrap();
        Game::from_state(
            state,
            GameConfig {
                promotion: mode,
                ..GameConfig::default()
            },
        )
    }

    // ========================================================================
    // Turn order and rejection
    // ========================================================================

    #[test]
    fn test_rejections_leave_game_untouched() {
        let mut game = Game::default();
        let before = game.state().clone();

        assert!(game.execute_move(sq("e7"), sq("e5"), None).is_err());
        assert!(game.execute_move(sq("e3"), sq("e4"), None).is_err());
        assert!(game.execute_move(sq("e2"), sq("e5"), None).is_err());
        assert_eq!(
            game.execute_move_at((4, 1), (4, 8), None),
            Err(ChessEngineError::InvalidSquare { file: 4, rank: 8 })
        );

        assert_eq!(game.state(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_execute_move_flips_turn_and_notifies() {
        let mut game = Game::default();
        let events = game.subscribe();
        let outcome = game.execute_move(sq("e2"), sq("e4"), None).unwrap();

        let MoveOutcome::Completed { record, status } = outcome else {
            panic!("expected a completed move");
        };
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(events.try_recv().ok(), Some(GameEvent::MoveApplied(record)));
        assert_eq!(
            events.try_recv().ok(),
            Some(GameEvent::TurnChanged {
                side_to_move: Color::Black
            })
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = Game::default();
        let events = game.subscribe();
        play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);

        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.winner(), Some(Color::Black));
        let last = events.try_iter().last();
        assert_eq!(
            last,
            Some(GameEvent::GameOver {
                status: GameStatus::Checkmate,
                winner: Some(Color::Black)
            })
        );
        assert_eq!(
            game.execute_move(sq("a2"), sq("a3"), None),
            Err(ChessEngineError::GameOver {
                status: GameStatus::Checkmate
            })
        );
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = Game::default();
        play(&mut game, &[("e2", "e4")]);
        game.reset();
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    // ========================================================================
    // Promotion
    // ========================================================================

    #[test]
    fn test_inline_promotion_defaults_to_queen() {
        let mut game = promotion_game(PromotionMode::Inline);
        game.execute_move(sq("b7"), sq("b8"), None).unwrap();
        let piece = game.piece_at(sq("b8")).unwrap();
        assert_eq!(piece.kind, PieceKind::Queen);
        assert_eq!(piece.move_count, 0);
    }

    #[test]
    fn test_inline_promotion_with_kind() {
        let mut game = promotion_game(PromotionMode::Inline);
        game.execute_move(sq("b7"), sq("b8"), Some(PieceKind::Knight)).unwrap();
        assert_eq!(game.piece_at(sq("b8")).map(|p| p.kind), Some(PieceKind::Knight));
    }

    #[test]
    fn test_invalid_promotion_kind_rejected() {
        let mut game = promotion_game(PromotionMode::Inline);
        assert_eq!(
            game.execute_move(sq("b7"), sq("b8"), Some(PieceKind::King)),
            Err(ChessEngineError::InvalidPromotion {
                kind: PieceKind::King
            })
        );
        assert_eq!(game.piece_at(sq("b7")).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn test_deferred_promotion_parks_move() {
        let mut game = promotion_game(PromotionMode::Deferred);
        let events = game.subscribe();

        let outcome = game.execute_move(sq("b7"), sq("b8"), None).unwrap();
        assert!(matches!(outcome, MoveOutcome::AwaitingPromotion(_)));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.piece_at(sq("b7")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(
            events.try_recv().ok(),
            Some(GameEvent::PromotionRequired {
                from: sq("b7"),
                to: sq("b8"),
                color: Color::White
            })
        );

        // Nothing else may happen until the choice is made
        assert_eq!(
            game.execute_move(sq("e1"), sq("e2"), None),
            Err(ChessEngineError::PromotionPending { square: sq("b8") })
        );
        assert_eq!(
            game.choose_promotion(PieceKind::Pawn),
            Err(ChessEngineError::InvalidPromotion {
                kind: PieceKind::Pawn
            })
        );

        game.choose_promotion(PieceKind::Rook).unwrap();
        assert_eq!(game.piece_at(sq("b8")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.pending_promotion().is_none());
        assert_eq!(game.choose_promotion(PieceKind::Queen), Err(ChessEngineError::NoPendingPromotion));
    }
}
