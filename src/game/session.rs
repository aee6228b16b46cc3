//! Game session
//!
//! A [`GameSession`] owns the authoritative [`Game`], subscribes to its notifications and seats zero, one or two
//! [`AiOpponent`]s. Human moves go through [`GameSession::play_human`]. Whenever a `TurnChanged` notification names a
//! side the computer plays, the session sends that opponent the position; [`GameSession::await_ai_move`] later
//! commits the reply with the same `execute_move` the human path uses.
//!
//! At most one search is in flight at a time, and a reply is only committed if the game is still at the ply it
//! was computed for.

use chess_engine::{
    ChessEngineError, Color, Game, GameConfig, GameEvent, GameStatus, MoveOutcome, MoveRecord, PieceKind, Square,
};
use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::core::{CoreError, CoreResult, Settings};
use crate::game::ai::{AiMove, AiOpponent};

pub struct GameSession {
    game: Game,
    events: Receiver<GameEvent>,
    opponents: Vec<AiOpponent>,
    /// Side whose search has been requested and not yet collected
    thinking: Option<Color>,
}

impl GameSession {
    /// Session with no computer players
    pub fn new(config: GameConfig) -> Self {
        let mut game = Game::new(config);
        let events = game.subscribe();
        Self {
            game,
            events,
            opponents: Vec::new(),
            thinking: None,
        }
    }

    /// Session seated from saved settings
    pub fn from_settings(settings: &Settings) -> CoreResult<Self> {
        let depth = settings.search_depth();
        settings
            .mode()
            .ai_colors()
            .into_iter()
            .try_fold(Self::new(settings.game_config()), |session, color| {
                session.with_opponent(color, depth)
            })
    }

    /// Computer plays both sides
    pub fn self_play(config: GameConfig, depth: u32) -> CoreResult<Self> {
        Self::new(config)
            .with_opponent(Color::White, depth)?
            .with_opponent(Color::Black, depth)
    }

    /// Seat a computer player for `color`, replacing any already there
    pub fn with_opponent(mut self, color: Color, depth: u32) -> CoreResult<Self> {
        self.opponents.retain(|opponent| opponent.color() != color);
        self.opponents.push(AiOpponent::spawn(color, depth)?);
        Ok(self)
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Colors the computer plays
    pub fn ai_colors(&self) -> Vec<Color> {
        self.opponents.iter().map(AiOpponent::color).collect()
    }

    /// The side to move belongs to the computer and the game is still running
    pub fn is_ai_turn(&self) -> bool {
        !self.game.status().is_terminal() && self.opponent(self.game.side_to_move()).is_some()
    }

    /// Search requested and not yet collected
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_some()
    }

    /// Kick off the computer if it moves first
    pub fn start(&mut self) -> CoreResult<()> {
        self.dispatch_events()?;
        self.request_if_ai_turn()
    }

    /// Play a move for the human side to move
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotHumanTurn`] when the computer plays the side to move
    /// - [`CoreError::Engine`] for anything the engine rejects; the game is unchanged
    pub fn play_human(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> CoreResult<MoveOutcome> {
        if self.is_ai_turn() {
            return Err(CoreError::NotHumanTurn {
                color: self.game.side_to_move(),
            });
        }
        let outcome = self.game.execute_move(from, to, promotion)?;
        self.dispatch_events()?;
        Ok(outcome)
    }

    /// Finish a deferred promotion
    pub fn choose_promotion(&mut self, kind: PieceKind) -> CoreResult<MoveOutcome> {
        let outcome = self.game.choose_promotion(kind)?;
        self.dispatch_events()?;
        Ok(outcome)
    }

    /// Block until the computer's reply is in and commit it
    ///
    /// Returns `Ok(None)` when nothing was requested or the searching side had no legal move.
    pub fn await_ai_move(&mut self) -> CoreResult<Option<MoveRecord>> {
        let reply = loop {
            let Some(color) = self.thinking.take() else {
                return Ok(None);
            };
            let reply = self.wait_reply(color)?;
            if reply.ply == self.game.state().ply() && reply.color == self.game.side_to_move() {
                break reply;
            }
            warn!(
                "[AI] Discarding stale {} reply for ply {} (game at ply {})",
                color,
                reply.ply,
                self.game.state().ply()
            );
            self.request_if_ai_turn()?;
        };
        let color = reply.color;

        let Some(found) = reply.result else {
            info!("[AI] {} has nothing to play; game status {:?}", color, self.game.status());
            return Ok(None);
        };

        let outcome = self.game.execute_move(found.mv.from, found.mv.to, found.mv.promotion)?;
        self.dispatch_events()?;
        match outcome {
            MoveOutcome::Completed { record, .. } => Ok(Some(record)),
            MoveOutcome::AwaitingPromotion(pending) => Err(CoreError::Engine(ChessEngineError::InvariantViolation {
                message: format!("search move {}{} left a promotion pending", pending.from, pending.to),
            })),
        }
    }

    /// Let the computer play until the game ends, nobody is seated for the side to move, or `max_plies` is reached
    pub fn run_self_play(&mut self, max_plies: usize) -> CoreResult<GameStatus> {
        self.start()?;
        while !self.game.status().is_terminal() && self.game.state().ply() < max_plies {
            if self.await_ai_move()?.is_none() {
                break;
            }
        }
        info!(
            "[GAME] Self-play stopped after {} plies: {:?}",
            self.game.state().ply(),
            self.game.status()
        );
        Ok(self.game.status())
    }

    /// Start over from the initial position, keeping the seating
    pub fn reset(&mut self) -> CoreResult<()> {
        if let Some(color) = self.thinking.take() {
            debug!("[AI] Dropping in-flight {} search", color);
            self.wait_reply(color)?;
        }
        self.game.reset();
        self.dispatch_events()
    }

    fn opponent(&self, color: Color) -> Option<&AiOpponent> {
        self.opponents.iter().find(|opponent| opponent.color() == color)
    }

    fn wait_reply(&self, color: Color) -> CoreResult<AiMove> {
        self.opponent(color)
            .ok_or(CoreError::OpponentDisconnected { color })?
            .wait_reply()
    }

    fn request_if_ai_turn(&mut self) -> CoreResult<()> {
        if self.thinking.is_some() || !self.is_ai_turn() {
            return Ok(());
        }
        let color = self.game.side_to_move();
        if let Some(opponent) = self.opponent(color) {
            debug!("[AI] Requesting a {} move at ply {}", color, self.game.state().ply());
            opponent.request_move(self.game.state())?;
            self.thinking = Some(color);
        }
        Ok(())
    }

    fn dispatch_events(&mut self) -> CoreResult<()> {
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::TurnChanged { side_to_move } => {
                    debug!("[GAME] {} to move", side_to_move);
                    self.request_if_ai_turn()?;
                }
                GameEvent::PromotionRequired { to, color, .. } => {
                    info!("[GAME] {} must choose a promotion piece for {}", color, to);
                }
                GameEvent::GameOver { status, winner } => match winner {
                    Some(winner) => info!("[GAME] {:?}: {} wins", status, winner),
                    None => info!("[GAME] {:?}: draw", status),
                },
                GameEvent::MoveApplied(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::legal_moves_for;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_hot_seat_alternates() {
        let mut session = GameSession::new(GameConfig::default());
        session.start().unwrap();
        assert!(!session.is_ai_turn());
        session.play_human(sq("e2"), sq("e4"), None).unwrap();
        session.play_human(sq("e7"), sq("e5"), None).unwrap();
        assert_eq!(session.game().state().ply(), 2);
        assert!(!session.is_thinking());
    }

    #[test]
    fn test_ai_answers_human_move() {
        let mut session = GameSession::new(GameConfig::default())
            .with_opponent(Color::Black, 1)
            .unwrap();
        session.start().unwrap();
        assert!(!session.is_thinking(), "White moves first");

        session.play_human(sq("d2"), sq("d4"), None).unwrap();
        assert!(session.is_thinking());

        let record = session.await_ai_move().unwrap().unwrap();
        assert_eq!(record.color, Color::Black);
        assert_eq!(session.game().side_to_move(), Color::White);
        assert!(!session.is_thinking());
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mut session = GameSession::new(GameConfig::default())
            .with_opponent(Color::White, 1)
            .unwrap();
        session.start().unwrap();
        let err = session.play_human(sq("e2"), sq("e4"), None).unwrap_err();
        assert!(matches!(err, CoreError::NotHumanTurn { color: Color::White }));

        let record = session.await_ai_move().unwrap().unwrap();
        assert_eq!(record.color, Color::White);
    }

    #[test]
    fn test_rejected_move_leaves_game_alone() {
        let mut session = GameSession::new(GameConfig::default());
        let err = session.play_human(sq("e2"), sq("e5"), None).unwrap_err();
        assert!(matches!(err, CoreError::Engine(ChessEngineError::IllegalMove { .. })));
        assert_eq!(session.game().state().ply(), 0);
    }

    #[test]
    fn test_self_play_respects_ply_limit() {
        let mut session = GameSession::self_play(GameConfig::default(), 1).unwrap();
        let status = session.run_self_play(6).unwrap();
        let ply = session.game().state().ply();
        assert!(ply <= 6);
        if !status.is_terminal() {
            assert_eq!(ply, 6);
        }
        for (i, record) in session.game().history().iter().enumerate() {
            let expected = if i % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(record.color, expected, "ply {} played by the wrong side", i);
        }
    }

    #[test]
    fn test_reset_while_thinking() {
        let mut session = GameSession::new(GameConfig::default())
            .with_opponent(Color::White, 1)
            .unwrap();
        session.start().unwrap();
        assert!(session.is_thinking());

        session.reset().unwrap();
        assert!(session.is_thinking(), "reset re-requests for the side to move");
        let record = session.await_ai_move().unwrap().unwrap();
        assert!(legal_moves_for(&chess_engine::GameState::new(), Color::White)
            .iter()
            .any(|mv| mv.from == record.from && mv.to == record.to));
        assert_eq!(session.game().state().ply(), 1);
    }

    #[test]
    fn test_from_settings_seats_ai() {
        let settings = Settings {
            ai_color: Some(Color::White),
            depth: Some(1),
            ..Settings::default()
        };
        let session = GameSession::from_settings(&settings).unwrap();
        assert_eq!(session.ai_colors(), vec![Color::White]);

        let hot_seat = GameSession::from_settings(&Settings {
            ai_color: None,
            ..Settings::default()
        })
        .unwrap();
        assert!(hot_seat.ai_colors().is_empty());
    }

    #[test]
    fn test_await_without_request() {
        let mut session = GameSession::new(GameConfig::default());
        assert_eq!(session.await_ai_move().unwrap(), None);
    }
}
