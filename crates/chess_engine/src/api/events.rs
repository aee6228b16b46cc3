//! Game notifications
//!
//! Each subscriber gets its own unbounded `crossbeam_channel` receiver. Sends never block; a subscriber whose
//! receiver has been dropped is removed on the next emit.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::types::{Color, GameStatus, MoveRecord, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was committed to the board
    MoveApplied(MoveRecord),
    /// The side to move changed; drives automated opponents and UI refresh
    TurnChanged { side_to_move: Color },
    /// A pawn move is parked until a promotion kind is chosen
    PromotionRequired { from: Square, to: Square, color: Color },
    /// Checkmate or stalemate reached
    GameOver {
        status: GameStatus,
        winner: Option<Color>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_events() {
        let mut bus = EventBus::default();
        let a = bus.subscribe();
        let b = bus.subscribe();
        bus.emit(GameEvent::TurnChanged {
            side_to_move: Color::Black,
        });
        assert_eq!(a.try_recv().ok(), Some(GameEvent::TurnChanged { side_to_move: Color::Black }));
        assert_eq!(b.try_recv().ok(), Some(GameEvent::TurnChanged { side_to_move: Color::Black }));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut bus = EventBus::default();
        let keep = bus.subscribe();
        drop(bus.subscribe());
        bus.emit(GameEvent::TurnChanged {
            side_to_move: Color::White,
        });
        assert_eq!(bus.len(), 1);
        assert!(keep.try_recv().is_ok());
    }
}
