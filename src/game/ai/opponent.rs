//! Automated opponent
//!
//! Each [`AiOpponent`] owns a worker thread. A request carries a clone of the position; the worker runs
//! [`best_move`] on it and sends an [`AiMove`] back. The authoritative game never leaves the caller's thread, and the
//! reply is committed through the same `execute_move` a human move uses.
//!
//! Dropping the opponent closes the request channel and joins the worker once it finishes its current search.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chess_engine::{best_move, Color, GameState, SearchResult};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use crate::core::{CoreError, CoreResult};

/// A finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub color: Color,
    /// History length of the searched position; replies for an older position are stale
    pub ply: usize,
    /// `None` when the side has no legal move
    pub result: Option<SearchResult>,
    pub depth: u32,
    pub thinking_time: Duration,
}

struct AiRequest {
    state: GameState,
}

pub struct AiOpponent {
    color: Color,
    depth: u32,
    requests: Option<Sender<AiRequest>>,
    replies: Receiver<AiMove>,
    worker: Option<JoinHandle<()>>,
}

impl AiOpponent {
    /// Start a worker searching for `color` at `depth`
    pub fn spawn(color: Color, depth: u32) -> CoreResult<Self> {
        let (request_tx, request_rx) = unbounded::<AiRequest>();
        let (reply_tx, reply_rx) = unbounded::<AiMove>();

        let worker = thread::Builder::new()
            .name(format!("ai-{}", color).to_lowercase())
            .spawn(move || worker_loop(color, depth, request_rx, reply_tx))?;

        info!("[AI] {} opponent started (depth {})", color, depth);
        Ok(Self {
            color,
            depth,
            requests: Some(request_tx),
            replies: reply_rx,
            worker: Some(worker),
        })
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Queue a search of `state`
    pub fn request_move(&self, state: &GameState) -> CoreResult<()> {
        let request = AiRequest {
            state: state.clone(),
        };
        self.requests
            .as_ref()
            .and_then(|requests| requests.send(request).ok())
            .ok_or(CoreError::OpponentDisconnected { color: self.color })
    }

    /// Reply if one is ready
    pub fn try_reply(&self) -> Option<AiMove> {
        self.replies.try_recv().ok()
    }

    /// Block until the worker answers
    pub fn wait_reply(&self) -> CoreResult<AiMove> {
        self.replies
            .recv()
            .map_err(|_| CoreError::OpponentDisconnected { color: self.color })
    }

    /// Block for at most `timeout`; `Ok(None)` if the search is still running
    pub fn wait_reply_timeout(&self, timeout: Duration) -> CoreResult<Option<AiMove>> {
        match self.replies.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(reply)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(CoreError::OpponentDisconnected { color: self.color }),
        }
    }
}

impl Drop for AiOpponent {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("[AI] {} worker panicked", self.color);
            }
        }
    }
}

fn worker_loop(color: Color, depth: u32, requests: Receiver<AiRequest>, replies: Sender<AiMove>) {
    for AiRequest { state } in requests.iter() {
        let start = Instant::now();
        let result = best_move(&state, color, depth);
        let thinking_time = start.elapsed();

        match result {
            Some(found) => info!(
                "[AI] {} plays {} | Score={} | Depth={} | Nodes={} | Time={:.2}s",
                color,
                found.mv,
                found.score,
                depth,
                found.nodes,
                thinking_time.as_secs_f32()
            ),
            None => info!("[AI] {} has no legal move", color),
        }

        let reply = AiMove {
            color,
            ply: state.ply(),
            result,
            depth,
            thinking_time,
        };
        if replies.send(reply).is_err() {
            break;
        }
    }
    debug!("[AI] {} worker stopped", color);
}
