//! Session: the single serial consumer that folds events over the game state.
//!
//! The session owns the running `GameState`, the best-score store and the
//! cached best value. It is the only place the state is replaced.

use anyhow::Result;

use crate::core::{GameState, TickOutcome};
use crate::input::InputSignal;
use crate::pump::EventPump;
use crate::store::BestScoreStore;
use crate::types::GameEvent;

pub struct Session<S: BestScoreStore> {
    state: GameState,
    store: S,
    best: u32,
}

impl<S: BestScoreStore> Session<S> {
    pub fn new(state: GameState, store: S) -> Self {
        let best = store.get();
        Self { state, store, best }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fold one event. Returns what the tick did, or `None` for other events.
    ///
    /// Entering game over offers the final score to the store.
    pub fn handle(&mut self, event: GameEvent) -> Option<TickOutcome> {
        let was_over = self.state.is_game_over();

        let (next, outcome) = match event {
            GameEvent::Tick => {
                let (next, outcome) = self.state.step();
                (next, Some(outcome))
            }
            GameEvent::Restart => {
                tracing::info!(score = self.state.score(), "restart");
                (self.state.restart(), None)
            }
            other => (self.state.apply(other), None),
        };
        tracing::trace!(event = event.as_str(), ?outcome, "event");

        match outcome {
            Some(TickOutcome::RowsCleared(rows)) => {
                tracing::debug!(rows, score = next.score(), "rows cleared");
            }
            Some(TickOutcome::LevelUp(level)) => {
                tracing::info!(level, score = next.score(), "level up");
            }
            _ => {}
        }

        self.state = next;

        if !was_over && self.state.is_game_over() {
            tracing::info!(score = self.state.score(), level = self.state.level(), "game over");
            self.offer_score();
        }
        outcome
    }

    /// Called once per rendered frame: offers the score and returns the best to show.
    pub fn frame(&mut self) -> u32 {
        self.offer_score();
        self.best
    }

    fn offer_score(&mut self) {
        let score = self.state.score();
        match self.store.set_if_greater(score) {
            Ok(best) => self.best = best,
            Err(err) => {
                tracing::warn!(error = ?err, score, "failed to persist best score");
                self.best = self.best.max(score);
            }
        }
    }
}

/// Whether the next frame may be diffed against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Diff,
    Full,
}

/// Drive `session` from `pump` until quit, rendering after every signal.
///
/// `render` gets the state, the best score and whether a full redraw is needed.
pub async fn run<S, R>(session: &mut Session<S>, pump: &mut EventPump, mut render: R) -> Result<()>
where
    S: BestScoreStore,
    R: FnMut(&GameState, u32, Redraw) -> Result<()>,
{
    let best = session.frame();
    render(session.state(), best, Redraw::Full)?;

    loop {
        let redraw = match pump.next().await {
            InputSignal::Quit => {
                tracing::info!(score = session.state().score(), "quit");
                return Ok(());
            }
            InputSignal::Resize => Redraw::Full,
            InputSignal::Game(event) => {
                if event == GameEvent::Restart {
                    pump.reset_timer();
                }
                session.handle(event);
                Redraw::Diff
            }
        };

        let best = session.frame();
        render(session.state(), best, redraw)?;
    }
}
