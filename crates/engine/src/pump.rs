//! Event pump: merges the gravity timer and player input into one stream.
//!
//! There is exactly one consumer. When a tick and an input signal are ready
//! at the same time the tick is delivered first, so same-frame input always
//! sees the post-gravity state.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::input::InputSignal;
use crate::types::GameEvent;

pub struct EventPump {
    ticker: Interval,
    input: mpsc::Receiver<InputSignal>,
}

impl EventPump {
    /// First tick fires one `period` from now. Must be called inside a tokio runtime.
    pub fn new(period: Duration, input: mpsc::Receiver<InputSignal>) -> Self {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        // A stalled loop resumes with one tick, not a burst.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { ticker, input }
    }

    /// Next signal, in arrival order with ticks first on ties.
    ///
    /// A closed input channel reads as `Quit`: without input the game cannot be left.
    pub async fn next(&mut self) -> InputSignal {
        tokio::select! {
            biased;
            _ = self.ticker.tick() => InputSignal::Game(GameEvent::Tick),
            signal = self.input.recv() => signal.unwrap_or(InputSignal::Quit),
        }
    }

    /// Restart the gravity period from now.
    pub fn reset_timer(&mut self) {
        self.ticker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq};

    const PERIOD: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn tick_wins_a_tie_with_input() {
        let (tx, rx) = mpsc::channel(8);
        let mut pump = EventPump::new(PERIOD, rx);

        tx.send(InputSignal::Game(GameEvent::MoveLeft)).await.unwrap();
        time::advance(PERIOD).await;

        assert_eq!(pump.next().await, InputSignal::Game(GameEvent::Tick));
        assert_eq!(pump.next().await, InputSignal::Game(GameEvent::MoveLeft));
    }

    #[tokio::test(start_paused = true)]
    async fn input_does_not_wait_for_the_timer() {
        let (tx, rx) = mpsc::channel(8);
        let mut pump = EventPump::new(PERIOD, rx);
        let start = Instant::now();

        tx.send(InputSignal::Game(GameEvent::Rotate)).await.unwrap();
        assert_eq!(pump.next().await, InputSignal::Game(GameEvent::Rotate));
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_once_per_period() {
        let (_tx, rx) = mpsc::channel(8);
        let mut pump = EventPump::new(PERIOD, rx);
        let start = Instant::now();

        for n in 1..=3u32 {
            assert_eq!(pump.next().await, InputSignal::Game(GameEvent::Tick));
            let elapsed = Instant::now() - start;
            assert!(elapsed >= PERIOD * n && elapsed < PERIOD * (n + 1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_before_the_first_period() {
        let (_tx, rx) = mpsc::channel(8);
        let mut pump = EventPump::new(PERIOD, rx);

        let mut next = tokio_test::task::spawn(pump.next());
        assert_pending!(next.poll());
        drop(next);

        time::advance(PERIOD).await;
        let mut next = tokio_test::task::spawn(pump.next());
        assert_ready_eq!(next.poll(), InputSignal::Game(GameEvent::Tick));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_reads_as_quit() {
        let (tx, rx) = mpsc::channel(8);
        let mut pump = EventPump::new(PERIOD, rx);

        tx.send(InputSignal::Game(GameEvent::SoftDrop)).await.unwrap();
        drop(tx);

        assert_eq!(pump.next().await, InputSignal::Game(GameEvent::SoftDrop));
        assert_eq!(pump.next().await, InputSignal::Quit);
    }
}
