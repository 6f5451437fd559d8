use super::clock::Clock;
use super::engine::{TickOutcome, TimerEngine};
use super::ledger::{Lap, LapLedger};

/// One stopwatch: engine, laps and the clock both read from.
///
/// The session refreshes elapsed time from its clock right before stopping or
/// recording a lap, so those values match the moment of the command rather
/// than the last rendered frame.
pub struct Session {
    clock: Box<dyn Clock + Send>,
    engine: TimerEngine,
    ledger: LapLedger,
}

impl Session {
    pub fn new(clock: Box<dyn Clock + Send>) -> Self {
        Self {
            clock,
            engine: TimerEngine::new(),
            ledger: LapLedger::new(),
        }
    }

    pub fn toggle(&mut self) -> TickOutcome {
        let now = self.clock.now_ms();
        if self.engine.is_running() {
            self.engine.tick(now);
            self.engine.stop();
            tracing::info!(elapsed_ms = self.engine.elapsed_ms(), "stopwatch stopped");
        } else {
            self.engine.start(now);
            tracing::info!(elapsed_ms = self.engine.elapsed_ms(), "stopwatch started");
        }
        self.outcome()
    }

    /// Record a lap at the current elapsed time. Ignored until the stopwatch
    /// has been started since the last reset, or while nothing has elapsed.
    pub fn record_lap(&mut self) -> Option<Lap> {
        if !self.engine.has_started() {
            tracing::debug!("lap ignored: stopwatch not started");
            return None;
        }
        self.engine.tick(self.clock.now_ms());
        let lap = self.ledger.record_lap(self.engine.elapsed_ms());
        match &lap {
            Some(lap) => tracing::info!(
                lap = lap.number,
                split_ms = lap.split_ms,
                cumulative_ms = lap.cumulative_ms,
                "lap recorded"
            ),
            None => tracing::debug!("lap ignored: nothing elapsed"),
        }
        lap
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.ledger.clear();
        tracing::info!("stopwatch reset");
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.engine.tick(self.clock.now_ms())
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.engine.elapsed_ms()
    }

    pub fn lap_recording_enabled(&self) -> bool {
        self.engine.has_started()
    }

    pub fn ledger(&self) -> &LapLedger {
        &self.ledger
    }

    fn outcome(&self) -> TickOutcome {
        if self.engine.is_running() {
            TickOutcome::Continue
        } else {
            TickOutcome::Suspend
        }
    }
}
