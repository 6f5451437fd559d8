/// What the frame loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Engine is running; request another frame.
    Continue,
    /// Engine is stopped; stop requesting frames.
    Suspend,
}

/// Two-state stopwatch: stopped or running, with elapsed time frozen while
/// stopped and resumed (not restarted) on the next start.
#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    running: bool,
    has_started: bool,
    elapsed_ms: u64,
    start_reference_ms: u64,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.start_reference_ms = now_ms.saturating_sub(self.elapsed_ms);
        self.running = true;
        self.has_started = true;
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
    }

    pub fn toggle(&mut self, now_ms: u64) {
        if self.running {
            self.stop();
        } else {
            self.start(now_ms);
        }
    }

    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_ms = 0;
        self.start_reference_ms = 0;
        self.has_started = false;
    }

    /// Recompute elapsed time from `now_ms` while running. Never lowers the
    /// elapsed value, even if the clock steps backwards.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if !self.running {
            return TickOutcome::Suspend;
        }
        let elapsed = now_ms.saturating_sub(self.start_reference_ms);
        self.elapsed_ms = self.elapsed_ms.max(elapsed);
        TickOutcome::Continue
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once started since the last reset.
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}
