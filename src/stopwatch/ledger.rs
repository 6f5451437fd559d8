//! Lap bookkeeping.
//!
//! Laps are stored in recording order. Display code walks them newest first
//! via [`LapLedger::iter_recent_first`], but indices handed to the
//! annotation helpers are always recording-order, 0-based.

use super::format::format_signed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// 1-based position in recording order.
    pub number: u32,
    /// Time since the previous lap (since zero for the first).
    pub split_ms: u64,
    /// Elapsed time when the lap was recorded.
    pub cumulative_ms: u64,
}

/// Recording-order indices of the fastest and slowest laps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapExtremes {
    pub fastest: usize,
    pub slowest: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapMarker {
    None,
    Fastest,
    Slowest,
}

#[derive(Debug, Clone, Default)]
pub struct LapLedger {
    laps: Vec<Lap>,
}

impl LapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lap at `elapsed_ms`. Returns `None` without touching the
    /// ledger when nothing has elapsed or the value would run backwards.
    pub fn record_lap(&mut self, elapsed_ms: u64) -> Option<Lap> {
        if elapsed_ms == 0 {
            return None;
        }
        let previous = self.laps.last().map(|l| l.cumulative_ms).unwrap_or(0);
        if elapsed_ms < previous {
            return None;
        }
        let lap = Lap {
            number: self.laps.len() as u32 + 1,
            split_ms: elapsed_ms - previous,
            cumulative_ms: elapsed_ms,
        };
        self.laps.push(lap);
        Some(lap)
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// Laps paired with their recording-order index, newest first.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = (usize, &Lap)> {
        self.laps.iter().enumerate().rev()
    }

    /// Fastest and slowest laps, first occurrence winning ties. `None` with
    /// fewer than two laps.
    pub fn annotate(&self) -> Option<LapExtremes> {
        if self.laps.len() < 2 {
            return None;
        }
        let mut fastest = 0;
        let mut slowest = 0;
        for (i, lap) in self.laps.iter().enumerate().skip(1) {
            if lap.split_ms < self.laps[fastest].split_ms {
                fastest = i;
            }
            if lap.split_ms > self.laps[slowest].split_ms {
                slowest = i;
            }
        }
        Some(LapExtremes { fastest, slowest })
    }

    pub fn marker(&self, index: usize) -> LapMarker {
        match self.annotate() {
            Some(ext) if ext.fastest == index => LapMarker::Fastest,
            Some(ext) if ext.slowest == index => LapMarker::Slowest,
            _ => LapMarker::None,
        }
    }

    /// Split difference against the previous lap. Positive means slower.
    pub fn delta_ms(&self, index: usize) -> Option<i64> {
        if index == 0 {
            return None;
        }
        let current = self.laps.get(index)?;
        let previous = self.laps.get(index - 1)?;
        Some(current.split_ms as i64 - previous.split_ms as i64)
    }

    pub fn format_delta(&self, index: usize) -> Option<String> {
        self.delta_ms(index).map(format_signed)
    }
}
