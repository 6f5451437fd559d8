//! Stopwatch core: the timer engine, the lap ledger, duration formatting and
//! the session that ties them to a clock. Nothing here knows about the
//! terminal.

pub mod clock;
pub mod engine;
pub mod format;
pub mod ledger;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{TickOutcome, TimerEngine};
pub use ledger::{Lap, LapExtremes, LapLedger, LapMarker};
pub use session::Session;
