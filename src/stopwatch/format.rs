//! Duration formatting for the readout and the lap list.
//!
//! Everything here is plain modular arithmetic over milliseconds. Hours are
//! never wrapped, so a run longer than a day keeps counting up.

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// A millisecond count split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl TimeParts {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            hours: ms / MS_PER_HOUR,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
            millis: ms % MS_PER_SECOND,
        }
    }

    pub fn centis(&self) -> u64 {
        self.millis / 10
    }

    /// Zero-padded hours, minutes, seconds and three-digit milliseconds, the
    /// fields of the live readout.
    pub fn readout_fields(&self) -> [String; 4] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
            format!("{:03}", self.millis),
        ]
    }
}

/// Format as `MM:SS.CC`, or `HH:MM:SS.CC` when hours are nonzero or
/// `include_hours` is set. Centiseconds are truncated, not rounded.
pub fn format_time(ms: u64, include_hours: bool) -> String {
    let p = TimeParts::from_millis(ms);
    if include_hours || p.hours > 0 {
        format!(
            "{:02}:{:02}:{:02}.{:02}",
            p.hours,
            p.minutes,
            p.seconds,
            p.centis()
        )
    } else {
        format!("{:02}:{:02}.{:02}", p.minutes, p.seconds, p.centis())
    }
}

/// Signed lap delta: `+` slower, `-` faster, `±` equal, then the absolute
/// difference in the compact form.
pub fn format_signed(delta_ms: i64) -> String {
    let sign = match delta_ms {
        d if d > 0 => '+',
        d if d < 0 => '-',
        _ => '±',
    };
    format!("{}{}", sign, format_time(delta_ms.unsigned_abs(), false))
}
