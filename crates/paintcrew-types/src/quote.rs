//! Job quote representation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A painter's quote for a job: how long it takes and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Time to complete the job.
    pub duration: Duration,
    /// Compensation for the job in dollars.
    pub compensation: f64,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub const fn new(duration: Duration, compensation: f64) -> Self {
        Self {
            duration,
            compensation,
        }
    }

    /// Formats a duration in human-readable form (e.g., "2h 30m", "45m").
    ///
    /// Seconds appear only below the ten-minute mark: "9m 30s", but a
    /// duration of 10m 30s renders as "10m".
    #[must_use]
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            if minutes > 0 {
                format!("{hours}h {minutes}m")
            } else {
                format!("{hours}h")
            }
        } else if minutes > 0 {
            if seconds > 0 && minutes < 10 {
                format!("{minutes}m {seconds}s")
            } else {
                format!("{minutes}m")
            }
        } else {
            format!("{seconds}s")
        }
    }

    /// Formats a compensation in dollars (e.g., "$10.00", "$1,250.50").
    #[must_use]
    pub fn format_compensation(compensation: f64) -> String {
        // Round to whole cents first so "$x.100" cannot happen.
        let total_cents = (compensation * 100.0).round() as i64;
        let whole = (total_cents / 100).abs();
        let cents = (total_cents % 100).abs();

        let mut digits = whole.to_string();
        let mut grouped = String::new();
        while digits.len() > 3 {
            let split = digits.len() - 3;
            grouped = format!(",{}{grouped}", &digits[split..]);
            digits.truncate(split);
        }
        let sign = if total_cents < 0 { "-" } else { "" };
        format!("{sign}${digits}{grouped}.{cents:02}")
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} for {}",
            Self::format_compensation(self.compensation),
            Self::format_duration(self.duration)
        )
    }
}
