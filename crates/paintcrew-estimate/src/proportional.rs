//! Linear-rate painter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use paintcrew_types::{Area, EstimateError, Result};

use crate::Painter;

const SECS_PER_HOUR: f64 = 3600.0;

/// A painter whose quotes scale linearly with area.
///
/// Parameterized by two fixed rates: how long one square meter takes and
/// what one hour of work costs. Always available, immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionalPainter {
    /// Time to paint one square meter.
    time_per_square_meter: Duration,
    /// Compensation per hour of work, in dollars.
    rate_per_hour: f64,
}

impl ProportionalPainter {
    /// Creates a new painter from explicit rates.
    #[must_use]
    pub const fn new(time_per_square_meter: Duration, rate_per_hour: f64) -> Self {
        Self {
            time_per_square_meter,
            rate_per_hour,
        }
    }

    /// Derives a painter from the totals of a known job.
    ///
    /// Back-computes `time_per_square_meter = total_time / area` and
    /// `rate_per_hour = total_cost / hours(total_time)`, so that quoting
    /// `area` on the result reproduces `total_time` and `total_cost`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NonPositiveTime`] if `total_time` is zero,
    /// or [`EstimateError::TimeOutOfRange`] if the derived per-area rate
    /// overflows [`Duration`].
    pub fn from_totals(total_time: Duration, total_cost: f64, area: Area) -> Result<Self> {
        if total_time.is_zero() {
            return Err(EstimateError::NonPositiveTime);
        }
        let total_secs = total_time.as_secs_f64();
        let time_per_square_meter =
            Duration::try_from_secs_f64(total_secs / area.square_meters())
                .map_err(|_| EstimateError::TimeOutOfRange)?;
        let rate_per_hour = total_cost / (total_secs / SECS_PER_HOUR);
        Ok(Self::new(time_per_square_meter, rate_per_hour))
    }

    /// Returns the time to paint one square meter.
    #[must_use]
    pub const fn time_per_square_meter(&self) -> Duration {
        self.time_per_square_meter
    }

    /// Returns the hourly rate in dollars.
    #[must_use]
    pub const fn rate_per_hour(&self) -> f64 {
        self.rate_per_hour
    }
}

impl Painter for ProportionalPainter {
    fn is_available(&self) -> bool {
        true
    }

    fn estimate_time(&self, area: Area) -> Result<Duration> {
        let secs = area.square_meters() * self.time_per_square_meter.as_secs_f64();
        Duration::try_from_secs_f64(secs).map_err(|_| EstimateError::TimeOutOfRange)
    }

    fn estimate_compensation(&self, area: Area) -> Result<f64> {
        let hours = self.estimate_time(area)?.as_secs_f64() / SECS_PER_HOUR;
        Ok(hours * self.rate_per_hour)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn hours(h: f64) -> Duration {
        Duration::from_secs_f64(h * 3600.0)
    }

    #[test]
    fn test_linear_scaling() {
        // 1 hour per square meter at $10/hour.
        let painter = ProportionalPainter::new(hours(1.0), 10.0);
        let area = Area::new(3.0).unwrap();

        let time = painter.estimate_time(area).unwrap();
        assert!((time.as_secs_f64() - 3.0 * 3600.0).abs() < 1e-6);
        let cost = painter.estimate_compensation(area).unwrap();
        assert!((cost - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_totals_round_trip() {
        let area = Area::new(7.5).unwrap();
        let painter = ProportionalPainter::from_totals(hours(5.0), 120.0, area).unwrap();

        let quote = painter.quote(area).unwrap();
        assert_relative_eq!(
            quote.duration.as_secs_f64(),
            5.0 * 3600.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(quote.compensation, 120.0, max_relative = 1e-9);
    }

    #[test]
    fn test_from_totals_rejects_zero_time() {
        let area = Area::new(1.0).unwrap();
        let result = ProportionalPainter::from_totals(Duration::ZERO, 100.0, area);
        assert_eq!(result, Err(EstimateError::NonPositiveTime));
    }

    #[test]
    fn test_huge_area_is_out_of_range_not_a_panic() {
        // 1e17 m² at 1 h/m² exceeds Duration's range; the query must
        // return the typed error rather than crash.
        let painter = ProportionalPainter::new(hours(1.0), 10.0);
        let area = Area::new(1e17).unwrap();

        assert_eq!(
            painter.estimate_time(area),
            Err(EstimateError::TimeOutOfRange)
        );
        assert_eq!(
            painter.estimate_compensation(area),
            Err(EstimateError::TimeOutOfRange)
        );
    }

    #[test]
    fn test_from_totals_tiny_area_is_out_of_range() {
        // Dividing an hour across 1e-300 m² overflows the per-area rate.
        let area = Area::new(1e-300).unwrap();
        let result = ProportionalPainter::from_totals(hours(1.0), 10.0, area);
        assert_eq!(result, Err(EstimateError::TimeOutOfRange));
    }

    #[test]
    fn test_always_available() {
        let painter = ProportionalPainter::new(hours(1.0), 10.0);
        assert!(painter.is_available());
    }
}
