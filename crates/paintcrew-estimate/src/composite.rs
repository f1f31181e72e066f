//! Composite painters and the collaborative blend.

use std::sync::Arc;
use std::time::Duration;

use paintcrew_types::{Area, EstimateError, Result};

use crate::{Crew, Painter, PainterRef, ProportionalPainter};

const SECS_PER_HOUR: f64 = 3600.0;

/// A reduction strategy: collapses a crew into one painter for a job.
pub type Reduce = dyn Fn(Area, &Crew) -> Result<PainterRef> + Send + Sync;

/// A virtual painter computed on demand from a crew.
///
/// Every query re-runs the injected reduction over the crew and delegates
/// to the painter it produces. Nothing is cached, so a member whose
/// availability changes between two queries changes the answers.
pub struct CompositePainter {
    crew: Crew,
    reduce: Box<Reduce>,
}

impl CompositePainter {
    /// Creates a composite over `crew` using the given reduction.
    pub fn new<F>(crew: Crew, reduce: F) -> Self
    where
        F: Fn(Area, &Crew) -> Result<PainterRef> + Send + Sync + 'static,
    {
        Self {
            crew,
            reduce: Box::new(reduce),
        }
    }

    /// Returns the underlying crew.
    #[must_use]
    pub const fn crew(&self) -> &Crew {
        &self.crew
    }

    /// Runs the reduction for `area`, yielding the representative painter.
    ///
    /// # Errors
    ///
    /// Propagates the reduction's error, typically
    /// [`EstimateError::NoAvailablePainter`].
    pub fn reduce(&self, area: Area) -> Result<PainterRef> {
        (self.reduce)(area, &self.crew)
    }
}

impl Painter for CompositePainter {
    fn is_available(&self) -> bool {
        self.crew.iter().any(|p| p.is_available())
    }

    fn estimate_time(&self, area: Area) -> Result<Duration> {
        self.reduce(area)?.estimate_time(area)
    }

    fn estimate_compensation(&self, area: Area) -> Result<f64> {
        self.reduce(area)?.estimate_compensation(area)
    }
}

impl std::fmt::Debug for CompositePainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositePainter")
            .field("crew", &self.crew)
            .finish_non_exhaustive()
    }
}

/// Collaborative reduction: all available painters work simultaneously.
///
/// The combined rate is the harmonic sum of the individual rates,
/// `combined_time = 1 / Σ(1 / time_i)`, the parallel-work formula. Each
/// painter's cost is apportioned by the fraction of the combined duration
/// they work at their own rate:
/// `combined_cost = Σ(compensation_i / time_i * combined_time)`.
/// The result is a fresh [`ProportionalPainter`] derived from the combined
/// totals.
///
/// # Errors
///
/// Returns [`EstimateError::NoAvailablePainter`] if no member is
/// available, and [`EstimateError::NonPositiveTime`] if a member quotes
/// zero time (the harmonic term would divide by zero).
pub fn collaborative(area: Area, crew: &Crew) -> Result<PainterRef> {
    let available = crew.available();
    if available.is_empty() {
        return Err(EstimateError::NoAvailablePainter);
    }

    let mut inverse_hours_sum = 0.0;
    let mut terms = Vec::with_capacity(available.len());
    for painter in &available {
        let hours = painter.estimate_time(area)?.as_secs_f64() / SECS_PER_HOUR;
        if hours <= 0.0 {
            return Err(EstimateError::NonPositiveTime);
        }
        let compensation = painter.estimate_compensation(area)?;
        inverse_hours_sum += 1.0 / hours;
        terms.push((hours, compensation));
    }

    let combined_hours = 1.0 / inverse_hours_sum;
    let combined_cost: f64 = terms
        .iter()
        .map(|(hours, compensation)| compensation / hours * combined_hours)
        .sum();
    let combined_time = Duration::try_from_secs_f64(combined_hours * SECS_PER_HOUR)
        .map_err(|_| EstimateError::TimeOutOfRange)?;

    let blended = ProportionalPainter::from_totals(combined_time, combined_cost, area)?;
    Ok(Arc::new(blended))
}
