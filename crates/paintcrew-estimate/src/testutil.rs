//! Shared test helpers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use paintcrew_types::{Area, Result};

use crate::{Painter, PainterRef, ProportionalPainter};

/// Test painter with toggleable availability around fixed linear rates.
pub(crate) struct OnCallPainter {
    available: Arc<AtomicBool>,
    inner: ProportionalPainter,
}

impl OnCallPainter {
    /// Creates a painter and the flag controlling its availability.
    pub(crate) fn new(inner: ProportionalPainter) -> (Arc<AtomicBool>, PainterRef) {
        let available = Arc::new(AtomicBool::new(true));
        let painter = Arc::new(Self {
            available: Arc::clone(&available),
            inner,
        });
        (available, painter)
    }
}

impl Painter for OnCallPainter {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    fn estimate_time(&self, area: Area) -> Result<Duration> {
        self.inner.estimate_time(area)
    }

    fn estimate_compensation(&self, area: Area) -> Result<f64> {
        self.inner.estimate_compensation(area)
    }
}

/// Shorthand for a shared linear painter: `hours_per_sqm` at `rate` $/h.
pub(crate) fn linear(hours_per_sqm: f64, rate: f64) -> PainterRef {
    Arc::new(ProportionalPainter::new(
        Duration::from_secs_f64(hours_per_sqm * 3600.0),
        rate,
    ))
}

/// Shorthand for a validated area.
pub(crate) fn area(square_meters: f64) -> Area {
    Area::new(square_meters).unwrap()
}
