//! The painter capability.

use std::sync::Arc;
use std::time::Duration;

use paintcrew_types::{Area, Quote, Result};

/// Anything that can quote a time and a cost to paint a given area.
///
/// Implementors must keep both query methods pure functions of `area` and
/// fixed internal rate state. Queries are fallible because composite
/// painters can find themselves with no available member to delegate to.
pub trait Painter {
    /// Returns true if this painter can currently take work.
    fn is_available(&self) -> bool;

    /// Estimates the time to paint the given area.
    ///
    /// # Errors
    ///
    /// Returns an error if no underlying painter is available, or if a
    /// rate derivation divides by zero.
    fn estimate_time(&self, area: Area) -> Result<Duration>;

    /// Estimates the compensation for painting the given area, in dollars.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Painter::estimate_time`].
    fn estimate_compensation(&self, area: Area) -> Result<f64>;

    /// Produces a full quote (time and compensation) for the given area.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Painter::estimate_time`].
    fn quote(&self, area: Area) -> Result<Quote> {
        Ok(Quote::new(
            self.estimate_time(area)?,
            self.estimate_compensation(area)?,
        ))
    }
}

/// Shared handle to a painter of any variant.
///
/// Crews and composites hold painters through this handle, so a crew can
/// mix leaf painters and nested composites, and the same painter can sit
/// in several crews at once.
pub type PainterRef = Arc<dyn Painter + Send + Sync>;

impl Painter for PainterRef {
    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }

    fn estimate_time(&self, area: Area) -> Result<Duration> {
        self.as_ref().estimate_time(area)
    }

    fn estimate_compensation(&self, area: Area) -> Result<f64> {
        self.as_ref().estimate_compensation(area)
    }
}
