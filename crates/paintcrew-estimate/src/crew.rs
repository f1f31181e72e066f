//! Painter crews and extremum selection.

use std::sync::Arc;

use paintcrew_types::{Area, EstimateError, Result};

use crate::{Painter, PainterRef};

/// An ordered crew of painters.
///
/// Wraps shared painter handles; the same painter may belong to several
/// crews, and a member may itself be a composite of another crew. Derived
/// views are computed on demand and never cached, so availability changes
/// inside members are observed by every query.
#[derive(Clone, Default)]
pub struct Crew {
    painters: Vec<PainterRef>,
}

impl Crew {
    /// Creates a crew from the given painters.
    #[must_use]
    pub const fn new(painters: Vec<PainterRef>) -> Self {
        Self { painters }
    }

    /// Returns a new crew containing only the currently available members.
    ///
    /// The original crew is unmodified; handles are shared, not cloned.
    #[must_use]
    pub fn available(&self) -> Self {
        self.painters
            .iter()
            .filter(|p| p.is_available())
            .map(Arc::clone)
            .collect()
    }

    /// Returns the available member with the lowest compensation for `area`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NoAvailablePainter`] if the crew is empty
    /// or no member is available.
    pub fn cheapest(&self, area: Area) -> Result<PainterRef> {
        self.best_available_by(|p| p.estimate_compensation(area))
    }

    /// Returns the available member with the shortest time for `area`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NoAvailablePainter`] if the crew is empty
    /// or no member is available.
    pub fn fastest(&self, area: Area) -> Result<PainterRef> {
        self.best_available_by(|p| p.estimate_time(area).map(|t| t.as_secs_f64()))
    }

    /// Returns the available member minimizing the given key.
    ///
    /// Single pass; on ties the earliest member wins (strict `<`
    /// comparison keeps the running best). Key errors from nested
    /// composites propagate to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NoAvailablePainter`] if no member is
    /// available, or the first error produced by `key`.
    pub fn best_available_by<K, F>(&self, key: F) -> Result<PainterRef>
    where
        K: PartialOrd,
        F: Fn(&PainterRef) -> Result<K>,
    {
        let mut best: Option<(PainterRef, K)> = None;
        for painter in self.painters.iter().filter(|p| p.is_available()) {
            let k = key(painter)?;
            if best.as_ref().is_none_or(|(_, best_k)| k < *best_k) {
                best = Some((Arc::clone(painter), k));
            }
        }
        best.map(|(painter, _)| painter)
            .ok_or(EstimateError::NoAvailablePainter)
    }

    /// Returns an iterator over the crew members.
    pub fn iter(&self) -> std::slice::Iter<'_, PainterRef> {
        self.painters.iter()
    }

    /// Returns the number of members in the crew.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.painters.len()
    }

    /// Returns true if the crew has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.painters.is_empty()
    }
}

impl std::fmt::Debug for Crew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crew").field("len", &self.len()).finish()
    }
}

impl FromIterator<PainterRef> for Crew {
    fn from_iter<I: IntoIterator<Item = PainterRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Crew {
    type Item = &'a PainterRef;
    type IntoIter = std::slice::Iter<'a, PainterRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
