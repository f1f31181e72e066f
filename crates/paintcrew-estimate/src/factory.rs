//! Convenience constructors wiring a reduction into a composite.

use crate::composite::collaborative;
use crate::{CompositePainter, Crew};

/// A composite painter that always quotes the crew's cheapest member.
#[must_use]
pub fn cheapest_painter(crew: Crew) -> CompositePainter {
    CompositePainter::new(crew, |area, crew: &Crew| crew.cheapest(area))
}

/// A composite painter that always quotes the crew's fastest member.
#[must_use]
pub fn fastest_painter(crew: Crew) -> CompositePainter {
    CompositePainter::new(crew, |area, crew: &Crew| crew.fastest(area))
}

/// A composite painter that quotes the whole crew working simultaneously.
#[must_use]
pub fn collaborative_painter(crew: Crew) -> CompositePainter {
    CompositePainter::new(crew, collaborative)
}
