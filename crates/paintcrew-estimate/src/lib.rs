//! Painter estimation and composition for paintcrew.
//!
//! This crate provides the estimation capability and its combinators:
//!
//! - [`Painter`] - Capability trait: availability plus time and cost queries
//! - [`ProportionalPainter`] - Leaf painter with fixed linear rates
//! - [`Crew`] - Ordered collection with availability and extremum views
//! - [`CompositePainter`] - Virtual painter over a crew and a reduction
//! - [`collaborative`] - Harmonic-sum blend of simultaneous painters
//! - [`cheapest_painter`], [`fastest_painter`], [`collaborative_painter`] -
//!   Factory constructors wiring a reduction into a composite

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paintcrew/paintcrew/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod composite;
mod crew;
mod factory;
mod painter;
mod proportional;

#[cfg(test)]
mod testutil;

pub use composite::{CompositePainter, Reduce, collaborative};
pub use crew::Crew;
pub use factory::{cheapest_painter, collaborative_painter, fastest_painter};
pub use painter::{Painter, PainterRef};
pub use proportional::ProportionalPainter;
