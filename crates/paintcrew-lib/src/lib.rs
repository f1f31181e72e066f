//! Painting-job estimation library with composable painter crews.
//!
//! This is a facade crate that re-exports functionality from the paintcrew
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use paintcrew_lib::{
//!     Area, Crew, Painter, PainterRef, ProportionalPainter, cheapest_painter,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let alice = ProportionalPainter::new(Duration::from_secs(3600), 10.0);
//!     let bob = ProportionalPainter::new(Duration::from_secs(2 * 3600), 4.0);
//!
//!     let crew = Crew::new(vec![Arc::new(alice) as PainterRef, Arc::new(bob)]);
//!     let painter = cheapest_painter(crew);
//!
//!     let quote = painter.quote(Area::new(12.0)?)?;
//!     println!("best offer: {quote}");
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paintcrew/paintcrew/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use paintcrew_types::*;

// Re-export estimation and composition
pub use paintcrew_estimate::{
    CompositePainter, Crew, Painter, PainterRef, ProportionalPainter, Reduce, cheapest_painter,
    collaborative, collaborative_painter, fastest_painter,
};
