//! Core types for the paintcrew painting-job estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! paintcrew:
//!
//! - [`Area`] - A validated positive work area in square meters
//! - [`Quote`] - A time-and-cost quote for a job
//! - [`EstimateError`] - Errors that can occur during estimation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paintcrew/paintcrew/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod area;
mod error;
mod quote;

pub use area::Area;
pub use error::{AreaError, EstimateError, Result};
pub use quote::Quote;
