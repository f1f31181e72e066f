//! Error types for paintcrew.

use thiserror::Error;

/// Result type alias for paintcrew operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while estimating a painting job.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// Invalid work area.
    #[error(transparent)]
    Area(#[from] AreaError),

    /// A crew query found no available painter.
    ///
    /// Raised by the extremum selections and the collaborative blend when
    /// the crew is empty or every member is unavailable.
    #[error("no available painter in crew")]
    NoAvailablePainter,

    /// A rate derivation or blend term required a positive time.
    ///
    /// Raised when deriving per-area rates from a zero total time, or when
    /// a blend member quotes zero time for the job.
    #[error("total time must be positive to derive rates")]
    NonPositiveTime,

    /// A computed time exceeded the representable duration range.
    ///
    /// Raised when an area is large enough (or a derived rate extreme
    /// enough) that the estimated time overflows [`std::time::Duration`].
    #[error("estimated time is out of the representable range")]
    TimeOutOfRange,
}

/// Error for invalid work areas.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AreaError {
    /// Area is zero, negative, or not finite.
    #[error("area must be a positive number of square meters, got {value}")]
    NonPositive {
        /// The rejected value.
        value: f64,
    },
}
