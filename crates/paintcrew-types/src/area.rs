//! Validated work area.

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::AreaError;

/// A work area in square meters, guaranteed positive and finite.
///
/// Every estimation query takes an `Area`, so validating positivity here
/// keeps the downstream rate arithmetic free of division-by-zero checks.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into, Serialize, Deserialize,
)]
#[display("{_0} m²")]
#[serde(try_from = "f64", into = "f64")]
pub struct Area(f64);

impl Area {
    /// Creates a new area, validating that it is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::NonPositive`] if `square_meters` is zero,
    /// negative, NaN, or infinite.
    pub const fn new(square_meters: f64) -> Result<Self, AreaError> {
        if square_meters > 0.0 && square_meters.is_finite() {
            Ok(Self(square_meters))
        } else {
            Err(AreaError::NonPositive {
                value: square_meters,
            })
        }
    }

    /// Returns the area in square meters.
    #[must_use]
    pub const fn square_meters(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Area {
    type Error = AreaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
