use crate::common::{Depth, GradientFactor, ValidationError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The gradient factor policy applied during a deco ascent.
///
/// Until the first stop depth is known the allowed gradient is `low`
/// everywhere. Once the ascent pivots at the first stop, the allowed gradient
/// relaxes linearly from `low` at that depth to `high` at the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gradient {
    low: GradientFactor,
    high: GradientFactor,
    slope: Option<f64>,
}

impl Gradient {
    pub fn new(low: GradientFactor, high: GradientFactor) -> Result<Self, ValidationError> {
        if !(low > 0. && low <= 1.) {
            return Err(ValidationError::new("gf", "GF low must be in (0, 1] range"));
        }
        if !(high > 0. && high <= 1.) {
            return Err(ValidationError::new("gf", "GF high must be in (0, 1] range"));
        }
        if low > high {
            return Err(ValidationError::new("gf", "GF low can't be higher than GF high"));
        }
        Ok(Self {
            low,
            high,
            slope: None,
        })
    }

    pub fn low(&self) -> GradientFactor {
        self.low
    }

    pub fn high(&self) -> GradientFactor {
        self.high
    }

    /// Whether the slope has been pinned to a first stop yet.
    pub fn sloped(&self) -> bool {
        self.slope.is_some()
    }

    /// Pin the slope at the first stop depth.
    pub fn ascend_from(&mut self, first_stop: Depth) {
        self.slope = Some((self.low - self.high) / first_stop.as_meters());
    }

    /// Allowed gradient at a depth under the current policy state.
    pub fn at(&self, depth: Depth) -> GradientFactor {
        match self.slope {
            Some(slope) => self.high + slope * depth.as_meters(),
            None => self.low,
        }
    }
}
