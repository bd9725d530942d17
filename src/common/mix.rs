use crate::common::depth::Depth;
use crate::common::error::ValidationError;
use crate::common::global_types::Pressure;
use crate::common::water::{pressure_from_depth, Water};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of oxygen in atmospheric air.
const AIR_F_O2: f64 = 0.20946;

/// A nitrogen/oxygen breathing mix. Fractions always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mix {
    f_o2: f64,
    f_n2: f64,
}

/// Partial pressures of each gas in a mix at some ambient pressure [bar].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialPressure {
    pub o2: Pressure,
    pub n2: Pressure,
}

impl fmt::Display for Mix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.f_o2 * 100.)
    }
}

impl Mix {
    /// Create a mix from its oxygen fraction; the rest is nitrogen.
    pub fn new(f_o2: f64) -> Result<Self, ValidationError> {
        let f_n2 = 1.0 - f_o2;
        if !(f_o2 > 0. && f_o2 <= 1.) {
            return Err(ValidationError::new("f_o2", "O2 fraction must be in (0, 1]"));
        }
        if !(0. ..1.).contains(&f_n2) {
            return Err(ValidationError::new("f_n2", "N2 fraction must be in [0, 1)"));
        }
        Ok(Self { f_o2, f_n2 })
    }

    /// Atmospheric air.
    pub fn air() -> Self {
        Self {
            f_o2: AIR_F_O2,
            f_n2: 1.0 - AIR_F_O2,
        }
    }

    pub fn f_o2(&self) -> f64 {
        self.f_o2
    }

    pub fn f_n2(&self) -> f64 {
        self.f_n2
    }

    /// Partial pressures of each gas at the given depth.
    pub fn partial_pressure(&self, depth: Depth, water: Water) -> PartialPressure {
        let pressure = pressure_from_depth(depth, water);
        self.at_pressure(pressure)
    }

    /// Partial pressures of each gas at an absolute ambient pressure.
    pub fn at_pressure(&self, pressure: Pressure) -> PartialPressure {
        PartialPressure {
            o2: self.f_o2 * pressure,
            n2: self.f_n2 * pressure,
        }
    }

    /// Deepest depth at which this mix stays under the given ppO2 limit.
    pub fn max_operating_depth(&self, ppo2_limit: Pressure, water: Water) -> Depth {
        crate::common::water::depth_from_pressure(ppo2_limit / self.f_o2, water)
    }
}

/// Partial pressures of atmospheric air at the surface. Water type is
/// irrelevant at zero depth.
pub fn surface_air_partial_pressure() -> PartialPressure {
    Mix::air().partial_pressure(Depth::zero(), Water::Fresh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_air() {
        let air = Mix::air();
        assert_eq!(air.f_o2(), 0.20946);
        assert_eq!(air.f_n2(), 0.79054);
    }

    #[test]
    fn test_invalid_o2_high() {
        assert!(Mix::new(1.1).is_err());
    }

    #[test]
    fn test_invalid_o2_low() {
        assert!(Mix::new(0.).is_err());
        assert!(Mix::new(-3.).is_err());
    }

    #[test]
    fn test_pure_oxygen() {
        let o2 = Mix::new(1.).unwrap();
        assert_eq!(o2.f_n2(), 0.);
    }

    #[test]
    fn test_partial_pressure_sums_to_ambient() {
        let ean32 = Mix::new(0.32).unwrap();
        let pp = ean32.partial_pressure(Depth::from_meters(10.), Water::Salt);
        let ambient = pressure_from_depth(Depth::from_meters(10.), Water::Salt);
        assert!((pp.o2 + pp.n2 - ambient).abs() < 1e-12);
        assert!((pp.o2 / pp.n2 - 0.32 / 0.68).abs() < 1e-12);
    }

    #[test]
    fn test_surface_air_partial_pressure() {
        let pp = surface_air_partial_pressure();
        assert!((pp.o2 - 0.20946 * 1.01325).abs() < 1e-12);
        assert!((pp.n2 - 0.79054 * 1.01325).abs() < 1e-12);
    }

    #[test]
    fn test_max_operating_depth() {
        let ean50 = Mix::new(0.5).unwrap();
        let mod_depth = ean50.max_operating_depth(1.6 * 1.01325, Water::Salt);
        // ppO2 at the MOD equals the limit
        let pp = ean50.partial_pressure(mod_depth, Water::Salt);
        assert!((pp.o2 - 1.6 * 1.01325).abs() < 1e-9);
    }
}
