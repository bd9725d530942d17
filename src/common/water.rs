use crate::common::constants::{GRAVITY, SURFACE_PRESSURE};
use crate::common::depth::Depth;
use crate::common::global_types::Pressure;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const PASCAL_PER_BAR: f64 = 100_000.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Water {
    Fresh,
    Salt,
}

impl Water {
    /// Water density [kg/m^3].
    pub fn density(&self) -> f64 {
        match self {
            // water density varies with temperature, being more dense at lower
            // temperatures. pure water at 0C is 1000 kg/m3. pick a value of
            // pure water at 25C, since contaminants generally decrease the
            // density, and this will offset changes due to colder water.
            Water::Fresh => 997.0474,
            // deep salt water has higher density (1050 kg/m3) than surface
            // water, which varies from 1020-1029 kg/m3. pick a median value
            // of surface seawater at 25C.
            Water::Salt => 1023.6,
        }
    }
}

/// Gauge pressure exerted by the water column alone, excluding the
/// atmosphere [bar].
pub fn water_pressure_from_depth(depth: Depth, water: Water) -> Pressure {
    // rho * g * h is in Pascal, 1 Pa = 1 kg/(m*s^2)
    water.density() * GRAVITY * depth.as_meters() / PASCAL_PER_BAR
}

/// Depth at which the water column alone exerts the given gauge pressure.
pub fn depth_from_water_pressure(pressure: Pressure, water: Water) -> Depth {
    Depth::from_meters(pressure * PASCAL_PER_BAR / (water.density() * GRAVITY))
}

/// Absolute ambient pressure at depth, including the atmosphere [bar].
pub fn pressure_from_depth(depth: Depth, water: Water) -> Pressure {
    water_pressure_from_depth(depth, water) + SURFACE_PRESSURE
}

/// Depth corresponding to an absolute ambient pressure. Pressures below
/// 1 atm map to negative depths (above the surface).
pub fn depth_from_pressure(pressure: Pressure, water: Water) -> Depth {
    depth_from_water_pressure(pressure - SURFACE_PRESSURE, water)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_water_pressure() {
        let pressure = water_pressure_from_depth(Depth::from_meters(100.), Water::Fresh);
        assert!((pressure - 9.777).abs() < 1e-3);
    }

    #[test]
    fn test_salt_water_pressure() {
        let pressure = water_pressure_from_depth(Depth::from_meters(100.), Water::Salt);
        assert!((pressure - 10.038).abs() < 1e-3);
    }

    #[test]
    fn test_depth_pressure_round_trip() {
        for water in [Water::Fresh, Water::Salt] {
            for meters in [0., 10., 30., 100.] {
                let depth = Depth::from_meters(meters);
                let back = depth_from_pressure(pressure_from_depth(depth, water), water);
                assert!((back.as_meters() - meters).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_surface_pressure_is_one_atm() {
        assert_eq!(pressure_from_depth(Depth::zero(), Water::Salt), 1.01325);
    }

    #[test]
    fn test_salt_denser_than_fresh() {
        let depth = Depth::from_meters(30.);
        assert!(
            pressure_from_depth(depth, Water::Salt) > pressure_from_depth(depth, Water::Fresh)
        );
    }
}
