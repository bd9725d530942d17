use crate::common::constants::SURFACE_PRESSURE;
use crate::common::depth::Depth;
use crate::common::error::ValidationError;
use crate::common::global_types::{PressureRate, VolumeRate};
use crate::common::tank::Tank;
use crate::common::water::{pressure_from_depth, Water};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surface consumption rates for the two phases of a dive [L/min].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scr {
    /// SCR during the bottom portion of the dive, everything until the final
    /// ascent.
    pub work: VolumeRate,
    /// SCR during the decompression portion of the dive.
    pub deco: VolumeRate,
}

impl Scr {
    pub fn new(work: VolumeRate, deco: VolumeRate) -> Self {
        Self { work, deco }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.work <= 0. {
            return Err(ValidationError::new("scr", "working SCR must be positive"));
        }
        if self.deco <= 0. {
            return Err(ValidationError::new("scr", "deco SCR must be positive"));
        }
        Ok(())
    }
}

/// Convert a diver-measured pressure drop rate in `tank` to a free gas volume
/// rate at the surface.
pub fn scr_from_sac(sac: PressureRate, tank: &Tank) -> VolumeRate {
    sac * tank.service_volume().as_liters() / tank.service_pressure()
}

/// Convert a surface volume rate back to the pressure drop rate it causes in
/// `tank`.
pub fn sac_from_scr(scr: VolumeRate, tank: &Tank) -> PressureRate {
    scr * tank.service_pressure() / tank.service_volume().as_liters()
}

/// Volume rate consumed at depth for a given surface rate. Scales linearly
/// with absolute ambient pressure.
pub fn scr_at_depth(scr: VolumeRate, depth: Depth, water: Water) -> VolumeRate {
    scr * pressure_from_depth(depth, water) / SURFACE_PRESSURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tank::TankType;

    #[test]
    fn test_scr_sac_round_trip() {
        let tank = Tank::full(TankType::Al80);
        for sac in [0.5, 1., 2.5] {
            let back = sac_from_scr(scr_from_sac(sac, &tank), &tank);
            assert!((back - sac).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scr_at_depth_scales_with_pressure() {
        let scr = 15.;
        let depth = Depth::from_meters(25.);
        for water in [Water::Fresh, Water::Salt] {
            let at_depth = scr_at_depth(scr, depth, water);
            let expected_scale = pressure_from_depth(depth, water) / SURFACE_PRESSURE;
            assert!((at_depth / scr - expected_scale).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scr_at_surface_unchanged() {
        assert!((scr_at_depth(12., Depth::zero(), Water::Salt) - 12.).abs() < 1e-12);
    }

    #[test]
    fn test_scr_validation() {
        assert!(Scr::new(15., 12.).validate().is_ok());
        assert!(Scr::new(0., 12.).validate().is_err());
        assert!(Scr::new(15., -1.).validate().is_err());
    }
}
