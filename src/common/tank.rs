use crate::common::constants::{PSI_TO_BAR, SURFACE_PRESSURE};
use crate::common::error::ValidationError;
use crate::common::global_types::Pressure;
use crate::common::volume::Volume;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Implemented types of cylinders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TankType {
    /// Aluminum 40 cuft
    Al40,
    /// Aluminum 80 cuft / 11.1 L
    Al80,
    /// Faber low pressure 108 cuft / 17 L
    Lp108,
    /// Double / sidemounted LP108
    DoubleLp108,
}

/// Specs of a cylinder that describe capacity and max pressure. Gas volume is
/// a dependent variable, never an independent spec.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TankSpec {
    /// Volume of the physical interior of the tank, the storage capacity of
    /// gas at 1 atm.
    pub size: Volume,
    pub service_pressure: Pressure,
    /// Real-gas compressibility factor.
    pub z: f64,
}

impl TankType {
    pub fn spec(&self) -> TankSpec {
        match self {
            TankType::Al40 => TankSpec {
                size: Volume::from_liters(5.8),
                service_pressure: 3000. * PSI_TO_BAR,
                z: 1.045,
            },
            TankType::Al80 => TankSpec {
                size: Volume::from_liters(11.1),
                service_pressure: 3000. * PSI_TO_BAR,
                z: 1.0337,
            },
            TankType::Lp108 => TankSpec {
                size: Volume::from_liters(17.),
                service_pressure: 2640. * PSI_TO_BAR,
                z: 1.0,
            },
            TankType::DoubleLp108 => TankSpec {
                size: Volume::from_liters(34.),
                service_pressure: 2640. * PSI_TO_BAR,
                z: 1.0,
            },
        }
    }
}

/// A cylinder with its current fill. Pressure and free gas volume are kept in
/// lock-step through `V = size * P / (Z * 1 atm)`; there is no independent
/// state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tank {
    spec: TankSpec,
    pressure: Pressure,
    volume: Volume,
}

impl Tank {
    pub fn new(spec: TankSpec, pressure: Pressure) -> Result<Self, ValidationError> {
        if pressure < 0. {
            return Err(ValidationError::new("pressure", "negative tank pressure"));
        }
        let mut tank = Self {
            spec,
            pressure: 0.,
            volume: Volume::zero(),
        };
        tank.set_pressure(pressure);
        Ok(tank)
    }

    pub fn empty(tank_type: TankType) -> Self {
        // zero pressure always validates
        Self::new(tank_type.spec(), 0.).unwrap()
    }

    pub fn full(tank_type: TankType) -> Self {
        let spec = tank_type.spec();
        Self::new(spec, spec.service_pressure).unwrap()
    }

    pub fn at_pressure(tank_type: TankType, pressure: Pressure) -> Result<Self, ValidationError> {
        Self::new(tank_type.spec(), pressure)
    }

    pub fn at_volume(tank_type: TankType, volume: Volume) -> Result<Self, ValidationError> {
        let spec = tank_type.spec();
        Self::new(spec, Self::pressure_at_volume(&spec, volume))
    }

    /// Free gas volume held at the given pressure.
    pub fn volume_at_pressure(spec: &TankSpec, pressure: Pressure) -> Volume {
        spec.size * (pressure / (spec.z * SURFACE_PRESSURE))
    }

    /// Pressure required to hold the given free gas volume.
    pub fn pressure_at_volume(spec: &TankSpec, volume: Volume) -> Pressure {
        volume.as_liters() * spec.z * SURFACE_PRESSURE / spec.size.as_liters()
    }

    pub fn spec(&self) -> TankSpec {
        self.spec
    }

    pub fn service_pressure(&self) -> Pressure {
        self.spec.service_pressure
    }

    /// Free gas volume of a full fill.
    pub fn service_volume(&self) -> Volume {
        Self::volume_at_pressure(&self.spec, self.spec.service_pressure)
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn set_pressure(&mut self, pressure: Pressure) {
        self.pressure = pressure;
        self.volume = Self::volume_at_pressure(&self.spec, pressure);
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.pressure = Self::pressure_at_volume(&self.spec, volume);
    }

    /// Remove consumed gas. Errors when more gas is requested than the tank
    /// holds.
    pub fn decrease_volume(&mut self, diff: Volume) -> Result<(), ValidationError> {
        if diff > self.volume {
            return Err(ValidationError::new(
                "volume",
                "consumed volume exceeds remaining gas",
            ));
        }
        self.set_volume(self.volume - diff);
        Ok(())
    }
}
