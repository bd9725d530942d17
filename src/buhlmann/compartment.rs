use crate::common::constants::{MODEL_TIME_INC_S, WATER_VAPOR_PRESSURE};
use crate::common::math_utils::{ceil, powf};
use crate::common::{DecoCalculationError, Pressure, Time};

use super::zhl_values::ZHLParam;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supersaturation tolerance line of one tissue, derived once from its
/// half-life.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompartmentParams {
    /// Nitrogen half-life [min]
    pub half_life: ZHLParam,
    /// Coefficient `a` is the y-intercept of the M-value line [bar]
    pub a: Pressure,
    /// Coefficient `b` is the reciprocal of the slope of the M-value line
    pub b: f64,
}

impl CompartmentParams {
    /// Derive the tolerance coefficients from the half-life alone.
    pub fn create(half_life: ZHLParam) -> Self {
        Self {
            half_life,
            a: 2. / crate::common::math_utils::cbrt(half_life),
            b: 1.005 - 1. / crate::common::math_utils::sqrt(half_life),
        }
    }
}

/// Tracks loading of a single inert gas in a single tissue compartment.
///
/// This type is not aware of anything related to diving, it is purely a
/// pressure tracker. Buhlmann's equations are denominated in bar and minutes,
/// so raw `f64` pressures are used here regardless of how the rest of the
/// crate wraps its quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compartment {
    params: CompartmentParams,
    /// Absolute inert gas pressure [bar]. None until `set`; using the
    /// compartment before initializing it is a usage error.
    pressure: Option<Pressure>,
}

impl Compartment {
    pub fn new(params: CompartmentParams) -> Self {
        Self {
            params,
            pressure: None,
        }
    }

    pub fn params(&self) -> CompartmentParams {
        self.params
    }

    /// Initialize or reset the compartment pressure [bar].
    pub fn set(&mut self, pressure: Pressure) {
        self.pressure = Some(pressure);
    }

    pub fn pressure(&self) -> Result<Pressure, DecoCalculationError> {
        self.pressure
            .ok_or(DecoCalculationError::UninitializedCompartment)
    }

    /// Expose the compartment to a constant inspired inert gas pressure for a
    /// period of time. The water vapor correction is applied here.
    pub fn constant_pressure_update(
        &mut self,
        inspired_pressure: Pressure,
        duration: Time,
    ) -> Result<(), DecoCalculationError> {
        let pressure = self.pressure()?;
        let pressure_diff = inspired_pressure - WATER_VAPOR_PRESSURE - pressure;
        let time_ratio = duration.as_minutes() / self.params.half_life;
        self.pressure = Some(pressure + pressure_diff * (1. - powf(2., -time_ratio)));
        Ok(())
    }

    /// Expose the compartment to an inspired pressure ramping linearly from
    /// start to end, sub-stepped at the model time increment with the
    /// constant update applied at each sub-step's average inspired pressure.
    pub fn variable_pressure_update(
        &mut self,
        inspired_start: Pressure,
        inspired_end: Pressure,
        duration: Time,
    ) -> Result<(), DecoCalculationError> {
        let steps = ceil(duration.as_seconds() / MODEL_TIME_INC_S) as usize;
        if steps == 0 {
            return self.pressure().map(|_| ());
        }
        let step_duration = Time::from_seconds(duration.as_seconds() / steps as f64);
        let pressure_inc = (inspired_end - inspired_start) / steps as f64;
        for i in 0..steps {
            let avg_inspired = inspired_start + pressure_inc * (i as f64 + 0.5);
            self.constant_pressure_update(avg_inspired, step_duration)?;
        }
        Ok(())
    }

    /// The tolerated compartment inert gas pressure were the diver at the
    /// surface [bar]. Note this is a pressure, not a depth.
    pub fn m0(&self) -> Result<Pressure, DecoCalculationError> {
        let pressure = self.pressure()?;
        Ok((pressure - self.params.a) * self.params.b)
    }

    /// Gradient factor if the compartment were instantaneously placed into an
    /// environment at the given absolute ambient pressure. 1.0 means the
    /// compartment would be at its M-value, 0 means equilibrium with the
    /// environment.
    pub fn gradient_at_ambient_pressure(
        &self,
        ambient_pressure: Pressure,
    ) -> Result<f64, DecoCalculationError> {
        let pressure = self.pressure()?;
        let m0 = self.m0()?;
        Ok((pressure - ambient_pressure) / (pressure - m0))
    }
}
