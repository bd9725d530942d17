use crate::buhlmann::compartment::{Compartment, CompartmentParams};
use crate::buhlmann::zhl_values::{ZHLParam, ZHL_16A_HALF_LIVES};
use crate::common::constants::WATER_VAPOR_PRESSURE;
use crate::common::{
    depth_from_pressure, pressure_from_depth, DecoCalculationError, Depth, GradientFactor,
    GradientFactors, PartialPressure, Pressure, Time, ValidationError, Water,
};

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Implemented compartment tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Model {
    /// Original 16 compartment table from 1990 with the fastest compartment
    /// subdivided into 4 and 5 minute tissues.
    Zhl16a,
}

impl Model {
    pub fn half_lives(&self) -> &'static [ZHLParam] {
        match self {
            Model::Zhl16a => &ZHL_16A_HALF_LIVES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuhlmannConfig {
    pub water: Water,
    pub model: Model,
    pub gf: GradientFactors,
}

impl BuhlmannConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_water(mut self, water: Water) -> Self {
        self.water = water;
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_gradient_factors(mut self, gf_low: GradientFactor, gf_high: GradientFactor) -> Self {
        self.gf = (gf_low, gf_high);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (gf_low, gf_high) = self.gf;
        if !(gf_low > 0. && gf_low <= 1.) {
            return Err(ValidationError::new("gf", "GF low must be in (0, 1] range"));
        }
        if !(gf_high > 0. && gf_high <= 1.) {
            return Err(ValidationError::new("gf", "GF high must be in (0, 1] range"));
        }
        Ok(())
    }
}

impl Default for BuhlmannConfig {
    fn default() -> Self {
        Self {
            water: Water::Fresh,
            model: Model::Zhl16a,
            gf: (1., 1.),
        }
    }
}

/// A set of tissue compartments driven in parallel by one inspired mix.
///
/// Cloning is cheap (a short vector of floats plus params), which is how the
/// planner probes candidate stops without committing the real state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuhlmannModel {
    config: BuhlmannConfig,
    compartments: Vec<Compartment>,
}

impl BuhlmannModel {
    pub fn new(config: BuhlmannConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let compartments = config
            .model
            .half_lives()
            .iter()
            .map(|&half_life| Compartment::new(CompartmentParams::create(half_life)))
            .collect();
        Ok(Self {
            config,
            compartments,
        })
    }

    pub fn config(&self) -> BuhlmannConfig {
        self.config
    }

    pub fn water(&self) -> Water {
        self.config.water
    }

    pub fn compartment_count(&self) -> usize {
        self.compartments.len()
    }

    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Initialize every compartment to the washout fixed point of the given
    /// inspired mix, as after an infinite interval breathing it. Holding the
    /// same mix afterwards leaves tissue pressures unchanged.
    pub fn equilibrium(&mut self, partial_pressure: &PartialPressure) {
        for compartment in self.compartments.iter_mut() {
            compartment.set(partial_pressure.n2 - WATER_VAPOR_PRESSURE);
        }
    }

    /// Overwrite per-compartment inert gas pressures, e.g. to seed the
    /// residual loading of a repetitive dive.
    pub fn set_compartment_pressures(
        &mut self,
        pressures: &[Pressure],
    ) -> Result<(), ValidationError> {
        if pressures.len() != self.compartments.len() {
            return Err(ValidationError::new(
                "pressures",
                "one pressure per compartment required",
            ));
        }
        for (compartment, &pressure) in self.compartments.iter_mut().zip(pressures) {
            compartment.set(pressure);
        }
        Ok(())
    }

    /// Expose all compartments to a constant inspired mix.
    pub fn update(
        &mut self,
        partial_pressure: &PartialPressure,
        duration: Time,
    ) -> Result<(), DecoCalculationError> {
        for compartment in self.compartments.iter_mut() {
            compartment.constant_pressure_update(partial_pressure.n2, duration)?;
        }
        Ok(())
    }

    /// Expose all compartments to an inspired mix ramping linearly between
    /// two ambient pressures.
    pub fn variable_update(
        &mut self,
        start: &PartialPressure,
        end: &PartialPressure,
        duration: Time,
    ) -> Result<(), DecoCalculationError> {
        for compartment in self.compartments.iter_mut() {
            compartment.variable_pressure_update(start.n2, end.n2, duration)?;
        }
        Ok(())
    }

    pub fn pressures(&self) -> Result<Vec<Pressure>, DecoCalculationError> {
        self.compartments.iter().map(|c| c.pressure()).collect()
    }

    pub fn m0s(&self) -> Result<Vec<Pressure>, DecoCalculationError> {
        self.compartments.iter().map(|c| c.m0()).collect()
    }

    /// Highest surfacing M-value across compartments.
    pub fn m0(&self) -> Result<Pressure, DecoCalculationError> {
        Ok(max_of(self.m0s()?))
    }

    /// Per-compartment gradients at the ambient pressure of a depth.
    pub fn gradients(&self, depth: Depth) -> Result<Vec<f64>, DecoCalculationError> {
        let ambient = pressure_from_depth(depth, self.config.water);
        self.compartments
            .iter()
            .map(|c| c.gradient_at_ambient_pressure(ambient))
            .collect()
    }

    /// Gradient of the leading compartment at a depth.
    pub fn gradient_at_depth(&self, depth: Depth) -> Result<f64, DecoCalculationError> {
        Ok(max_of(self.gradients(depth)?))
    }

    /// Per-compartment ceilings contracted toward the tissue depth by the
    /// gradient factor. At gf = 1 this is the strict Buhlmann ceiling, at
    /// gf = 0 the depth whose ambient pressure matches the tissue.
    pub fn ceilings(&self, gf: GradientFactor) -> Result<Vec<Depth>, DecoCalculationError> {
        let water = self.config.water;
        self.compartments
            .iter()
            .map(|c| {
                let tissue_depth = depth_from_pressure(c.pressure()?, water);
                let tolerable_depth = depth_from_pressure(c.m0()?, water);
                Ok(tissue_depth - (tissue_depth - tolerable_depth) * gf)
            })
            .collect()
    }

    /// Shallowest depth the diver may ascend to under the gradient factor.
    pub fn ceiling(&self, gf: GradientFactor) -> Result<Depth, DecoCalculationError> {
        let ceilings = self.ceilings(gf)?;
        let mut max = ceilings[0];
        for ceiling in ceilings {
            if ceiling > max {
                max = ceiling;
            }
        }
        Ok(max)
    }
}

fn max_of(vals: Vec<f64>) -> f64 {
    let mut max = vals[0];
    for val in vals {
        if val > max {
            max = val;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::surface_air_partial_pressure;

    fn model(gf: GradientFactors) -> BuhlmannModel {
        BuhlmannModel::new(
            BuhlmannConfig::new()
                .with_water(Water::Salt)
                .with_gradient_factors(gf.0, gf.1),
        )
        .unwrap()
    }

    #[test]
    fn test_compartment_count() {
        let model = model((1., 1.));
        assert_eq!(model.compartment_count(), 17);
    }

    #[test]
    fn test_invalid_gf_rejected() {
        let invalid_cases = [(0., 0.7), (0.3, 1.5), (-0.1, 0.7)];
        for (gf_low, gf_high) in invalid_cases {
            let config = BuhlmannConfig::new().with_gradient_factors(gf_low, gf_high);
            assert!(BuhlmannModel::new(config).is_err());
        }
    }

    #[test]
    fn test_queries_before_equilibrium_fail() {
        let model = model((1., 1.));
        assert_eq!(
            model.pressures(),
            Err(DecoCalculationError::UninitializedCompartment)
        );
        assert_eq!(
            model.ceiling(1.),
            Err(DecoCalculationError::UninitializedCompartment)
        );
    }

    #[test]
    fn test_equilibrium_is_update_fixed_point() {
        let mut model = model((0.3, 0.7));
        let surface_air = surface_air_partial_pressure();
        model.equilibrium(&surface_air);
        let initial = model.pressures().unwrap();

        model.update(&surface_air, Time::from_minutes(60.)).unwrap();
        let after = model.pressures().unwrap();
        for (a, b) in initial.iter().zip(after.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_surface_ceiling_above_surface() {
        let mut model = model((1., 1.));
        model.equilibrium(&surface_air_partial_pressure());
        assert!(model.ceiling(1.).unwrap() <= Depth::zero());
    }

    #[test]
    fn test_ceiling_rises_after_bottom_time() {
        let mut model = model((1., 1.));
        model.equilibrium(&surface_air_partial_pressure());
        let bottom = crate::common::Mix::air()
            .partial_pressure(Depth::from_meters(40.), Water::Salt);
        model.update(&bottom, Time::from_minutes(30.)).unwrap();
        assert!(model.ceiling(1.).unwrap() > Depth::zero());
        // tighter gradient factor, deeper ceiling
        assert!(model.ceiling(0.3).unwrap() > model.ceiling(1.).unwrap());
    }

    #[test]
    fn test_gradient_leading_compartment() {
        let mut model = model((1., 1.));
        model.equilibrium(&surface_air_partial_pressure());
        let bottom = crate::common::Mix::air()
            .partial_pressure(Depth::from_meters(30.), Water::Salt);
        model.update(&bottom, Time::from_minutes(25.)).unwrap();
        let gradients = model.gradients(Depth::from_meters(3.)).unwrap();
        let leading = model.gradient_at_depth(Depth::from_meters(3.)).unwrap();
        assert!(gradients.iter().all(|g| *g <= leading));
        assert!(gradients.contains(&leading));
    }

    #[test]
    fn test_set_compartment_pressures() {
        let mut model = model((1., 1.));
        let seeded: Vec<Pressure> = (0..17).map(|i| 1. + i as f64 * 0.1).collect();
        model.set_compartment_pressures(&seeded).unwrap();
        assert_eq!(model.pressures().unwrap(), seeded);

        assert!(model.set_compartment_pressures(&[1., 2.]).is_err());
    }

    #[test]
    fn test_ceiling_endpoints_of_gf() {
        let mut model = model((1., 1.));
        let seeded: Vec<Pressure> = (0..17).map(|_| 3.).collect();
        model.set_compartment_pressures(&seeded).unwrap();

        // gf = 1: ceiling at the depth of the highest M0
        let strict = model.ceiling(1.).unwrap();
        let m0_depth = depth_from_pressure(model.m0().unwrap(), Water::Salt);
        assert!((strict.as_meters() - m0_depth.as_meters()).abs() < 1e-9);

        // gf = 0: ceiling at the tissue pressure depth
        let conservative = model.ceiling(0.).unwrap();
        let tissue_depth = depth_from_pressure(3., Water::Salt);
        assert!((conservative.as_meters() - tissue_depth.as_meters()).abs() < 1e-9);
    }
}
