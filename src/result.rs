use crate::buhlmann::{BuhlmannConfig, BuhlmannModel};
use crate::common::constants::RESULT_TIME_INC_S;
use crate::common::{
    interpolate, math_utils, pressure_from_depth, scr_at_depth, surface_air_partial_pressure,
    DecoCalculationError, Depth, Pressure, Tank, Time, ValidationError, Volume,
};
use crate::plan::Plan;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tissue model state sampled along the result time grid. Inner vectors hold
/// one entry per compartment.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecoSeries {
    /// Overall (strict Buhlmann) ceiling [m]
    pub ceiling: Vec<f64>,
    /// Gradient of the leading compartment at the current depth
    pub gradient: Vec<f64>,
    /// Per-compartment surfacing M-values [bar]
    pub m0s: Vec<Vec<Pressure>>,
    /// Per-compartment inert gas pressures [bar]
    pub tissue_pressures: Vec<Vec<Pressure>>,
    /// Per-compartment ceilings [m]
    pub ceilings: Vec<Vec<f64>>,
    /// Per-compartment gradients at the current depth
    pub gradients: Vec<Vec<f64>>,
}

/// A finalized plan re-sampled on a fine uniform time grid, with the tank
/// consumption and tissue simulations run in lock-step. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiveResult {
    /// Sample times [min]
    pub time: Vec<f64>,
    /// Interpolated depth at each sample [m]
    pub depth: Vec<f64>,
    /// Absolute ambient pressure at each sample [bar]
    pub ambient_pressure: Vec<Pressure>,
    /// Remaining pressure per tank at each sample [bar]
    pub tank_pressure: BTreeMap<String, Vec<Pressure>>,
    pub deco: DecoSeries,
}

impl DiveResult {
    pub fn from_plan(plan: &Plan) -> Result<Self, DecoCalculationError> {
        if !plan.finalized() {
            return Err(ValidationError::new("plan", "plan not finalized").into());
        }

        let water = plan.water();
        let end_minutes = plan.last_point().time.as_minutes();
        // the time increment divides one minute evenly and profile times are
        // whole minutes, so the grid lands exactly on the end of the dive
        let steps = math_utils::round(end_minutes * 60. / RESULT_TIME_INC_S) as usize + 1;
        let time: Vec<f64> = (0..steps)
            .map(|i| (i as f64 * RESULT_TIME_INC_S) / 60.)
            .collect();

        let depth = interpolate(&plan.times(), &plan.depths(), &time)?;
        let ambient_pressure: Vec<Pressure> = depth
            .iter()
            .map(|&m| pressure_from_depth(Depth::from_meters(m), water))
            .collect();

        // live tanks, seeded from the loadout
        let mut tanks: BTreeMap<String, Tank> = BTreeMap::new();
        let mut tank_pressure: BTreeMap<String, Vec<Pressure>> = BTreeMap::new();
        for (name, config) in plan.tanks() {
            let tank = Tank::at_pressure(config.tank_type, config.pressure)?;
            let mut series = Vec::with_capacity(steps);
            series.push(tank.pressure());
            tanks.insert(name.clone(), tank);
            tank_pressure.insert(name.clone(), series);
        }

        // tissue model, seeded from an infinite surface interval
        let (gf_low, gf_high) = plan.gf();
        let config = BuhlmannConfig::new()
            .with_water(water)
            .with_gradient_factors(gf_low, gf_high);
        let mut model = BuhlmannModel::new(config)?;
        model.equilibrium(&surface_air_partial_pressure());

        let mut deco = DecoSeries::default();
        deco.record(&model, Depth::from_meters(depth[0]))?;

        for i in 1..steps {
            let duration = Time::from_minutes(time[i] - time[i - 1]);
            let avg_depth = Depth::from_meters((depth[i - 1] + depth[i]) * 0.5);
            let active = plan.tank_at(Time::from_minutes(time[i - 1]));

            // gas consumption at the average depth of the step
            // TODO: switch to scr.deco once the profile enters the final
            // ascent; everything currently breathes at the working rate
            let consumed = Volume::from_liters(
                scr_at_depth(plan.scr().work, avg_depth, water) * duration.as_minutes(),
            );
            let tank = tanks
                .get_mut(active)
                .ok_or_else(|| ValidationError::new("tank", "unknown tank name"))?;
            if tank.decrease_volume(consumed).is_err() {
                // ran dry mid-step. whether the resulting negative pressure
                // is a bug or a deliberate "ran out" signal is unresolved;
                // keep recording without clamping so consumers can warn
                let deficit = tank.volume() - consumed;
                tank.set_volume(deficit);
            }
            for (name, tank) in &tanks {
                tank_pressure
                    .get_mut(name)
                    .expect("series seeded above")
                    .push(tank.pressure());
            }

            // tissue loading at the same average depth
            let mix = plan
                .tanks()
                .get(active)
                .ok_or_else(|| ValidationError::new("tank", "unknown tank name"))?
                .mix;
            let pp = mix.partial_pressure(avg_depth, water);
            model.update(&pp, duration)?;
            deco.record(&model, Depth::from_meters(depth[i]))?;
        }

        Ok(Self {
            time,
            depth,
            ambient_pressure,
            tank_pressure,
            deco,
        })
    }
}

impl DecoSeries {
    fn record(
        &mut self,
        model: &BuhlmannModel,
        depth: Depth,
    ) -> Result<(), DecoCalculationError> {
        self.ceiling.push(model.ceiling(1.)?.as_meters());
        self.gradient.push(model.gradient_at_depth(depth)?);
        self.m0s.push(model.m0s()?);
        self.tissue_pressures.push(model.pressures()?);
        self.ceilings
            .push(model.ceilings(1.)?.iter().map(|c| c.as_meters()).collect());
        self.gradients.push(model.gradients(depth)?);
        Ok(())
    }
}
