#![cfg_attr(feature = "no-std", no_std)]
extern crate alloc;

mod buhlmann;
mod common;
mod plan;
mod planner;
mod result;

pub use buhlmann::{
    BuhlmannConfig, BuhlmannModel, Compartment, CompartmentParams, Gradient, Model, ZHLParam,
    ZHL_16A_HALF_LIVES,
};

pub use common::{
    constants, depth_from_pressure, depth_from_water_pressure, interpolate, pressure_from_depth,
    sac_from_scr, scr_at_depth, scr_from_sac, surface_air_partial_pressure,
    water_pressure_from_depth, DecoCalculationError, Depth, DepthType, GradientFactor,
    GradientFactors, Mix, PartialPressure, Pressure, PressureRate, Scr, Tank, TankSpec, TankType,
    Time, ValidationError, Volume, VolumeRate, Water,
};

pub use plan::{usage, Plan, Point, Profile, TankConfig, TankLoadout};
pub use planner::replan;
pub use result::{DecoSeries, DiveResult};

// Re-export Vec and vec macro from alloc for convenience
pub use alloc::vec;
pub use alloc::vec::Vec;
