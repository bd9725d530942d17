pub mod constants;
mod depth;
mod error;
mod global_types;
pub mod math_utils;
mod mix;
mod scr;
mod tank;
mod time;
mod volume;
mod water;

pub use depth::{Depth, DepthType};
pub use error::{DecoCalculationError, ValidationError};
pub use global_types::{GradientFactor, GradientFactors, Pressure, PressureRate, VolumeRate};
pub use math_utils::interpolate;
pub use mix::{surface_air_partial_pressure, Mix, PartialPressure};
pub use scr::{sac_from_scr, scr_at_depth, scr_from_sac, Scr};
pub use tank::{Tank, TankSpec, TankType};
pub use time::Time;
pub use volume::Volume;
pub use water::{
    depth_from_pressure, depth_from_water_pressure, pressure_from_depth,
    water_pressure_from_depth, Water,
};
