//! Contractual constants of the planning core.

use crate::common::global_types::Pressure;

/// Atmospheric pressure at sea level, 1 atm [bar].
// TODO: allow varying this for altitude diving.
pub const SURFACE_PRESSURE: Pressure = 1.01325;

/// Magnitude of gravitational acceleration [m/s^2].
pub const GRAVITY: f64 = 9.80665;

/// Alveolar water vapor pressure at body temperature (47 mmHg at 37C,
/// Buhlmann's value) [bar]. Subtracted from the inspired inert gas pressure.
pub const WATER_VAPOR_PRESSURE: Pressure = 0.0627;

/// Depth between successive decompression stops, and the depth of the
/// shallowest stop [ft].
pub const STOP_DEPTH_INC_FT: f64 = 10.;

/// Smallest time increment used for stops in the output plan [min].
pub const STOP_TIME_INC_MIN: f64 = 1.;

/// Fixed planner ascent rate [ft/min]. Each ascent duration is rounded up to
/// the nearest whole STOP_TIME_INC_MIN.
pub const ASCENT_RATE_FT_PER_MIN: f64 = 20.;

/// Tissue model integration sub-step [s]. Must divide one minute evenly.
pub const MODEL_TIME_INC_S: f64 = 1.;

/// Re-sampling period of the result arrays [s]. Must divide one minute evenly.
pub const RESULT_TIME_INC_S: f64 = 6.;

/// Gas selection rules out any mix whose ppO2 at the stop exceeds this [bar].
pub const MAX_DECO_PPO2: Pressure = 1.6 * SURFACE_PRESSURE;

/// Bound on the planner main loop. Each iteration commits at most one minute
/// of stop time, so any schedule needing more one-minute decisions than this
/// means the ceiling is not converging toward the surface.
pub const MAX_PLANNER_ITERATIONS: usize = 4_000;

/// Conversion factor, psi to bar.
pub const PSI_TO_BAR: f64 = 0.0689476;
