/// Pressure in bar.
pub type Pressure = f64;
/// Pressure drop rate in bar per minute (SAC).
pub type PressureRate = f64;
/// Free gas volume rate in liters per minute (SCR).
pub type VolumeRate = f64;
/// Gradient factor as a fraction, 0.0 - 1.0.
pub type GradientFactor = f64;
/// (GF low, GF high) pair.
pub type GradientFactors = (GradientFactor, GradientFactor);
