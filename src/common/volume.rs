use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LITERS_PER_CUBIC_FOOT: f64 = 28.316846592;

/// Free gas volume, stored in liters.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Volume {
    l: f64,
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}L", self.as_liters())
    }
}

impl Add for Volume {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { l: self.l + rhs.l }
    }
}

impl Sub for Volume {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { l: self.l - rhs.l }
    }
}

impl Mul<f64> for Volume {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self { l: self.l * rhs }
    }
}

impl PartialOrd for Volume {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.l.partial_cmp(&other.l)
    }
}

impl Volume {
    pub fn zero() -> Self {
        Self { l: 0. }
    }
    pub fn from_liters<T: Into<f64>>(val: T) -> Self {
        Self { l: val.into() }
    }
    pub fn from_cubic_feet<T: Into<f64>>(val: T) -> Self {
        Self {
            l: val.into() * LITERS_PER_CUBIC_FOOT,
        }
    }
    pub fn as_liters(&self) -> f64 {
        self.l
    }
    pub fn as_cubic_feet(&self) -> f64 {
        self.l / LITERS_PER_CUBIC_FOOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_feet_round_trip() {
        let vol = Volume::from_cubic_feet(80.);
        assert!((vol.as_cubic_feet() - 80.).abs() < 1e-12);
    }

    #[test]
    fn test_volume_arithmetic() {
        let a = Volume::from_liters(10.);
        let b = Volume::from_liters(4.);
        assert_eq!((a - b).as_liters(), 6.);
        assert_eq!((a + b).as_liters(), 14.);
        assert_eq!((a * 2.).as_liters(), 20.);
        assert!(b < a);
    }
}
