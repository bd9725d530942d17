use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type DepthType = f64;

/// Distance below the surface, stored in meters. Negative values are used to
/// express "above the surface" ceilings and are never valid profile depths.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Depth {
    m: DepthType,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r"{}m \ {}ft", self.as_meters(), self.as_feet())
    }
}

impl PartialEq<Self> for Depth {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

impl PartialOrd<Self> for Depth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.m.partial_cmp(&other.m)
    }
}

impl Add<Self> for Depth {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { m: self.m + rhs.m }
    }
}

impl Sub<Self> for Depth {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { m: self.m - rhs.m }
    }
}

impl Mul<f64> for Depth {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { m: self.m * rhs }
    }
}

impl Div<f64> for Depth {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self { m: self.m / rhs }
    }
}

impl AddAssign for Depth {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self { m: self.m + rhs.m }
    }
}

impl Depth {
    pub fn zero() -> Self {
        Self { m: 0. }
    }
    pub fn from_meters<T: Into<DepthType>>(val: T) -> Self {
        Self { m: val.into() }
    }
    pub fn from_feet<T: Into<DepthType>>(val: T) -> Self {
        Self {
            m: Self::ft_to_m(val.into()),
        }
    }
    pub fn as_meters(&self) -> DepthType {
        self.m
    }
    pub fn as_feet(&self) -> DepthType {
        Self::m_to_ft(self.m)
    }
    fn m_to_ft(m: DepthType) -> DepthType {
        m / 0.3048
    }
    fn ft_to_m(ft: DepthType) -> DepthType {
        ft * 0.3048
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ft_to_m() {
        let depth = Depth::from_feet(100.);
        assert_eq!(depth.as_meters(), 30.48);
    }

    #[test]
    fn depth_conversion_round_trip() {
        let depth = Depth::from_meters(1.);
        let back = Depth::from_feet(depth.as_feet());
        assert!((back.as_meters() - 1.).abs() < 1e-12);
    }

    #[test]
    fn test_depth_arithmetic() {
        let a = Depth::from_meters(30.);
        let b = Depth::from_meters(10.);
        assert_eq!((a - b).as_meters(), 20.);
        assert_eq!((a + b).as_meters(), 40.);
        assert_eq!((a * 0.5).as_meters(), 15.);
        assert_eq!((a / 2.).as_meters(), 15.);
        assert!(b < a);
    }

    #[test]
    fn test_depth_param_type_conversion() {
        assert_eq!(Depth::from_meters(1.), Depth::from_meters(1));
        assert_eq!(Depth::from_feet(1.), Depth::from_feet(1));
    }
}
