use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elapsed time, stored in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    s: f64,
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.as_minutes())
    }
}

impl Add for Time {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { s: self.s + rhs.s }
    }
}

impl Sub for Time {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { s: self.s - rhs.s }
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self { s: self.s + rhs.s }
    }
}

impl Mul<f64> for Time {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self { s: self.s * rhs }
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.s.partial_cmp(&other.s)
    }
}

impl Time {
    pub fn zero() -> Self {
        Self { s: 0. }
    }
    pub fn from_seconds<T: Into<f64>>(val: T) -> Self {
        Self { s: val.into() }
    }
    pub fn from_minutes<T: Into<f64>>(val: T) -> Self {
        Self {
            s: val.into() * 60.,
        }
    }
    pub fn as_seconds(&self) -> f64 {
        self.s
    }
    pub fn as_minutes(&self) -> f64 {
        self.s / 60.
    }
    /// Whether this time falls on a whole-minute boundary.
    pub fn is_whole_minutes(&self) -> bool {
        let minutes = self.as_minutes();
        minutes == (minutes as i64) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minutes() {
        let time = Time::from_minutes(2.0);
        assert_eq!(time.as_seconds(), 120.0);
    }

    #[test]
    fn test_as_minutes() {
        let time = Time::from_seconds(30.0);
        assert_eq!(time.as_minutes(), 0.5);
    }

    #[test]
    fn test_whole_minutes() {
        assert!(Time::from_minutes(3.).is_whole_minutes());
        assert!(Time::zero().is_whole_minutes());
        assert!(!Time::from_seconds(90.).is_whole_minutes());
    }

    #[test]
    fn test_into_time() {
        Time::from_seconds(1.);
        Time::from_seconds(1);
        Time::from_minutes(1.);
        Time::from_minutes(1);
    }
}
