//! Math utilities for std/no-std compatibility

use crate::common::error::ValidationError;
use alloc::vec::Vec;

/// Absolute value for f64
#[inline]
pub fn abs(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.abs()
    }
    #[cfg(feature = "no-std")]
    {
        libm::fabs(val)
    }
}

/// Ceiling function for f64
#[inline]
pub fn ceil(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.ceil()
    }
    #[cfg(feature = "no-std")]
    {
        libm::ceil(val)
    }
}

/// Power function for f64
#[inline]
pub fn powf(base: f64, exp: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        base.powf(exp)
    }
    #[cfg(feature = "no-std")]
    {
        libm::pow(base, exp)
    }
}

/// Round function for f64
#[inline]
pub fn round(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.round()
    }
    #[cfg(feature = "no-std")]
    {
        libm::round(val)
    }
}

/// Cube root for f64
#[inline]
pub fn cbrt(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.cbrt()
    }
    #[cfg(feature = "no-std")]
    {
        libm::cbrt(val)
    }
}

/// Square root for f64
#[inline]
pub fn sqrt(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.sqrt()
    }
    #[cfg(feature = "no-std")]
    {
        libm::sqrt(val)
    }
}

/// Piecewise-linear interpolation of `x` over the polyline (`xp`, `yp`).
///
/// `xp` must be strictly increasing and every `x` must fall within its range.
pub fn interpolate(xp: &[f64], yp: &[f64], x: &[f64]) -> Result<Vec<f64>, ValidationError> {
    if xp.len() != yp.len() {
        return Err(ValidationError::new("xp", "xp and yp must be the same size"));
    }
    if xp.len() < 2 {
        return Err(ValidationError::new("xp", "need at least 2 points"));
    }
    for i in 1..xp.len() {
        if xp[i] <= xp[i - 1] {
            return Err(ValidationError::new("xp", "xp must be strictly increasing"));
        }
    }

    let mut y = Vec::with_capacity(x.len());
    for &xi in x {
        if xi < xp[0] {
            return Err(ValidationError::new("x", "cannot interpolate before beginning"));
        }
        if xi > xp[xp.len() - 1] {
            return Err(ValidationError::new("x", "cannot interpolate after end"));
        }
        let j = find_segment(xp, xi);
        let slope = (yp[j + 1] - yp[j]) / (xp[j + 1] - xp[j]);
        y.push(yp[j] + slope * (xi - xp[j]));
    }
    Ok(y)
}

fn find_segment(xp: &[f64], val: f64) -> usize {
    for i in 0..xp.len() - 1 {
        if xp[i] <= val && val <= xp[i + 1] {
            return i;
        }
    }
    // unreachable: range checked by the caller
    xp.len() - 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_interpolate_round_trip() {
        let xp = [0., 1., 2.];
        let yp = [0., -1., 1.];
        let y = interpolate(&xp, &yp, &xp).unwrap();
        for (a, b) in y.iter().zip(yp.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interpolate_midpoints() {
        let xp = [0., 1., 2.];
        let yp = [0., -1., 1.];
        let x = [0., 0.5, 1., 1.5, 2.];
        let expected = [0., -0.5, -1., 0., 1.];
        let y = interpolate(&xp, &yp, &x).unwrap();
        for (a, b) in y.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interpolate_preserves_linearity() {
        let xp = [0., 10.];
        let yp = [5., 25.];
        let x = [2.5, 5., 7.5];
        let y = interpolate(&xp, &yp, &x).unwrap();
        let expected = vec![10., 15., 20.];
        assert_eq!(y, expected);
    }

    #[test]
    fn test_interpolate_requires_increasing_xp() {
        let res = interpolate(&[0., 0., 1.], &[0., 1., 2.], &[0.5]);
        assert!(res.is_err());
    }

    #[test]
    fn test_interpolate_range_checks() {
        let xp = [0., 1.];
        let yp = [0., 1.];
        assert!(interpolate(&xp, &yp, &[-0.1]).is_err());
        assert!(interpolate(&xp, &yp, &[1.1]).is_err());
    }
}
