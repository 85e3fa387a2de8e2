//! Numeric domain guards shared by every public entry point.

use crate::error::{Error, Result};
use crate::{Num, Vec3};

pub fn finite(name: &'static str, value: Num) -> Result<Num> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}

/// Finite and strictly greater than zero.
pub fn positive(name: &'static str, value: Num) -> Result<Num> {
    let value = finite(name, value)?;

    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { name, value })
    }
}

/// Finite eccentricity in [0, 1). Parabolic and hyperbolic orbits are
/// rejected.
pub fn eccentricity(value: Num) -> Result<Num> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::Eccentricity(value))
    }
}

pub fn finite_vec(name: &'static str, value: Vec3) -> Result<Vec3> {
    finite(name, value.x)?;
    finite(name, value.y)?;
    finite(name, value.z)?;

    Ok(value)
}
