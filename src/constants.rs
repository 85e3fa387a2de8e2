use crate::Num;

/// Astronomical unit in km
pub const AU: Num = 1.496e+8;

#[cfg(feature = "f32")]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// Convergence tolerance on the eccentric anomaly update between
/// Newton-Raphson steps.
pub const NEWTON_TOLERANCE: Num = 1e-10;

/// Residual tolerance for the bisection fallback.
pub const BISECTION_TOLERANCE: Num = 1e-10;

/// Above this eccentricity the Newton-Raphson seed switches from the
/// mean anomaly to π.
pub const HIGH_ECCENTRICITY: Num = 0.8;
