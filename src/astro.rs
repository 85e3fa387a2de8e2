//! Free function surface of the kernel.
//!
//! Ellipse-specific operations live in [`elliptic`]; this module holds
//! the pieces that only depend on period, time and orientation.

use crate::constants::TWO_PI;
use crate::error::Result;
use crate::{validation, Mat3, Num, Vec3};

pub mod elliptic;

/// Mean motion n = 2π/P.
///
/// https://en.wikipedia.org/wiki/Mean_motion
#[inline]
pub fn mean_motion(period: Num) -> Result<Num> {
    let period = validation::positive("orbital period", period)?;

    Ok(TWO_PI / period)
}

/// Mean anomaly reached after `time` on an orbit with the given period.
///
/// The result grows without bound with `time`. No reduction into
/// [0, 2π) happens here; the Kepler solver wraps its input itself.
///
/// https://en.wikipedia.org/wiki/Mean_anomaly
pub fn mean_anomaly(time: Num, period: Num) -> Result<Num> {
    let time = validation::finite("time", time)?;

    Ok(mean_motion(period)? * time)
}

/// Fraction of the orbit completed at `time`, in [0, 1).
///
/// Negative times wrap upward, so a quarter period before the epoch is
/// phase 0.75.
pub fn orbital_phase(time: Num, period: Num) -> Result<Num> {
    let time = validation::finite("time", time)?;
    let period = validation::positive("orbital period", period)?;

    let mut fraction = (time % period) / period;

    if fraction < 0.0 {
        fraction += 1.0;
    }

    Ok(fraction)
}

/// Reduces an angle into [0, 2π).
pub fn wrap_two_pi(angle: Num) -> Num {
    let wrapped = angle % TWO_PI;

    if wrapped < 0.0 {
        wrapped + TWO_PI
    } else {
        wrapped
    }
}

/// Rotates an orbital-plane position into the shared ecliptic frame.
///
/// Applies Rz(Ω) * Rx(i) * Rz(ω), so perihelion stays on the rotated
/// +x axis of the plane frame.
pub fn perifocal_to_ecliptic(
    position: Vec3,
    inclination: Num,
    longitude_of_ascending_node: Num,
    argument_of_perihelion: Num,
) -> Result<Vec3> {
    let position = validation::finite_vec("position", position)?;
    let i = validation::finite("inclination", inclination)?;
    let Ω = validation::finite("longitude of ascending node", longitude_of_ascending_node)?;
    let ω = validation::finite("argument of perihelion", argument_of_perihelion)?;

    let mut m = Mat3::IDENTITY;

    m *= Mat3::from_rotation_z(Ω);
    m *= Mat3::from_rotation_x(i);
    m *= Mat3::from_rotation_z(ω);

    Ok(m.mul_vec3(position))
}
