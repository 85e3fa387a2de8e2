//! Elliptical orbit operations: Kepler's equation, anomaly conversion,
//! in-plane positioning and the scalar derivations around them.

use tracing::debug;

use crate::constants::{BISECTION_TOLERANCE, HIGH_ECCENTRICITY, NEWTON_TOLERANCE, PI, TWO_PI};
use crate::error::Result;
use crate::math::{bisect, newton_approx};
use crate::{validation, vec3, Num, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{mean_motion, wrap_two_pi};

/// Eccentric Anomaly (E) is given by the equation:
/// M = E - e * sin(E)
/// where
/// M is the mean anomaly
/// e is the eccentricity
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-keplers-equation-ellipse
///
/// Newton-Raphson from the wrapped mean anomaly (seeded at π for
/// highly eccentric orbits); when it fails to settle, bisection over
/// [0, 2π] takes over. The returned E reproduces M to 1e-9 for every
/// in-domain input.
pub fn solve_keplers_equation(
    // Mean anomaly
    M: Num,
    // Eccentricity
    e: Num,
) -> Result<Num> {
    let M = validation::finite("mean anomaly", M)?;
    let e = validation::eccentricity(e)?;

    let M = wrap_two_pi(M);

    // The mean anomaly is a poor seed near e = 1
    let E0 = if e > HIGH_ECCENTRICITY { PI } else { M };

    let newton = newton_approx(
        // f(E) = E - e*sin(E) - M
        |E| E - (e * E.sin()) - M,
        // f'(E) = 1 - e*cos(E)
        |E| 1.0 - (e * E.cos()),
        E0,
        NEWTON_TOLERANCE,
    );

    Ok(newton.unwrap_or_else(|| {
        debug!(
            mean_anomaly = M,
            eccentricity = e,
            "Newton-Raphson did not converge, escalating to bisection"
        );

        bisect(|E| E - (e * E.sin()) - M, 0.0, TWO_PI, BISECTION_TOLERANCE)
    }))
}

/// True anomaly from the eccentric anomaly, in [0, 2π).
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-eccentric-anomaly-true-anomaly-ellipse
pub fn true_anomaly(E: Num, e: Num) -> Result<Num> {
    let E = validation::finite("eccentric anomaly", E)?;
    let e = validation::eccentricity(e)?;

    let v = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (E / 2.0).tan()).atan();

    Ok(wrap_two_pi(v))
}

/// Position in the orbital plane at true anomaly `v`.
///
/// Perihelion lies on +x; the z component is always zero.
pub fn orbital_position(a: Num, e: Num, v: Num) -> Result<Vec3> {
    let a = validation::positive("semi-major axis", a)?;
    let e = validation::eccentricity(e)?;
    let v = validation::finite("true anomaly", v)?;

    let r = a * (1.0 - e * e) / (1.0 + e * v.cos());

    Ok(vec3(r * v.cos(), r * v.sin(), 0.0))
}

/// Orbital speed at distance `r` from the focus, via vis-viva.
///
/// The gravitational parameter is recovered from the period as
/// μ = n²a³, so callers never supply one. The radicand is clamped at
/// zero; near the apsides 2/r - 1/a can dip negative in floating
/// point.
///
/// https://en.wikipedia.org/wiki/Vis-viva_equation
pub fn vis_viva_speed(a: Num, r: Num, period: Num) -> Result<Num> {
    let a = validation::positive("semi-major axis", a)?;
    let r = validation::positive("radius", r)?;

    let n = mean_motion(period)?;
    let μ = n * n * a.powi(3);

    let v_squared = μ * (2.0 / r - 1.0 / a);

    Ok(v_squared.max(0.0).sqrt())
}

/// Perihelion and aphelion distances of an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Apsides {
    pub perihelion: Num,
    pub aphelion: Num,
}

/// https://en.wikipedia.org/wiki/Apsis
pub fn apsides(a: Num, e: Num) -> Result<Apsides> {
    let a = validation::positive("semi-major axis", a)?;
    let e = validation::eccentricity(e)?;

    Ok(Apsides {
        perihelion: a * (1.0 - e),
        aphelion: a * (1.0 + e),
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::Error;

    const EPS: Num = 1e-9;

    fn residual(M: Num, e: Num, E: Num) -> Num {
        (E - e * E.sin() - wrap_two_pi(M)).abs()
    }

    #[test_case(0.0)]
    #[test_case(0.1)]
    #[test_case(0.5)]
    #[test_case(0.8)]
    #[test_case(0.9)]
    #[test_case(0.99)]
    fn solution_reproduces_the_mean_anomaly(e: Num) {
        for step in 0..32 {
            let M = step as Num * TWO_PI / 32.0;
            let E = solve_keplers_equation(M, e).unwrap();

            assert!(
                residual(M, e, E) < EPS,
                "residual {} too large at M = {M}, e = {e}",
                residual(M, e, E)
            );
        }
    }

    #[test_case(0.0)]
    #[test_case(1.0)]
    #[test_case(3.0)]
    #[test_case(6.0)]
    fn circular_orbits_solve_exactly(M: Num) {
        let E = solve_keplers_equation(M, 0.0).unwrap();

        assert!((E - M).abs() < 1e-10);
    }

    #[test]
    fn negative_mean_anomalies_wrap_first() {
        let E = solve_keplers_equation(-PI / 2.0, 0.3).unwrap();

        assert!(residual(3.0 * PI / 2.0, 0.3, E) < EPS);
        assert!((0.0..TWO_PI).contains(&E));
    }

    #[test]
    fn high_eccentricity_still_converges() {
        let E = solve_keplers_equation(PI / 2.0, 0.9).unwrap();

        assert!(residual(PI / 2.0, 0.9, E) < 1e-6);
    }

    #[test_case(1.0)]
    #[test_case(-0.1)]
    #[test_case(Num::NAN)]
    fn solver_rejects_non_elliptical_eccentricities(e: Num) {
        assert!(matches!(
            solve_keplers_equation(1.0, e),
            Err(Error::Eccentricity(_))
        ));
    }

    #[test]
    fn solver_rejects_non_finite_mean_anomaly() {
        assert!(solve_keplers_equation(Num::NAN, 0.5).is_err());
        assert!(solve_keplers_equation(Num::INFINITY, 0.5).is_err());
    }

    #[test]
    fn bisection_fallback_lands_on_the_root() {
        // Drive the fallback directly on the Kepler residual
        let M = 0.3;
        let e = 0.95;
        let E = bisect(|E| E - (e * E.sin()) - M, 0.0, TWO_PI, BISECTION_TOLERANCE);

        assert!(residual(M, e, E) < EPS);
    }

    #[test_case(0.0)]
    #[test_case(0.2)]
    #[test_case(0.9)]
    fn true_anomaly_fixed_points(e: Num) {
        let at_perihelion = true_anomaly(0.0, e).unwrap();
        let at_aphelion = true_anomaly(PI, e).unwrap();

        assert!(at_perihelion.abs() < EPS);
        assert!((at_aphelion - PI).abs() < EPS);
    }

    #[test]
    fn true_anomaly_wraps_past_aphelion() {
        let v = true_anomaly(3.0 * PI / 2.0, 0.1).unwrap();

        assert!((PI..TWO_PI).contains(&v));
    }

    #[test]
    fn true_anomaly_leads_the_eccentric_anomaly_outbound() {
        // Between perihelion and aphelion the true anomaly runs ahead
        let v = true_anomaly(1.0, 0.5).unwrap();

        assert!(v > 1.0);
        assert!(v < PI);
    }

    #[test]
    fn plane_position_special_cases() {
        let circular = orbital_position(1.0, 0.0, 0.0).unwrap();
        assert!((circular.x - 1.0).abs() < EPS);
        assert!(circular.y.abs() < EPS);
        assert_eq!(circular.z, 0.0);

        let at_perihelion = orbital_position(2.0, 0.25, 0.0).unwrap();
        assert!((at_perihelion.x - 1.5).abs() < EPS);

        let at_aphelion = orbital_position(2.0, 0.25, PI).unwrap();
        assert!((at_aphelion.x + 2.5).abs() < EPS);
        assert!(at_aphelion.y.abs() < EPS);
    }

    #[test]
    fn plane_position_radius_follows_the_conic_equation() {
        let a = 1.523_679;
        let e = 0.0934;
        let v = 2.4;

        let position = orbital_position(a, e, v).unwrap();
        let r = a * (1.0 - e * e) / (1.0 + e * v.cos());

        assert!((position.length() - r).abs() < EPS);
    }

    #[test]
    fn plane_position_rejects_bad_elements() {
        assert!(orbital_position(0.0, 0.1, 0.0).is_err());
        assert!(orbital_position(-1.0, 0.1, 0.0).is_err());
        assert!(orbital_position(1.0, 1.0, 0.0).is_err());
        assert!(orbital_position(1.0, 0.1, Num::NAN).is_err());
    }

    #[test]
    fn circular_speed_matches_the_mean_motion() {
        // e = 0: v = sqrt(μ/a) = n·a everywhere on the orbit
        let speed = vis_viva_speed(1.0, 1.0, 100.0).unwrap();

        assert!((speed - TWO_PI / 100.0).abs() < 1e-12);
    }

    #[test]
    fn speed_clamps_beyond_aphelion_noise() {
        // r slightly past 2a - r_peri puts the radicand below zero
        let speed = vis_viva_speed(1.0, 2.0 + 1e-12, 100.0).unwrap();

        assert_eq!(speed, 0.0);
    }

    #[test]
    fn vis_viva_rejects_non_positive_scalars() {
        assert!(vis_viva_speed(0.0, 1.0, 100.0).is_err());
        assert!(vis_viva_speed(1.0, 0.0, 100.0).is_err());
        assert!(vis_viva_speed(1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn angular_momentum_matches_at_the_apsides() {
        let a = 1.0;
        let e = 0.3;
        let period = 100.0;

        let Apsides {
            perihelion,
            aphelion,
        } = apsides(a, e).unwrap();

        let v_peri = vis_viva_speed(a, perihelion, period).unwrap();
        let v_apo = vis_viva_speed(a, aphelion, period).unwrap();

        assert!((perihelion * v_peri - aphelion * v_apo).abs() < 1e-6);
    }

    #[test]
    fn apsides_are_exact() {
        let Apsides {
            perihelion,
            aphelion,
        } = apsides(1.0, 0.2).unwrap();

        assert!((perihelion - 0.8).abs() < 1e-9);
        assert!((aphelion - 1.2).abs() < 1e-9);
    }

    #[test]
    fn apsides_reject_out_of_domain_elements() {
        assert!(apsides(-1.0, 0.2).is_err());
        assert!(apsides(1.0, 1.2).is_err());
    }
}
