use crate::astro::elliptic::{self, Apsides};
use crate::astro;
use crate::constants::TWO_PI;
use crate::error::Result;
use crate::{validation, Num, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keplerian elements of an elliptical heliocentric orbit.
///
/// Distances are astronomical units, times are days and angles are
/// radians, except [`mean_anomaly_at_epoch`](Self::mean_anomaly_at_epoch)
/// which is degrees.
///
/// Values are immutable and only exist in a valid state: construction
/// goes through [`new`](Self::new) and the builder methods, which
/// reject eccentricities outside [0, 1), non-finite angles and
/// non-positive sizes or periods. Methods taking a time validate only
/// that argument.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    semi_major_axis: Num,
    eccentricity: Num,
    inclination: Num,
    longitude_of_ascending_node: Num,
    argument_of_perihelion: Num,
    orbital_period: Num,
    mean_anomaly_at_epoch: Num,
}

impl OrbitalElements {
    /// A flat orbit: the orientation angles and the epoch mean anomaly
    /// start at zero, so the body sits at perihelion on +x at t = 0.
    pub fn new(semi_major_axis: Num, eccentricity: Num, orbital_period: Num) -> Result<Self> {
        Ok(Self {
            semi_major_axis: validation::positive("semi-major axis", semi_major_axis)?,
            eccentricity: validation::eccentricity(eccentricity)?,
            inclination: 0.0,
            longitude_of_ascending_node: 0.0,
            argument_of_perihelion: 0.0,
            orbital_period: validation::positive("orbital period", orbital_period)?,
            mean_anomaly_at_epoch: 0.0,
        })
    }

    /// Sets the orbital plane orientation, all in radians.
    pub fn with_orientation(
        mut self,
        inclination: Num,
        longitude_of_ascending_node: Num,
        argument_of_perihelion: Num,
    ) -> Result<Self> {
        self.inclination = validation::finite("inclination", inclination)?;
        self.longitude_of_ascending_node = validation::finite(
            "longitude of ascending node",
            longitude_of_ascending_node,
        )?;
        self.argument_of_perihelion =
            validation::finite("argument of perihelion", argument_of_perihelion)?;

        Ok(self)
    }

    /// Sets the body's mean anomaly at the time origin, in degrees.
    pub fn with_mean_anomaly_at_epoch(mut self, degrees: Num) -> Result<Self> {
        self.mean_anomaly_at_epoch = validation::finite("mean anomaly at epoch", degrees)?;

        Ok(self)
    }

    pub fn semi_major_axis(&self) -> Num {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    pub fn inclination(&self) -> Num {
        self.inclination
    }

    pub fn longitude_of_ascending_node(&self) -> Num {
        self.longitude_of_ascending_node
    }

    pub fn argument_of_perihelion(&self) -> Num {
        self.argument_of_perihelion
    }

    pub fn orbital_period(&self) -> Num {
        self.orbital_period
    }

    /// In degrees.
    pub fn mean_anomaly_at_epoch(&self) -> Num {
        self.mean_anomaly_at_epoch
    }

    /// https://en.wikipedia.org/wiki/Mean_motion
    pub fn mean_motion(&self) -> Num {
        TWO_PI / self.orbital_period
    }

    /// Mean anomaly at `time` days past the epoch, offset by the epoch
    /// anomaly. Grows without bound, like [`astro::mean_anomaly`].
    pub fn mean_anomaly_at(&self, time: Num) -> Result<Num> {
        let time = validation::finite("time", time)?;

        Ok(self.mean_anomaly_at_epoch.to_radians() + self.mean_motion() * time)
    }

    /// Eccentric anomaly at `time` days, via the Kepler solver.
    pub fn eccentric_anomaly_at(&self, time: Num) -> Result<Num> {
        let M = self.mean_anomaly_at(time)?;

        elliptic::solve_keplers_equation(M, self.eccentricity)
    }

    /// True anomaly at `time` days, in [0, 2π).
    pub fn true_anomaly_at(&self, time: Num) -> Result<Num> {
        let E = self.eccentric_anomaly_at(time)?;

        elliptic::true_anomaly(E, self.eccentricity)
    }

    /// Position in the shared ecliptic frame at true anomaly `v`.
    pub fn position_at_true_anomaly(&self, v: Num) -> Result<Vec3> {
        let plane = elliptic::orbital_position(self.semi_major_axis, self.eccentricity, v)?;

        astro::perifocal_to_ecliptic(
            plane,
            self.inclination,
            self.longitude_of_ascending_node,
            self.argument_of_perihelion,
        )
    }

    /// Position in the shared ecliptic frame at `time` days past the
    /// epoch.
    ///
    /// The once-per-body-per-frame entry point: mean anomaly, Kepler
    /// solve, true anomaly, plane position, frame rotation.
    pub fn position_at(&self, time: Num) -> Result<Vec3> {
        let v = self.true_anomaly_at(time)?;

        self.position_at_true_anomaly(v)
    }

    /// Distance from the Sun at `time` days, in AU.
    pub fn distance_at(&self, time: Num) -> Result<Num> {
        Ok(self.position_at(time)?.length())
    }

    /// Vis-viva speed at distance `radius` from the focus.
    pub fn speed_at_radius(&self, radius: Num) -> Result<Num> {
        elliptic::vis_viva_speed(self.semi_major_axis, radius, self.orbital_period)
    }

    /// Vis-viva speed at `time` days past the epoch.
    pub fn speed_at(&self, time: Num) -> Result<Num> {
        let radius = self.distance_at(time)?;

        self.speed_at_radius(radius)
    }

    /// Fraction of the orbit completed at `time` days, in [0, 1).
    pub fn phase_at(&self, time: Num) -> Result<Num> {
        astro::orbital_phase(time, self.orbital_period)
    }

    /// Perihelion and aphelion distances.
    pub fn apsides(&self) -> Apsides {
        Apsides {
            perihelion: self.semi_major_axis * (1.0 - self.eccentricity),
            aphelion: self.semi_major_axis * (1.0 + self.eccentricity),
        }
    }

    /// Samples one revolution for orbit-curve drawing.
    ///
    /// Returns `segments + 1` reference-frame positions over a uniform
    /// true-anomaly sweep, the last repeating the first so the polyline
    /// closes.
    pub fn orbit_path(&self, segments: usize) -> Result<Vec<Vec3>> {
        let segments = segments.max(1);
        let step = TWO_PI / segments as Num;

        (0..=segments)
            .map(|i| self.position_at_true_anomaly(i as Num * step))
            .collect()
    }
}
