//! Heliocentric orbital elements for the major solar system bodies.
//!
//! Semi-major axes and eccentricities follow the NASA fact sheet values
//! used by the visualization's data pipeline; orientation angles are
//! J2000 mean elements, periods are in days. Epoch mean anomalies are
//! left at the zero default, so every body starts at perihelion.

use crate::elements::OrbitalElements;
use crate::Num;

fn build(a: Num, e: Num, i_deg: Num, Ω_deg: Num, ω_deg: Num, period: Num) -> OrbitalElements {
    OrbitalElements::new(a, e, period)
        .and_then(|elements| {
            elements.with_orientation(
                i_deg.to_radians(),
                Ω_deg.to_radians(),
                ω_deg.to_radians(),
            )
        })
        .expect("preset element tables are in-domain")
}

pub fn mercury() -> OrbitalElements {
    build(0.387098, 0.205630, 7.005, 48.331, 29.124, 87.969)
}

pub fn venus() -> OrbitalElements {
    build(0.723332, 0.006772, 3.39458, 76.680, 54.884, 224.701)
}

pub fn earth() -> OrbitalElements {
    build(1.000001018, 0.0167086, 0.00005, -11.26064, 114.20783, 365.256)
}

pub fn mars() -> OrbitalElements {
    build(1.523679, 0.0934, 1.850, 49.558, 286.502, 686.980)
}

pub fn jupiter() -> OrbitalElements {
    build(5.2044, 0.0489, 1.303, 100.464, 273.867, 4332.59)
}

pub fn saturn() -> OrbitalElements {
    build(9.5826, 0.0565, 2.485, 113.665, 339.392, 10759.22)
}

pub fn uranus() -> OrbitalElements {
    build(19.2184, 0.046381, 0.773, 74.006, 96.998857, 30688.5)
}

pub fn neptune() -> OrbitalElements {
    build(30.07, 0.0113, 1.767975, 131.784, 276.336, 60182.0)
}

/// Kept for the visualization even after the 2006 demotion.
pub fn pluto() -> OrbitalElements {
    build(39.482, 0.2488, 17.16, 110.299, 113.834, 90560.0)
}
