#![allow(non_snake_case)]

//! Orbital mechanics kernel for solar system visualizations.
//!
//! The crate evaluates the instantaneous position of a body on an elliptical
//! heliocentric orbit from its keplerian elements, together with the derived
//! scalars a display layer consumes per frame: vis-viva speed, orbital phase
//! and apsis distances.
//!
//! Lengths are astronomical units, times are days and angles are radians,
//! except the epoch mean anomaly which is given in degrees.
//!
//! ```
//! use heliocentric::OrbitalElements;
//!
//! // A circular one-AU orbit with a 100 day period
//! let orbit = OrbitalElements::new(1.0, 0.0, 100.0)?;
//!
//! // A quarter period in, the body is a quarter revolution along
//! let position = orbit.position_at(25.0)?;
//! assert!((position.length() - 1.0).abs() < 1e-9);
//! # Ok::<(), heliocentric::Error>(())
//! ```
//!
//! Every operation is a pure function of its arguments and all iteration is
//! bounded, so calls are independently safe across threads.

pub mod astro;
pub mod constants;
pub mod math;
pub mod presets;

mod elements;
mod error;
mod validation;

pub use astro::elliptic::Apsides;
pub use constants::{AU, PI, TWO_PI};
pub use elements::OrbitalElements;
pub use error::{Error, Result};

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(feature = "f64")]
pub type Num = f64;

#[cfg(feature = "f32")]
pub use glam::{vec3, Mat3, Vec3};

#[cfg(feature = "f64")]
pub use glam::{dvec3 as vec3, DMat3 as Mat3, DVec3 as Vec3};
