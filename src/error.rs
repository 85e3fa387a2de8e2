use thiserror::Error;

use crate::Num;

/// Domain errors reported by every public entry point.
///
/// Only invalid inputs surface as errors. Solver non-convergence is
/// handled internally by escalating to bisection and is never visible
/// to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Only elliptical orbits are supported.
    #[error("eccentricity {0} is outside the supported range [0, 1)")]
    Eccentricity(Num),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: Num },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: Num },
}

pub type Result<T> = std::result::Result<T, Error>;
