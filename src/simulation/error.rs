//! Errors raised when a run is configured with invalid arguments.
//!
//! All variants are detected before any stepping occurs; a rejected run
//! produces no trajectory at all. Non-finite values arising from two bodies
//! at the same position are not represented here: that singularity is left
//! to propagate through the computed states.

use thiserror::Error;

/// Invalid run configuration, rejected before integration starts.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("step count must be positive, got 0")]
    ZeroStepCount,

    #[error("time step dt must be nonzero")]
    ZeroTimeStep,

    #[error(
        "positions, velocities, and masses must have equal lengths, \
         got {positions}, {velocities}, {masses}"
    )]
    LengthMismatch {
        positions: usize,
        velocities: usize,
        masses: usize,
    },

    #[error("mass of body {index} must be positive, got {mass}")]
    NonPositiveMass { index: usize, mass: f64 },
}
