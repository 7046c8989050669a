//! Numerical and physical parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g`,
//! - fixed integration step size `dt` (sign selects time direction),
//! - number of steps to take

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,       // gravitational constant
    pub dt: f64,      // fixed step size, nonzero
    pub steps: usize, // number of integration steps, positive
}
