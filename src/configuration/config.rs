//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 1.0          # gravitational constant
//!   dt: 0.001       # fixed step size
//!   steps: 20000    # number of integration steps
//!
//! bodies:
//!   - x: [ 0.97000436, -0.24308753 ]
//!     v: [ 0.46620368, 0.43236573 ]
//!     m: 1.0
//!   - x: [ -0.97000436, 0.24308753 ]
//!     v: [ 0.46620368, 0.43236573 ]
//!     m: 1.0
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; see `simulation::scenario`.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,       // gravitational constant
    pub dt: f64,      // fixed time step size, nonzero
    pub steps: usize, // number of integration steps
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in simulation units
    pub v: [f64; 2], // initial velocity in simulation units per time unit
    pub m: f64,      // mass of the body, positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
