//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - body masses
//! - initial system state (`State` at t = 0)
//! - active force set (`AccelSet` with Newtonian gravity)

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, State};

/// Fully-initialized runtime scenario: everything `run` needs.
pub struct Scenario {
    pub parameters: Parameters,
    pub masses: Vec<f64>,
    pub initial: State,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime state using nalgebra vectors
        let x: Vec<NVec2> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| NVec2::new(bc.x[0], bc.x[1]))
            .collect();
        let v: Vec<NVec2> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| NVec2::new(bc.v[0], bc.v[1]))
            .collect();
        let masses: Vec<f64> = cfg.bodies.iter().map(|bc| bc.m).collect();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            steps: p_cfg.steps,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            masses,
            initial: State::new(x, v),
            forces,
        }
    }

    /// The verified figure-eight three-body orbit: three unit masses chasing
    /// each other along a single figure-eight path, G = 1, dt = 0.001,
    /// 20000 steps. Standard reference condition for validating conservation.
    pub fn figure_eight() -> Self {
        let x = vec![
            NVec2::new(0.97000436, -0.24308753),
            NVec2::new(-0.97000436, 0.24308753),
            NVec2::new(0.0, 0.0),
        ];
        let v = vec![
            NVec2::new(0.4662036850, 0.4323657300),
            NVec2::new(0.4662036850, 0.4323657300),
            NVec2::new(-0.93240737, -0.86473146),
        ];
        let masses = vec![1.0, 1.0, 1.0];

        let parameters = Parameters {
            g: 1.0,
            dt: 0.001,
            steps: 20000,
        };
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            masses,
            initial: State::new(x, v),
            forces,
        }
    }
}
