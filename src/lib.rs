pub mod simulation;
pub mod configuration;

pub use simulation::states::{NVec2, State};
pub use simulation::params::Parameters;
pub use simulation::error::SimulationError;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{leapfrog_step, run};
pub use simulation::trajectory::Trajectory;
pub use simulation::diagnostics::{total_angular_momentum, total_energy, DiagnosticSeries};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
