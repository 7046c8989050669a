//! Conserved-quantity diagnostics
//!
//! Total mechanical energy and total angular momentum of a [`State`]. Both
//! are pure functions of a state plus masses: they accept states from any
//! source (this crate's integrator, a reference solver, hand-built test
//! fixtures) and never feed back into the integration.

use crate::simulation::states::State;
use crate::simulation::trajectory::Trajectory;

/// Total mechanical energy: kinetic plus pairwise gravitational potential.
///
/// Kinetic term `0.5 * sum m_i |v_i|^2`; potential term
/// `-g * sum_{i<j} m_i m_j / |x_i - x_j|`, each unordered pair counted
/// once, negative by the attractive-potential convention.
pub fn total_energy(state: &State, masses: &[f64], g: f64) -> f64 {
    let n = state.len();

    let kinetic: f64 = (0..n)
        .map(|i| 0.5 * masses[i] * state.v[i].norm_squared())
        .sum();

    let mut potential = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (state.x[i] - state.x[j]).norm();
            potential -= g * masses[i] * masses[j] / r;
        }
    }

    kinetic + potential
}

/// Total angular momentum about the origin (2D scalar):
/// `sum m_i * (x_i.x * v_i.y - x_i.y * v_i.x)`.
pub fn total_angular_momentum(state: &State, masses: &[f64]) -> f64 {
    (0..state.len())
        .map(|i| masses[i] * (state.x[i].x * state.v[i].y - state.x[i].y * state.v[i].x))
        .sum()
}

/// Per-step energy and angular momentum over a recorded trajectory.
///
/// Derived data: built after (or independent of) a run, never mutated once
/// produced, and without any effect on the integration itself.
#[derive(Debug, Clone)]
pub struct DiagnosticSeries {
    pub energy: Vec<f64>,
    pub angular_momentum: Vec<f64>,
}

impl DiagnosticSeries {
    /// Evaluate both diagnostics over every recorded state.
    pub fn from_trajectory(trajectory: &Trajectory, masses: &[f64], g: f64) -> Self {
        let mut energy = Vec::with_capacity(trajectory.len());
        let mut angular_momentum = Vec::with_capacity(trajectory.len());

        for state in trajectory.states() {
            energy.push(total_energy(state, masses, g));
            angular_momentum.push(total_angular_momentum(state, masses));
        }

        Self {
            energy,
            angular_momentum,
        }
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// |E_last - E_first| / |E_first|, the usual drift figure for judging
    /// integrator quality over a run. Zero for an empty series.
    pub fn relative_energy_drift(&self) -> f64 {
        match (self.energy.first(), self.energy.last()) {
            (Some(first), Some(last)) => (last - first).abs() / first.abs(),
            _ => 0.0,
        }
    }
}
