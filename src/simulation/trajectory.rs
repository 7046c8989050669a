//! Time history of states produced by a run
//!
//! One [`State`] is recorded per completed integration step, strictly after
//! the second half-kick, so index `i` corresponds to simulated time
//! `(i + 1) * dt`. The buffer is append-only while the run is in progress
//! and read-only once handed to the caller.

use crate::simulation::states::State;

#[derive(Debug, Clone)]
pub struct Trajectory {
    states: Vec<State>,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn with_capacity(steps: usize, dt: f64) -> Self {
        Self {
            states: Vec::with_capacity(steps),
            dt,
        }
    }

    pub(crate) fn push(&mut self, state: State) {
        self.states.push(state);
    }

    /// Step size used to produce this trajectory.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State recorded after step `i` (post second half-kick).
    pub fn state(&self, i: usize) -> &State {
        &self.states[i]
    }

    /// Simulated time of the state at index `i`.
    pub fn time(&self, i: usize) -> f64 {
        (i as f64 + 1.0) * self.dt
    }

    /// State after the last step, if any steps were taken.
    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// All recorded states in step order.
    pub fn states(&self) -> &[State] {
        &self.states
    }
}
