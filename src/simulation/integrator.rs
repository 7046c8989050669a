//! Fixed-step leapfrog (velocity-Verlet) integrator
//!
//! The kick-drift-kick update is symplectic: it bounds long-term drift of
//! energy-like invariants instead of letting it grow the way explicit Euler
//! would. The exact update order matters and is kept identical across the
//! whole run:
//!
//! 1. v_n+1/2 = v_n + (dt/2) * a_n          (half-kick from current positions)
//! 2. x_n+1   = x_n + dt * v_n+1/2          (full drift)
//! 3. a_n+1   = forces(x_n+1)               (recompute at new positions)
//! 4. v_n+1   = v_n+1/2 + (dt/2) * a_n+1    (second half-kick)
//!
//! The closing force evaluation of step n doubles as the opening
//! acceleration of step n+1, so each step costs two evaluations and the
//! initial acceleration is computed once before the loop.

use crate::simulation::error::SimulationError;
use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec2, State};
use crate::simulation::trajectory::Trajectory;

/// Advance `state` by one leapfrog step in place.
///
/// `accel` must hold the accelerations at the incoming positions; on return
/// it holds the accelerations at the updated positions, ready for the next
/// step. Exposed for callers that want to drive the loop themselves; most
/// should use [`run`].
pub fn leapfrog_step(
    state: &mut State,
    masses: &[f64],
    forces: &AccelSet,
    dt: f64,
    accel: &mut [NVec2],
) {
    let half_dt = 0.5 * dt;

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (v, a) in state.v.iter_mut().zip(accel.iter()) {
        *v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    // (borrow split: positions advance using the half-kicked velocities)
    for (x, v) in state.x.iter_mut().zip(state.v.iter()) {
        *x += dt * *v;
    }

    // a_n+1 from x_n+1
    forces.accumulate_accels(state, masses, accel);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (v, a) in state.v.iter_mut().zip(accel.iter()) {
        *v += half_dt * *a;
    }
}

/// Run a fixed-step leapfrog integration from `initial`.
///
/// Performs `steps` applications of the kick-drift-kick update and records
/// the state after each completed step, so the returned trajectory holds
/// exactly `steps` states and index `i` sits at time `(i + 1) * dt`. The
/// caller's initial state is never modified.
///
/// Deterministic: identical inputs produce bit-identical trajectories.
/// Negative `dt` integrates backward in time.
///
/// # Errors
///
/// Rejects the configuration before any stepping if `steps` is zero, `dt`
/// is zero, the position/velocity/mass lengths disagree, or any mass is not
/// positive. No partial trajectory is ever returned.
pub fn run(
    initial: &State,
    masses: &[f64],
    forces: &AccelSet,
    dt: f64,
    steps: usize,
) -> Result<Trajectory, SimulationError> {
    if steps == 0 {
        return Err(SimulationError::ZeroStepCount);
    }
    if dt == 0.0 {
        return Err(SimulationError::ZeroTimeStep);
    }
    if initial.x.len() != initial.v.len() || initial.x.len() != masses.len() {
        return Err(SimulationError::LengthMismatch {
            positions: initial.x.len(),
            velocities: initial.v.len(),
            masses: masses.len(),
        });
    }
    if let Some((index, &mass)) = masses.iter().enumerate().find(|(_, &m)| m <= 0.0) {
        return Err(SimulationError::NonPositiveMass { index, mass });
    }

    let n = initial.len();
    let mut state = initial.clone();

    // a_0 from x_0, reused across steps afterwards
    let mut accel = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&state, masses, &mut accel);

    let mut trajectory = Trajectory::with_capacity(steps, dt);
    for _ in 0..steps {
        leapfrog_step(&mut state, masses, forces, dt, &mut accel);
        trajectory.push(state.clone());
    }

    Ok(trajectory)
}
