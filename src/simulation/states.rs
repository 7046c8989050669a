//! Core state types for the three-body simulation.
//!
//! A [`State`] holds the positions and velocities of all bodies at one
//! instant, index-aligned with a separate masses slice. Masses are not part
//! of the state because they never change during a run; they are threaded
//! through the force, integrator, and diagnostic functions explicitly.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Positions and velocities of all bodies at a single instant.
///
/// Invariant: `x.len() == v.len()`, and both equal the length of the masses
/// slice the state is used with. The body count is fixed for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub x: Vec<NVec2>, // positions
    pub v: Vec<NVec2>, // velocities
}

impl State {
    /// Build a state from parallel position/velocity lists.
    pub fn new(x: Vec<NVec2>, v: Vec<NVec2>) -> Self {
        Self { x, v }
    }

    /// Number of bodies in this state (by position count).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
