//! Force / acceleration contributors for the integrator
//!
//! Defines the acceleration trait and the direct pairwise Newtonian
//! gravity term. Terms are collected in an [`AccelSet`] and their
//! contributions summed into a single acceleration vector per body.

use crate::simulation::states::{NVec2, State};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `state`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, state: &State, masses: &[f64], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(state, masses, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a [`State`].
/// Implementations add their contribution into `out[i]` for each body.
/// Pure with respect to the state: no internal mutability.
pub trait Acceleration {
    fn acceleration(&self, state: &State, masses: &[f64], out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity, no softening.
///
/// Two bodies at the same position divide by zero and produce non-finite
/// accelerations; that singularity propagates into the resulting states
/// rather than being masked.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, state: &State, masses: &[f64], out: &mut [NVec2]) {
        let n = state.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = state.x[i]; // position of body i
            let mi = masses[i];  // mass of body i

            for j in (i + 1)..n {
                let xj = state.x[j]; // position of body j
                let mj = masses[j];  // mass of body j

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;

                // 1 / |r|^3, the distance factor of a = G m r / |r|^3
                let inv_r = r.norm().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r|^3
                let coef = self.g * inv_r3;

                // Newton's law, equal and opposite:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
