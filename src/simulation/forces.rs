//! Force contributors for the gravity engine.
//!
//! Defines the `Force` trait, the `ForceSet` that sums contributions from
//! every registered term, and the direct pairwise `MutualGravity` law.

use crate::simulation::states::{NVec2, World};

/// Collection of force terms. Each term implements [`Force`] and their
/// contributions are summed into a single force vector per body.
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all bodies in `world`.
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, world: &World, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(world, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on a [`World`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Force {
    fn force(&self, world: &World, out: &mut [NVec2]);
}

/// Direct mutual gravity between every pair of bodies, G = 1.
///
/// Pairs whose separation is at or below `eps` are skipped entirely; that
/// pair contributes no force for the tick instead of producing a division
/// by zero.
pub struct MutualGravity {
    pub eps: f64, // minimum separation for a pair to interact
}

impl Force for MutualGravity {
    fn force(&self, world: &World, out: &mut [NVec2]) {
        let n = world.bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j, so every pair
        // contributes exactly once per tick.
        for i in 0..n {
            let bi = &world.bodies[i];
            let xi = bi.position;
            let mi = bi.mass();

            for j in (i + 1)..n {
                let bj = &world.bodies[j];

                // Displacement from i to j: i is pulled along +delta,
                // j along -delta.
                let delta = bj.position - xi;
                let dist = delta.norm();

                // Degenerate-geometry guard: coincident (or nearly
                // coincident) bodies exchange no force this tick.
                if dist <= self.eps {
                    continue;
                }

                // delta is not normalized, so dividing by dist^3 folds the
                // normalization into the inverse-square law in one step:
                //   F = m_i * m_j * delta / |delta|^3
                let factor = mi * bj.mass() / dist.powi(3);

                // Equal magnitude, opposite sign (Newton's third law).
                out[i] += delta * factor;
                out[j] -= delta * factor;
            }
        }
    }
}
