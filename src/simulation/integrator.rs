//! Fixed-step time integration for the gravity world.
//!
//! One call to [`euler_step`] is one tick: forces are accumulated once per
//! unordered pair, accelerations derived, positions and velocities advanced
//! by the fixed step `params.dt`, and the force accumulators zeroed.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, World};

/// Advance the world by one tick of `params.dt`.
///
/// Update formulas, applied to every body:
/// ```text
/// a = F / m
/// x += v * dt + 0.5 * a * dt
/// v += a * dt
/// ```
/// The acceleration term in the position update is linear in `dt`, not
/// `dt^2`. That is the contracted behavior of this engine; changing it to
/// the standard semi-implicit form changes the dynamics and is out of scope
/// here (see DESIGN.md).
///
/// Never fails: the only degenerate case (coincident bodies) is skipped
/// inside the force law.
pub fn euler_step(world: &mut World, forces: &ForceSet, params: &Parameters) {
    let n = world.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;

    // Accumulate forces for this tick, once per unordered pair.
    let mut accum = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*world, &mut accum);

    for (b, f) in world.bodies.iter_mut().zip(accum.iter()) {
        b.force = *f;
        b.acceleration = b.force / b.mass();

        b.position += b.velocity * dt + 0.5 * b.acceleration * dt;
        b.velocity += b.acceleration * dt;

        // Reset the accumulator for the next tick.
        b.force = NVec2::zeros();
    }

    world.t += dt;
}
