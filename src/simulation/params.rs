//! Numerical parameters for the simulation.
//!
//! `Parameters` holds runtime settings:
//! - the fixed integration step `dt`,
//! - the degenerate-pair distance guard `eps`,
//! - defaults for interactively created bodies,
//! - the gesture tunables (arrow length cap, arrow-to-velocity ratio)
//!
//! `Default` yields the reference constants; a scenario file can override
//! any subset of them.

use crate::simulation::states::DEFAULT_DENSITY;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,  // fixed simulation step, independent of frame time
    pub eps: f64, // pairs closer than this contribute no force
    pub default_density: f64, // density of interactively created bodies
    pub arrow_to_vel_ratio: f64, // velocity units per pixel of arrow length
    pub arrow_max_length: f64,   // cap on the aiming arrow, in pixels
    pub max_distance: f64, // advisory bound on distance from origin, not enforced
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            dt: 0.1,
            eps: 1e-9,
            default_density: DEFAULT_DENSITY,
            arrow_to_vel_ratio: 0.025,
            arrow_max_length: 500.0,
            max_distance: 3000.0,
        }
    }
}
