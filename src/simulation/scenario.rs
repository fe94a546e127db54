//! Build a fully-initialized runtime scenario from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - world state (`World`, with any pre-seeded bodies)
//! - the active force set (`ForceSet` with mutual gravity registered)
//! - the interactive spawn controller and the camera
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration, and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::interaction::camera::Camera;
use crate::interaction::controller::SpawnController;
use crate::simulation::forces::{ForceSet, MutualGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Bevy resource holding one fully-initialized interactive scenario.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub world: World,
    pub forces: ForceSet,
    pub controller: SpawnController,
    pub camera: Camera,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            eps: p_cfg.eps,
            default_density: p_cfg.default_density,
            arrow_to_vel_ratio: p_cfg.arrow_to_vel_ratio,
            arrow_max_length: p_cfg.arrow_max_length,
            max_distance: p_cfg.max_distance,
        };

        // Bodies: map BodyConfig -> runtime Body. Seeded velocities are
        // already simulation-space values, so they bypass the arrow ratio.
        let mut world = World::new();
        for bc in &cfg.bodies {
            world.insert(seed_body(bc, &parameters));
        }

        // Forces: construct a ForceSet and register mutual gravity
        let forces = ForceSet::new().with(MutualGravity { eps: parameters.eps });

        let c_cfg = cfg.camera;
        let camera = Camera::new(c_cfg.move_step, c_cfg.zoom_step, c_cfg.zoom_min, c_cfg.zoom_max);

        Self {
            parameters,
            world,
            forces,
            controller: SpawnController::new(),
            camera,
        }
    }
}

fn seed_body(bc: &BodyConfig, parameters: &Parameters) -> Body {
    let density = bc.density.unwrap_or(parameters.default_density);
    let mut body = Body::new(NVec2::new(bc.x[0], bc.x[1]), bc.radius, density);
    body.velocity = NVec2::new(bc.v[0], bc.v[1]);
    body
}
