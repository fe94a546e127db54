//! Configuration types for loading a sandbox scenario from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and gesture tunables
//! - [`CameraConfig`]     – pan/zoom step sizes and the zoom range
//! - [`BodyConfig`]       – initial state for each pre-seeded body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! Every section is optional and defaults to the reference constants, so an
//! empty file (or no file at all) yields a runnable empty sandbox. Unknown
//! fields anywhere are a hard deserialization error: a misspelled option is
//! a programmer mistake and must surface immediately, not be dropped.
//!
//! # YAML format
//! ```yaml
//! parameters:
//!   dt: 0.1                 # fixed simulation step
//!   eps: 1.0e-9             # pair-distance guard
//!   default_density: 0.005
//!   arrow_to_vel_ratio: 0.025
//!   arrow_max_length: 500.0
//!   max_distance: 3000.0    # advisory only
//!
//! camera:
//!   move_step: 20.0
//!   zoom_step: 5.0
//!   zoom_min: -95.0
//!   zoom_max: 500.0
//!
//! bodies:
//!   - x: [ 860.0, 540.0 ]
//!     v: [ 0.0, 1.5 ]
//!     radius: 10.0
//!   - x: [ 1060.0, 540.0 ]
//!     v: [ 0.0, -1.5 ]
//!     radius: 10.0
//!     density: 0.01
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation (`simulation::scenario`).

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Numerical parameters and gesture tunables.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct ParametersConfig {
    pub dt: f64,                 // fixed step size
    pub eps: f64,                // minimum pair separation
    pub default_density: f64,    // density of interactively created bodies
    pub arrow_to_vel_ratio: f64, // velocity units per pixel of arrow
    pub arrow_max_length: f64,   // aiming arrow cap
    pub max_distance: f64,       // advisory distance bound
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        ParametersConfig {
            dt: p.dt,
            eps: p.eps,
            default_density: p.default_density,
            arrow_to_vel_ratio: p.arrow_to_vel_ratio,
            arrow_max_length: p.arrow_max_length,
            max_distance: p.max_distance,
        }
    }
}

/// Camera step sizes and zoom range.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct CameraConfig {
    pub move_step: f64, // pixels per pan command
    pub zoom_step: f64, // percent per zoom command
    pub zoom_min: f64,
    pub zoom_max: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            move_step: 20.0,
            zoom_step: 5.0,
            zoom_min: -95.0,
            zoom_max: 500.0,
        }
    }
}

/// Configuration for a single pre-seeded body's initial state.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position, world space
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, simulation units (no arrow scaling)
    pub radius: f64, // clamped on construction like any other body
    pub density: Option<f64>, // falls back to the default density
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub camera: CameraConfig,
    pub bodies: Vec<BodyConfig>,
}
