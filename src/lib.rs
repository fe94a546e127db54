pub mod simulation;
pub mod interaction;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, World, NVec2, MIN_RADIUS, MAX_RADIUS, DEFAULT_DENSITY};
pub use simulation::params::Parameters;
pub use simulation::forces::{Force, ForceSet, MutualGravity};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, CameraConfig, BodyConfig};

pub use interaction::arrow::VelocityArrow;
pub use interaction::camera::{Camera, PanDirection, ZoomDirection};
pub use interaction::controller::{InputEvent, SpawnController, SpawnStage};

pub use visualization::snapshot::{render_snapshot, RenderSnapshot};
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step};
