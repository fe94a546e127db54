//! Read-only render view of the scenario.
//!
//! `render_snapshot` flattens the live state into plain data the renderer
//! consumes once per frame: every body's position/radius/color, the aiming
//! arrow if one is being dragged, and the camera offset and zoom. Nothing in
//! here can mutate simulation state.

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct BodySprite {
    pub position: NVec2, // world space; the renderer adds the camera offset
    pub radius: f64,
    pub color: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct ArrowSprite {
    pub start: NVec2,
    pub end: NVec2,
    pub color: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct CameraView {
    pub offset: NVec2,
    pub zoom_percent: f64,
    pub zoom_scale: f64, // applied to displayed radii only
}

#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub bodies: Vec<BodySprite>,
    pub arrow: Option<ArrowSprite>,
    pub camera: CameraView,
}

pub fn render_snapshot(scenario: &Scenario) -> RenderSnapshot {
    let bodies = scenario
        .world
        .bodies
        .iter()
        .map(|b| BodySprite {
            position: b.position,
            radius: b.radius(),
            color: b.color,
        })
        .collect();

    let arrow = scenario.controller.arrow().map(|a| ArrowSprite {
        start: a.start,
        end: a.end,
        color: a.color,
    });

    RenderSnapshot {
        bodies,
        arrow,
        camera: CameraView {
            offset: scenario.camera.offset,
            zoom_percent: scenario.camera.zoom_percent(),
            zoom_scale: scenario.camera.zoom_scale(),
        },
    }
}
