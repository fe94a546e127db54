//! Interactive body-creation state machine.
//!
//! Pointer events drive a three-stage sequence:
//!
//! - `Idle`            – pointer down places a minimum-radius body and
//!                       inserts it into the world
//! - `Sizing`          – dragging grows the radius to the drag distance;
//!                       releasing anchors the aiming arrow
//! - `AimingVelocity`  – moving aims the arrow (no button held); the next
//!                       pointer down commits the velocity and finishes
//!
//! A clear-all command is valid from any stage: it empties the world, drops
//! the in-progress candidate and arrow, and returns to `Idle`. That is the
//! only cancellation path; a candidate is never rolled back individually.
//!
//! While a sequence is in progress the simulation is paused, so the
//! half-built body does not fall toward its neighbours mid-gesture.

use crate::interaction::arrow::VelocityArrow;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Discrete input events consumed by the controller. Positions are in world
/// space; the input boundary subtracts the camera offset before delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(NVec2),
    PointerUp(NVec2),
    PointerMoved(NVec2),
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStage {
    Idle,
    Sizing,
    AimingVelocity,
}

pub struct SpawnController {
    stage: SpawnStage,
    candidate: Option<usize>, // index into the world, stable until clear
    arrow: Option<VelocityArrow>,
}

impl SpawnController {
    pub fn new() -> Self {
        SpawnController {
            stage: SpawnStage::Idle,
            candidate: None,
            arrow: None,
        }
    }

    pub fn stage(&self) -> SpawnStage {
        self.stage
    }

    /// The arrow currently being aimed, if the sequence is in that stage.
    pub fn arrow(&self) -> Option<&VelocityArrow> {
        self.arrow.as_ref()
    }

    /// True while a creation sequence is in progress; the frame loop skips
    /// integration ticks while this holds.
    pub fn simulation_paused(&self) -> bool {
        self.stage != SpawnStage::Idle
    }

    /// Feed one input event. Events that are not meaningful in the current
    /// stage are ignored without any state change.
    pub fn handle(&mut self, event: InputEvent, world: &mut World, params: &Parameters) {
        match event {
            InputEvent::PointerDown(p) => match self.stage {
                SpawnStage::Idle => self.place_body(p, world, params),
                SpawnStage::Sizing => {} // button already held, no-op
                SpawnStage::AimingVelocity => self.commit(world, params),
            },
            InputEvent::PointerMoved(p) => match self.stage {
                SpawnStage::Idle => {}
                SpawnStage::Sizing => self.size_body(p, world),
                SpawnStage::AimingVelocity => {
                    if let Some(arrow) = self.arrow.as_mut() {
                        arrow.set_end(p);
                    }
                }
            },
            InputEvent::PointerUp(p) => match self.stage {
                SpawnStage::Sizing => self.begin_aiming(p, world, params),
                _ => {}
            },
            InputEvent::ClearAll => self.clear_all(world),
        }
    }

    /// Empty the world and reset the sequence, whatever its stage.
    pub fn clear_all(&mut self, world: &mut World) {
        world.clear();
        self.candidate = None;
        self.arrow = None;
        self.stage = SpawnStage::Idle;
    }

    /// Idle + pointer down: insert a minimum-radius body at the pointer and
    /// start sizing it.
    fn place_body(&mut self, p: NVec2, world: &mut World, params: &Parameters) {
        if self.candidate.is_some() {
            return;
        }
        let body = Body::new(p, 0.0, params.default_density);
        self.candidate = Some(world.insert(body));
        self.stage = SpawnStage::Sizing;
    }

    /// Sizing + pointer move: the radius is the whole-pixel drag distance
    /// from the body's center, clamped by the body itself.
    fn size_body(&mut self, p: NVec2, world: &mut World) {
        let Some(body) = self.candidate.and_then(|i| world.bodies.get_mut(i)) else {
            return;
        };
        let dist = (p - body.position).norm();
        body.set_radius(dist.floor());
    }

    /// Sizing + pointer up: fix the radius from the release position and
    /// anchor the aiming arrow at the body.
    fn begin_aiming(&mut self, p: NVec2, world: &mut World, params: &Parameters) {
        let Some(body) = self.candidate.and_then(|i| world.bodies.get_mut(i)) else {
            return;
        };
        let dist = (p - body.position).norm();
        body.set_radius(dist.floor());
        self.arrow = Some(VelocityArrow::new(body.position, params.arrow_max_length));
        self.stage = SpawnStage::AimingVelocity;
    }

    /// AimingVelocity + pointer down: assign the arrow's velocity to the
    /// candidate and finish the sequence. The vertical component is negated
    /// on the way in (screen space grows downward, simulation space up).
    fn commit(&mut self, world: &mut World, params: &Parameters) {
        let (Some(idx), Some(arrow)) = (self.candidate, self.arrow.as_ref()) else {
            return;
        };
        if let Some(body) = world.bodies.get_mut(idx) {
            let vc = arrow.velocity_component();
            body.set_velocity_from_vector(NVec2::new(vc.x, -vc.y), params.arrow_to_vel_ratio);
        }
        self.candidate = None;
        self.arrow = None;
        self.stage = SpawnStage::Idle;
    }
}

impl Default for SpawnController {
    fn default() -> Self {
        SpawnController::new()
    }
}
