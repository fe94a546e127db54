//! The aiming arrow drawn while a new body's velocity is chosen.
//!
//! An arrow is anchored at the body being created; its end follows the
//! pointer, capped at a maximum length. The arrow's length and angle give
//! the velocity vector assigned to the body on commit.

use crate::simulation::states::NVec2;

/// Display color for the aiming arrow (rgb, 0..1).
pub const ARROW_COLOR: [f32; 3] = [50.0 / 255.0, 130.0 / 255.0, 200.0 / 255.0];

#[derive(Debug, Clone)]
pub struct VelocityArrow {
    pub start: NVec2,
    pub end: NVec2,
    pub color: [f32; 3],
    length: f64,     // cached distance(start, end)
    max_length: f64, // cap applied on every end-point update
}

impl VelocityArrow {
    /// Anchor a new arrow at `start`. The end begins one pixel off the
    /// anchor on both axes, so the arrow has a direction before the first
    /// pointer move arrives.
    pub fn new(start: NVec2, max_length: f64) -> Self {
        let end = start + NVec2::new(1.0, 1.0);
        VelocityArrow {
            start,
            end,
            color: ARROW_COLOR,
            length: (end - start).norm(),
            max_length,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Move the arrow end to `p`, pulling it back onto the circle of radius
    /// `max_length` around the anchor if the pointer travelled further.
    pub fn set_end(&mut self, p: NVec2) {
        self.end = p;
        let length = (self.end - self.start).norm();
        if length > self.max_length {
            self.end = self.start + (self.end - self.start) / length * self.max_length;
        }
        self.length = (self.end - self.start).norm();
    }

    /// The velocity vector encoded by the arrow: its length along the angle
    /// `atan2(start.y - end.y, end.x - start.x)`. Start/end are screen-space
    /// points (y grows downward), so the vertical delta is flipped inside
    /// the atan2 to produce a conventional mathematical angle.
    pub fn velocity_component(&self) -> NVec2 {
        let angle = (self.start.y - self.end.y).atan2(self.end.x - self.start.x);
        NVec2::new(self.length * angle.cos(), self.length * angle.sin())
    }
}
