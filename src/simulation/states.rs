//! Core state types for the gravity sandbox.
//!
//! Defines the simulated entities:
//! - `Body`  – one gravitating body (position, velocity, accumulated force,
//!   clamped radius and the mass derived from it)
//! - `World` – the live collection of bodies and the elapsed simulation time
//!
//! Radius and mass are private: `set_radius` is the only way to change them,
//! so the clamp and the mass recompute can never be bypassed.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Smallest radius a body can have. Assignments below this are raised to it.
pub const MIN_RADIUS: f64 = 10.0;
/// Largest radius a body can have. Assignments above this are lowered to it.
pub const MAX_RADIUS: f64 = 200.0;
/// Density used when a body is created without an explicit one.
pub const DEFAULT_DENSITY: f64 = 0.005;
/// Display color for bodies (rgb, 0..1).
pub const BODY_COLOR: [f32; 3] = [0.0, 1.0, 50.0 / 255.0];

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub force: NVec2, // accumulated over one tick, zeroed at tick end
    pub color: [f32; 3],
    density: f64, // fixed at creation
    radius: f64,  // always within [MIN_RADIUS, MAX_RADIUS]
    mass: f64,    // derived from density and radius
}

impl Body {
    /// Create a body at `position`. `radius` is clamped into
    /// `[MIN_RADIUS, MAX_RADIUS]` (a radius of 0 becomes `MIN_RADIUS`) and
    /// the mass is derived from the clamped value.
    pub fn new(position: NVec2, radius: f64, density: f64) -> Self {
        let radius = clamp_radius(radius);
        Body {
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            force: NVec2::zeros(),
            density,
            color: BODY_COLOR,
            radius,
            mass: mass_from_radius(density, radius),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Clamp `r` into `[MIN_RADIUS, MAX_RADIUS]` and recompute the mass from
    /// the clamped value. Idempotent, never fails.
    pub fn set_radius(&mut self, r: f64) {
        self.radius = clamp_radius(r);
        self.mass = mass_from_radius(self.density, self.radius);
    }

    /// Assign the velocity from a raw gesture vector: the vector is scaled by
    /// `ratio` (arrow pixels to velocity units) and stored as-is.
    pub fn set_velocity_from_vector(&mut self, v: NVec2, ratio: f64) {
        self.velocity = v * ratio;
    }
}

fn clamp_radius(r: f64) -> f64 {
    r.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Mass of a body of the given density and radius, using the spherical
/// volume `4/3 * pi * r^3`.
fn mass_from_radius(density: f64, radius: f64) -> f64 {
    density * (4.0 / 3.0 * std::f64::consts::PI * radius.powi(3))
}

/// The live collection of bodies. Membership changes only through `insert`
/// and `clear`, so an index handed out by `insert` stays valid until the
/// next `clear`.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub bodies: Vec<Body>,
    pub t: f64, // elapsed simulation time
}

impl World {
    pub fn new() -> Self {
        World {
            bodies: Vec::new(),
            t: 0.0,
        }
    }

    /// Add a body and return its index.
    pub fn insert(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove every body. Elapsed time is kept.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
