//! Bodies and the preset tuples that describe them.

use euclid::default::{Point2D, Vector2D};

use crate::path::PathTrace;

/// Smallest mass a body may hold. Slider input can drive the value toward
/// zero; the model floors it here so the radius and force math stay defined.
pub const MIN_MASS: f64 = 0.1;

/// Radius as a pure function of mass. Recomputed on every mass change.
pub fn mass_to_radius(mass: f64) -> f64 {
    mass.cbrt() + 5.0
}

/// Everything needed to (re)create one body: the preset tuple, also used as
/// the baseline that `Body::reset` restores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodySpec {
    pub mass: f64,
    pub position: Point2D<f64>,
    pub velocity: Vector2D<f64>,
    pub active: bool,
}

impl BodySpec {
    pub fn new(mass: f64, position: Point2D<f64>, velocity: Vector2D<f64>) -> Self {
        BodySpec {
            mass,
            position,
            velocity,
            active: true,
        }
    }
}

/// A point mass with kinematic state, a trajectory trace, and the flags the
/// surrounding layers care about.
///
/// Kinematic fields are plain public state. The engine writes them during its
/// step, drag handlers write them between steps, and nothing in here caches
/// derived values across those writes. Mass is the one guarded field, since
/// the radius must follow it.
#[derive(Debug)]
pub struct Body {
    mass: f64,
    radius: f64,
    pub position: Point2D<f64>,
    pub velocity: Vector2D<f64>,
    pub acceleration: Vector2D<f64>,
    pub force: Vector2D<f64>,
    /// Whether this body participates in dynamics at all.
    pub active: bool,
    /// Set by the engine when this body overlapped another one.
    pub collided: bool,
    // Drag flags. Owned by the input layer, only stored here.
    pub user_controlled_position: bool,
    pub user_controlled_velocity: bool,
    pub user_controlled_mass: bool,
    baseline: BodySpec,
    path: PathTrace,
}

impl Body {
    pub fn new(spec: BodySpec) -> Self {
        let mass = spec.mass.max(MIN_MASS);
        let mut body = Body {
            mass,
            radius: mass_to_radius(mass),
            position: spec.position,
            velocity: spec.velocity,
            acceleration: Vector2D::zero(),
            force: Vector2D::zero(),
            active: spec.active,
            collided: false,
            user_controlled_position: false,
            user_controlled_velocity: false,
            user_controlled_mass: false,
            baseline: spec,
            path: PathTrace::new(),
        };
        // The first point goes in twice so renderers always have a segment.
        body.path.seed(spec.position);
        body
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Set the mass and recompute the radius from it.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass.max(MIN_MASS);
        self.radius = mass_to_radius(self.mass);
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Record the current position on the trace.
    pub fn add_path_point(&mut self) {
        self.path.add_point(self.position);
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    pub fn path(&self) -> &PathTrace {
        &self.path
    }

    /// The current state as a preset tuple.
    pub fn spec(&self) -> BodySpec {
        BodySpec {
            mass: self.mass,
            position: self.position,
            velocity: self.velocity,
            active: self.active,
        }
    }

    /// Make the current state the one `reset` returns to.
    pub fn save_baseline(&mut self) {
        self.baseline = self.spec();
    }

    /// Restore the baseline state, drop the collision flag, and restart the
    /// trace at the baseline position.
    pub fn reset(&mut self) {
        let baseline = self.baseline;
        self.set_mass(baseline.mass);
        self.position = baseline.position;
        self.velocity = baseline.velocity;
        self.acceleration = Vector2D::zero();
        self.force = Vector2D::zero();
        self.active = baseline.active;
        self.collided = false;
        self.path.seed(baseline.position);
    }
}
