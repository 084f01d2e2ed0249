//! Mass-weighted aggregate of the system.

use euclid::default::{Point2D, Vector2D};

use crate::bodies::Body;

/// The mass-weighted average position and velocity of the active bodies.
///
/// Not kept in sync automatically: callers decide when a recompute should be
/// visible and trigger `update` themselves.
#[derive(Debug, Clone)]
pub struct CenterOfMass {
    pub position: Point2D<f64>,
    pub velocity: Vector2D<f64>,
    pub total_mass: f64,
}

impl CenterOfMass {
    pub fn new() -> Self {
        CenterOfMass {
            position: Point2D::zero(),
            velocity: Vector2D::zero(),
            total_mass: 0.0,
        }
    }

    /// Recompute from the active bodies. Returns `false` and zeroes the state
    /// when there is no mass to average over; the division below never runs
    /// against a zero total.
    pub fn update(&mut self, bodies: &[Body]) -> bool {
        let mut total = 0.0;
        for body in bodies.iter().filter(|b| b.active) {
            total += body.mass();
        }
        if total == 0.0 {
            self.position = Point2D::zero();
            self.velocity = Vector2D::zero();
            self.total_mass = 0.0;
            return false;
        }

        let mut position = Vector2D::zero();
        let mut velocity = Vector2D::zero();
        for body in bodies.iter().filter(|b| b.active) {
            let weight = body.mass() / total;
            position += body.position.to_vector() * weight;
            velocity += body.velocity * weight;
        }
        self.position = position.to_point();
        self.velocity = velocity;
        self.total_mass = total;
        true
    }

    /// Whether the last `update` had any mass to work with.
    pub fn is_defined(&self) -> bool {
        self.total_mass > 0.0
    }
}

impl Default for CenterOfMass {
    fn default() -> Self {
        Self::new()
    }
}
