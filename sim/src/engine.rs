//! The numerical integration engine.
//!
//! The system model is coded against the [`Engine`] trait so the integrator
//! can be swapped out (an analytic two-body engine would slot in the same
//! way). The one shipped variant, [`NumericalEngine`], does direct pairwise
//! Newtonian gravity and a velocity-Verlet step.

use euclid::default::Vector2D;

use crate::bodies::Body;
use crate::{ESCAPE_DISTANCE, GRAV_CONSTANT, MIN_SEPARATION};

/// Advances body state in place, once per tick.
pub trait Engine {
    /// Advance every participating body by `dt`. Forces are computed from a
    /// consistent snapshot of all positions at the start of each force pass,
    /// never from a half-updated mix.
    fn advance(&mut self, bodies: &mut [Body], dt: f64);

    /// Whether a body has wandered past the point the UI can return it from.
    fn is_body_escaped(&self, body: &Body) -> bool;
}

/// Direct-sum gravity with a symplectic velocity-Verlet step.
///
/// Nothing is cached between `advance` calls: the user may have dragged any
/// body's position, velocity, or mass since the last step, so both force
/// evaluations of a step happen inside that step.
pub struct NumericalEngine {
    pub gravity: f64,
    /// Floor on the pair separation used in the force denominator, so the
    /// inverse-square term cannot diverge in the step where two bodies land
    /// on top of each other.
    pub min_separation: f64,
    /// Distance from the origin beyond which a body counts as escaped.
    pub escape_distance: f64,
}

impl NumericalEngine {
    pub fn new() -> Self {
        NumericalEngine {
            gravity: GRAV_CONSTANT,
            min_separation: MIN_SEPARATION,
            escape_distance: ESCAPE_DISTANCE,
        }
    }

    /// Flag every overlapping pair. Flagged bodies stop participating in the
    /// dynamics; what happens to them next (explosion art, removal) is the
    /// surrounding system's business.
    fn check_collisions(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        for i in 0..n {
            if !participates(&bodies[i]) {
                continue;
            }
            for j in (i + 1)..n {
                if !participates(&bodies[j]) {
                    continue;
                }
                let r = bodies[j].position - bodies[i].position;
                let min_distance = bodies[i].radius() + bodies[j].radius();
                if r.square_length() < min_distance * min_distance {
                    bodies[i].collided = true;
                    bodies[j].collided = true;
                    tracing::debug!(i, j, "collision flagged");
                }
            }
        }
    }

    /// Sum pairwise gravitational accelerations into `out`, one slot per
    /// body. Inactive and collided bodies neither pull nor get pulled.
    fn accumulate_accels(&self, bodies: &[Body], out: &mut [Vector2D<f64>]) {
        for a in out.iter_mut() {
            *a = Vector2D::zero();
        }
        let floor2 = self.min_separation * self.min_separation;

        let n = bodies.len();
        for i in 0..n {
            if !participates(&bodies[i]) {
                continue;
            }
            for j in (i + 1)..n {
                if !participates(&bodies[j]) {
                    continue;
                }
                let r = bodies[j].position - bodies[i].position;
                let d2 = r.square_length().max(floor2);
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.gravity * inv_r3;

                // Equal and opposite, along the separation vector.
                out[i] += r * (coef * bodies[j].mass());
                out[j] -= r * (coef * bodies[i].mass());
            }
        }
    }
}

impl Default for NumericalEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn participates(body: &Body) -> bool {
    body.active && !body.collided
}

impl Engine for NumericalEngine {
    fn advance(&mut self, bodies: &mut [Body], dt: f64) {
        let n = bodies.len();
        if n == 0 {
            return;
        }

        // Flag overlaps on the incoming state, so the force passes below
        // never see a pair inside collision distance.
        self.check_collisions(bodies);

        let half_dt = 0.5 * dt;
        let mut accels = vec![Vector2D::zero(); n];

        // Kick: v += a(x_n) * dt/2
        self.accumulate_accels(bodies, &mut accels);
        for (body, a) in bodies.iter_mut().zip(accels.iter()) {
            if participates(body) {
                body.velocity += *a * half_dt;
            }
        }

        // Drift: x += v * dt
        for body in bodies.iter_mut() {
            if participates(body) {
                let velocity = body.velocity;
                body.position += velocity * dt;
            }
        }

        // Second kick from the new positions: v += a(x_n+1) * dt/2
        self.accumulate_accels(bodies, &mut accels);
        for (body, a) in bodies.iter_mut().zip(accels.iter()) {
            if participates(body) {
                body.velocity += *a * half_dt;
            }
            // Published for the force/acceleration vector arrows.
            body.acceleration = *a;
            body.force = *a * body.mass();
        }
    }

    fn is_body_escaped(&self, body: &Body) -> bool {
        body.position.to_vector().length() > self.escape_distance
    }
}
