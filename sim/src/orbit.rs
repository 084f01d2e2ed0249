//! Keplerian decomposition of a two-body state.
//!
//! Given a primary and a secondary body, derives the classical orbital
//! elements from the instantaneous relative position and velocity. The
//! two-body reduction is exact: perturbation from any other body is ignored,
//! which is what the Kepler's-laws mode wants.

use std::f64::consts::TAU;

use euclid::default::Point2D;

use crate::bodies::Body;
use crate::GRAV_CONSTANT;

/// Eccentricities below this snap to exactly zero, so callers can branch on
/// `e == 0` for the circular degenerate case without an epsilon of their own.
const CIRCULAR_THRESHOLD: f64 = 1e-10;

/// Orbital elements of the tracked pair, recomputed by `update` whenever the
/// governing bodies move. Plain state: the owning system decides when to
/// recompute and who to notify about it.
#[derive(Debug, Clone)]
pub struct EllipticalOrbit {
    /// Semi-major axis. Negative for hyperbolic states.
    pub a: f64,
    /// Eccentricity; exactly 0 for a circular orbit.
    pub e: f64,
    /// Argument of periapsis: the orientation of the eccentricity vector.
    pub w: f64,
    /// True anomaly: angle from the periapsis direction to the position
    /// vector, in `[0, 2pi)`.
    pub nu: f64,
    /// False when the current state is an escape trajectory (`e >= 1` or
    /// `a <= 0`) rather than a closed orbit. Not an error, a queryable state.
    pub allowed_orbit: bool,
    /// Standard gravitational parameter of the pair, `G * (m1 + m2)`.
    mu: f64,
    gravity: f64,
}

impl EllipticalOrbit {
    pub fn new() -> Self {
        Self::with_gravity(GRAV_CONSTANT)
    }

    pub fn with_gravity(gravity: f64) -> Self {
        EllipticalOrbit {
            a: 0.0,
            e: 0.0,
            w: 0.0,
            nu: 0.0,
            allowed_orbit: false,
            mu: 0.0,
            gravity,
        }
    }

    /// Recompute all elements from the pair's instantaneous state.
    pub fn update(&mut self, primary: &Body, secondary: &Body) {
        self.mu = self.gravity * (primary.mass() + secondary.mass());
        let rv = secondary.position - primary.position;
        let vv = secondary.velocity - primary.velocity;
        let r = rv.length();
        if r == 0.0 {
            // Coincident bodies have no defined orbit.
            self.allowed_orbit = false;
            return;
        }
        let v2 = vv.square_length();

        // Laplace-Runge-Lenz eccentricity vector:
        // e = ((v^2 - mu/r) r - (r . v) v) / mu
        let ev = (rv * (v2 - self.mu / r) - vv * rv.dot(vv)) / self.mu;
        let mut e = ev.length();
        if e < CIRCULAR_THRESHOLD {
            e = 0.0;
        }

        // Vis-viva: 1/a = 2/r - v^2/mu.
        let a = 1.0 / (2.0 / r - v2 / self.mu);

        let w = if e == 0.0 { 0.0 } else { ev.y.atan2(ev.x) };
        let nu = normalize_angle(rv.y.atan2(rv.x) - w);

        self.a = a;
        self.e = e;
        self.w = w;
        self.nu = nu;
        self.allowed_orbit = e < 1.0 && a > 0.0;
    }

    /// Point on the conic at true anomaly `nu`, relative to the primary
    /// focus, from `r = a (1 - e^2) / (1 + e cos nu)`.
    pub fn create_polar(&self, nu: f64) -> Point2D<f64> {
        let r = self.a * (1.0 - self.e * self.e) / (1.0 + self.e * nu.cos());
        let angle = nu + self.w;
        Point2D::new(r * angle.cos(), r * angle.sin())
    }

    /// Relative position of the secondary right now, reconstructed from the
    /// elements rather than read from the body.
    pub fn current_position(&self) -> Point2D<f64> {
        self.create_polar(self.nu)
    }

    /// Orbital period from Kepler's third law, `2 pi sqrt(a^3 / mu)`. Only
    /// meaningful while `allowed_orbit` holds.
    pub fn period(&self) -> f64 {
        TAU * (self.a.powi(3) / self.mu).sqrt()
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.a * (1.0 - self.e * self.e).sqrt()
    }

    /// Distance from the ellipse center to either focus, `c = a e`.
    pub fn focal_distance(&self) -> f64 {
        self.a * self.e
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.a * (1.0 + self.e)
    }

    /// Lengths of the two focal strings at true anomaly `nu`. For a circular
    /// orbit the foci coincide and both collapse to the single radius `a`,
    /// so callers get one `R` instead of two coincident labels.
    pub fn focal_string_lengths(&self, nu: f64) -> (f64, f64) {
        if self.e == 0.0 {
            return (self.a, self.a);
        }
        let r1 = self.a * (1.0 - self.e * self.e) / (1.0 + self.e * nu.cos());
        (r1, 2.0 * self.a - r1)
    }
}

impl Default for EllipticalOrbit {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}
