//! Core model of the gravitational sandbox.
//!
//! Owns the ordered body collection, drives the integration engine once per
//! tick, and refreshes the derived state (center of mass, tracked orbit)
//! before anyone outside gets to look. Rendering and input live elsewhere
//! and only ever see this crate through plain state and the event callbacks.

pub mod bodies;
pub mod center_of_mass;
pub mod engine;
pub mod orbit;
pub mod path;

use bodies::{Body, BodySpec};
use center_of_mass::CenterOfMass;
use engine::{Engine, NumericalEngine};
use orbit::EllipticalOrbit;

/// Notifications emitted by the system after it mutates its own state.
/// Listeners get these instead of watching body fields directly; the engine
/// itself never notifies anyone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SystemEvent {
    BodyAdded(usize),
    BodyRemoved(usize),
    /// One full tick finished; all derived state is fresh.
    Stepped,
    /// The tracked orbit was recomputed from the pair's new state.
    OrbitChanged,
}

type Listener = Box<dyn FnMut(SystemEvent)>;

struct TrackedOrbit {
    primary: usize,
    secondary: usize,
    orbit: EllipticalOrbit,
}

/// The solar system: bodies, engine, and derived state.
pub struct SolarSystem {
    bodies: Vec<Body>,
    engine: Box<dyn Engine>,
    center_of_mass: CenterOfMass,
    tracked: Option<TrackedOrbit>,
    time: f64,
    listeners: Vec<Listener>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_engine(Box::new(NumericalEngine::new()))
    }

    /// The system is coded against [`Engine`], so alternative integrators can
    /// be dropped in here.
    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        SolarSystem {
            bodies: Vec::new(),
            engine,
            center_of_mass: CenterOfMass::new(),
            tracked: None,
            time: 0.0,
            listeners: Vec::new(),
        }
    }

    pub fn from_specs(specs: &[BodySpec]) -> Self {
        let mut system = Self::new();
        system.load_preset(specs);
        system
    }

    /// Advance the whole model by one tick: integrate, record path points,
    /// refresh derived state, then notify. Synchronous and atomic; pausing
    /// is simply not calling this.
    pub fn step(&mut self, dt: f64) {
        self.engine.advance(&mut self.bodies, dt);
        for body in self.bodies.iter_mut().filter(|b| b.active) {
            body.add_path_point();
        }
        self.center_of_mass.update(&self.bodies);
        self.time += dt;
        let orbit_changed = self.update_tracked_orbit();

        self.emit(SystemEvent::Stepped);
        if orbit_changed {
            self.emit(SystemEvent::OrbitChanged);
        }
    }

    pub fn add_body(&mut self, spec: BodySpec) {
        self.bodies.push(Body::new(spec));
        self.center_of_mass.update(&self.bodies);
        self.emit(SystemEvent::BodyAdded(self.bodies.len() - 1));
    }

    /// Remove one body outright. The tracked orbit is dropped if it referred
    /// to the removed body.
    pub fn remove_body(&mut self, index: usize) -> Body {
        let body = self.bodies.remove(index);
        self.tracked = match self.tracked.take() {
            Some(mut tracked) => {
                if tracked.primary == index || tracked.secondary == index {
                    None
                } else {
                    if tracked.primary > index {
                        tracked.primary -= 1;
                    }
                    if tracked.secondary > index {
                        tracked.secondary -= 1;
                    }
                    Some(tracked)
                }
            }
            None => None,
        };
        self.center_of_mass.update(&self.bodies);
        self.emit(SystemEvent::BodyRemoved(index));
        body
    }

    /// Atomically replace the whole collection from preset data. The clock
    /// restarts and orbit tracking is dropped; the old indices mean nothing
    /// against the new bodies, so callers re-track what they care about.
    pub fn load_preset(&mut self, specs: &[BodySpec]) {
        for index in (0..self.bodies.len()).rev() {
            self.emit(SystemEvent::BodyRemoved(index));
        }
        self.bodies = specs.iter().map(|spec| Body::new(*spec)).collect();
        self.time = 0.0;
        self.tracked = None;
        self.center_of_mass.update(&self.bodies);
        for index in 0..self.bodies.len() {
            self.emit(SystemEvent::BodyAdded(index));
        }
        tracing::debug!(bodies = self.bodies.len(), "preset loaded");
    }

    /// Deactivate down to (or reactivate up to) `count` bodies. The most
    /// recently added go first, and their state is left untouched, so raising
    /// the count brings them back exactly as they were.
    pub fn set_active_body_count(&mut self, count: usize) {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.active = index < count;
        }
        self.center_of_mass.update(&self.bodies);
    }

    pub fn num_active_bodies(&self) -> usize {
        self.bodies.iter().filter(|b| b.active).count()
    }

    /// Track the orbit of `secondary` about `primary`. It is recomputed after
    /// every step from then on, and `OrbitChanged` fires each time.
    pub fn track_orbit(&mut self, primary: usize, secondary: usize) {
        if primary >= self.bodies.len() || secondary >= self.bodies.len() || primary == secondary {
            return;
        }
        self.tracked = Some(TrackedOrbit {
            primary,
            secondary,
            orbit: EllipticalOrbit::new(),
        });
        self.update_tracked_orbit();
    }

    pub fn orbit(&self) -> Option<&EllipticalOrbit> {
        self.tracked.as_ref().map(|t| &t.orbit)
    }

    fn update_tracked_orbit(&mut self) -> bool {
        if let Some(tracked) = self.tracked.as_mut() {
            let primary = &self.bodies[tracked.primary];
            let secondary = &self.bodies[tracked.secondary];
            tracked.orbit.update(primary, secondary);
            true
        } else {
            false
        }
    }

    /// Cancel the system's net drift: subtract the center-of-mass velocity
    /// from every active body, so the center of mass stays put from now on.
    pub fn follow_center_of_mass(&mut self) {
        if !self.center_of_mass.update(&self.bodies) {
            return;
        }
        let drift = self.center_of_mass.velocity;
        for body in self.bodies.iter_mut().filter(|b| b.active) {
            body.velocity -= drift;
        }
        self.center_of_mass.update(&self.bodies);
    }

    /// Shift the whole system into the center-of-mass frame. Trails recorded
    /// in the old frame are meaningless in the new one, so paths are cleared,
    /// and the recentered state becomes the reset baseline. Inactive bodies
    /// shift too, so reactivating one later puts it in the same frame.
    pub fn center_system(&mut self) {
        if !self.center_of_mass.update(&self.bodies) {
            return;
        }
        let origin = self.center_of_mass.position.to_vector();
        let drift = self.center_of_mass.velocity;
        for body in self.bodies.iter_mut() {
            body.position -= origin;
            body.velocity -= drift;
            body.clear_path();
            body.add_path_point();
        }
        self.save_starting_state();
        self.center_of_mass.update(&self.bodies);
        self.update_tracked_orbit();
        tracing::debug!("system recentered");
    }

    /// Make the current body states the baseline that `reset` returns to.
    pub fn save_starting_state(&mut self) {
        for body in self.bodies.iter_mut() {
            body.save_baseline();
        }
    }

    /// Restore every body to its baseline and restart the clock. Safe to call
    /// at any point between steps.
    pub fn reset(&mut self) {
        for body in self.bodies.iter_mut() {
            body.reset();
        }
        self.time = 0.0;
        self.center_of_mass.update(&self.bodies);
        self.update_tracked_orbit();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for the drag handlers; the engine tolerates any write
    /// made here on its next step.
    pub fn body_mut(&mut self, index: usize) -> &mut Body {
        &mut self.bodies[index]
    }

    pub fn center_of_mass(&self) -> &CenterOfMass {
        &self.center_of_mass
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.active)
            .map(|b| b.mass())
            .sum()
    }

    pub fn is_any_body_collided(&self) -> bool {
        self.bodies.iter().any(|b| b.collided)
    }

    pub fn is_body_escaped(&self, index: usize) -> bool {
        self.engine.is_body_escaped(&self.bodies[index])
    }

    /// Register a callback for [`SystemEvent`]s.
    pub fn on_event(&mut self, listener: impl FnMut(SystemEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: SystemEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Gravitational constant in model units. The classic two-body default,
/// masses 200 and 10 at separation 150 with speeds 6 and 120, is a slightly
/// eccentric bound orbit under this value.
pub const GRAV_CONSTANT: f64 = 1e4;
/// Distance from the origin past which a body counts as escaped.
pub const ESCAPE_DISTANCE: f64 = 2000.0;
/// Floor on pair separation in the force denominator.
pub const MIN_SEPARATION: f64 = 1.0;
