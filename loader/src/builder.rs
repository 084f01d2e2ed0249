//! Builds body lists with nested, parent-relative kinematics.
//!
//! Preset authors think in terms of "a moon around a planet around a star",
//! so entries form a tree and each child's position and velocity are given
//! relative to its parent. `construct` flattens the tree into the absolute
//! preset tuples the system model consumes.

use euclid::default::{Point2D, Vector2D};
use sim::bodies::BodySpec;
use sim::GRAV_CONSTANT;

/// Speed of a circular orbit of radius `radius` about a combined mass
/// `total_mass`.
pub fn circular_speed(total_mass: f64, radius: f64) -> f64 {
    (GRAV_CONSTANT * total_mass / radius).sqrt()
}

/// Use this to assemble a system out of [`SystemEntry`] trees.
pub struct SystemBuilder {
    entries: Vec<SystemEntry>,
    /// Set after `construct`; further use is a programming error.
    used_up: bool,
}

impl SystemBuilder {
    pub fn new() -> Self {
        SystemBuilder {
            entries: Vec::new(),
            used_up: false,
        }
    }

    /// Add a root entry.
    pub fn add(&mut self, entry: SystemEntry) -> &mut Self {
        if self.used_up {
            panic!("tried to add an entry to a SystemBuilder after it was constructed");
        }
        self.entries.push(entry);
        self
    }

    /// Resolve every entry to absolute kinematics, depth first, in insertion
    /// order. Call once.
    pub fn construct(&mut self) -> Vec<BodySpec> {
        if self.used_up {
            panic!("tried to re-construct a SystemBuilder after it was constructed");
        }
        self.used_up = true;

        let mut out = Vec::new();
        for entry in self.entries.drain(..) {
            construct_one_level(entry, 0.0, Point2D::zero(), Vector2D::zero(), &mut out);
        }
        out
    }
}

impl Default for SystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn construct_one_level(
    entry: SystemEntry,
    parent_mass: f64,
    parent_pos: Point2D<f64>,
    parent_vel: Vector2D<f64>,
    out: &mut Vec<BodySpec>,
) {
    match entry {
        SystemEntry::Body {
            mass,
            position,
            velocity,
            active,
            children,
        } => {
            let pos = parent_pos + position.to_vector();
            let vel = parent_vel + velocity;
            out.push(BodySpec {
                mass,
                position: pos,
                velocity: vel,
                active,
            });
            for child in children {
                construct_one_level(child, mass, pos, vel, out);
            }
        }

        SystemEntry::Locus { position, children } => {
            let pos = parent_pos + position.to_vector();
            for child in children {
                construct_one_level(child, 0.0, pos, parent_vel, out);
            }
        }

        SystemEntry::Swarm {
            count,
            min_mass,
            max_mass,
            min_orbit,
            max_orbit,
            mass_spread,
            seed,
            clockwise,
        } => {
            use rand::{rngs::SmallRng, Rng, SeedableRng};
            use rand_distr::{Distribution, Normal};

            // Seeded so the same preset always produces the same swarm.
            let mut rand = SmallRng::seed_from_u64(seed);
            let normal = Normal::new(0.0, mass_spread).unwrap();

            out.extend((0..count).map(|_| {
                let mass = (min_mass + normal.sample(&mut rand).abs() * (max_mass - min_mass))
                    .min(max_mass);
                let theta = rand.gen_range(0.0, std::f64::consts::TAU);
                let orbit = rand.gen_range(min_orbit, max_orbit);
                let speed =
                    circular_speed(parent_mass + mass, orbit) * if clockwise { -1.0 } else { 1.0 };
                // Tangential direction, perpendicular to the radius.
                let pos = Point2D::new(theta.cos() * orbit, theta.sin() * orbit);
                let vel = Vector2D::new(-theta.sin() * speed, theta.cos() * speed);

                BodySpec {
                    mass,
                    position: parent_pos + pos.to_vector(),
                    velocity: parent_vel + vel,
                    active: true,
                }
            }));
        }
    }
}

/// One entry in a [`SystemBuilder`] tree.
pub enum SystemEntry {
    /// A body, with children positioned relative to it.
    Body {
        mass: f64,
        position: Point2D<f64>,
        velocity: Vector2D<f64>,
        active: bool,
        children: Vec<SystemEntry>,
    },
    /// A bare reference point. Nothing is added for it, but children hang
    /// off its position.
    Locus {
        position: Point2D<f64>,
        children: Vec<SystemEntry>,
    },
    /// A seeded ring of small bodies on circular orbits about the parent.
    Swarm {
        count: usize,
        min_mass: f64,
        max_mass: f64,
        min_orbit: f64,
        max_orbit: f64,
        /// Standard deviation of the normal draw that spreads masses across
        /// the `[min_mass, max_mass]` range.
        mass_spread: f64,
        seed: u64,
        clockwise: bool,
    },
}

impl SystemEntry {
    /// A childless body entry.
    pub fn body(mass: f64, position: Point2D<f64>, velocity: Vector2D<f64>) -> Self {
        SystemEntry::Body {
            mass,
            position,
            velocity,
            active: true,
            children: Vec::new(),
        }
    }

    pub fn locus(position: Point2D<f64>) -> Self {
        SystemEntry::Locus {
            position,
            children: Vec::new(),
        }
    }

    /// Attach a child. Returns itself so entries chain.
    pub fn with(mut self, child: Self) -> Self {
        match &mut self {
            SystemEntry::Body { children, .. } => children.push(child),
            SystemEntry::Locus { children, .. } => children.push(child),
            SystemEntry::Swarm { .. } => panic!("tried to add children to a Swarm entry"),
        }
        self
    }

    /// Attach a whole iterator of children.
    pub fn with_bulk(mut self, new_children: impl IntoIterator<Item = Self>) -> Self {
        match &mut self {
            SystemEntry::Body { children, .. } => children.extend(new_children),
            SystemEntry::Locus { children, .. } => children.extend(new_children),
            SystemEntry::Swarm { .. } => panic!("tried to add children to a Swarm entry"),
        }
        self
    }
}
