//! Prefabricated systems matching the simulation's built-in lab modes.
//!
//! All values are in model units (G = 1e4). Systems that should sit still
//! are momentum-balanced by hand; run the numbers before editing them.

pub mod systems {
    use crate::builder::{circular_speed, SystemBuilder, SystemEntry as Entry};
    use euclid::default::{Point2D, Vector2D};
    use sim::bodies::BodySpec;

    /// The classic default: a star and one planet on a slightly eccentric
    /// orbit. Momenta cancel, so the pair stays on screen.
    pub fn sun_planet() -> Vec<BodySpec> {
        vec![
            BodySpec::new(200.0, Point2D::zero(), Vector2D::new(0.0, -6.0)),
            BodySpec::new(10.0, Point2D::new(150.0, 0.0), Vector2D::new(0.0, 120.0)),
        ]
    }

    /// Star, planet, and a moon bound to the planet.
    pub fn sun_planet_moon() -> Vec<BodySpec> {
        let moon_speed = circular_speed(10.1, 20.0); // about the planet
        SystemBuilder::new()
            .add(Entry::body(
                200.0,
                Point2D::zero(),
                // Balances the planet plus the moon's leftover momentum.
                Vector2D::new(0.0, -6.02),
            ))
            .add(
                Entry::body(10.0, Point2D::new(160.0, 0.0), Vector2D::new(0.0, 120.0)).with(
                    Entry::body(
                        0.1,
                        Point2D::new(-20.0, 0.0),
                        Vector2D::new(0.0, -moon_speed),
                    ),
                ),
            )
            .construct()
    }

    /// Star, planet, and a light comet on a long eccentric loop.
    pub fn sun_planet_comet() -> Vec<BodySpec> {
        vec![
            BodySpec::new(200.0, Point2D::zero(), Vector2D::new(0.0, -6.0)),
            BodySpec::new(10.0, Point2D::new(150.0, 0.0), Vector2D::new(0.0, 120.0)),
            BodySpec::new(
                0.1,
                Point2D::new(-220.0, 130.0),
                Vector2D::new(-20.0, -35.0),
            ),
        ]
    }

    /// Two light asteroids sharing the planet's orbit, 60 degrees ahead and
    /// behind, near the triangular Lagrange points.
    pub fn trojan_asteroids() -> Vec<BodySpec> {
        let v = 119.0;
        vec![
            BodySpec::new(200.0, Point2D::zero(), Vector2D::new(0.0, -6.0)),
            BodySpec::new(10.0, Point2D::new(150.0, 0.0), Vector2D::new(0.0, v)),
            // Tangential velocities at +-60 degrees around the orbit.
            BodySpec::new(
                0.1,
                Point2D::new(75.0, 129.9),
                Vector2D::new(-0.866 * v, 0.5 * v),
            ),
            BodySpec::new(
                0.1,
                Point2D::new(75.0, -129.9),
                Vector2D::new(0.866 * v, 0.5 * v),
            ),
        ]
    }

    /// A light body launched well below circular speed, for a clearly
    /// elliptical trail.
    pub fn ellipses() -> Vec<BodySpec> {
        vec![
            BodySpec::new(200.0, Point2D::new(-100.0, 0.0), Vector2D::new(0.0, -0.04)),
            BodySpec::new(0.1, Point2D::new(100.0, 0.0), Vector2D::new(0.0, 80.0)),
        ]
    }

    /// A flyby above escape speed. The orbit engine reports this one as not
    /// an allowed orbit.
    pub fn hyperbolic() -> Vec<BodySpec> {
        vec![
            BodySpec::new(200.0, Point2D::new(0.0, -50.0), Vector2D::zero()),
            BodySpec::new(0.1, Point2D::new(-300.0, -100.0), Vector2D::new(120.0, 0.0)),
        ]
    }

    /// A probe diving past the planet for a gravity assist.
    pub fn slingshot() -> Vec<BodySpec> {
        vec![
            // Cancels the planet's momentum plus the probe's.
            BodySpec::new(200.0, Point2D::zero(), Vector2D::new(-0.0125, -6.015)),
            BodySpec::new(10.0, Point2D::new(150.0, 0.0), Vector2D::new(0.0, 120.0)),
            BodySpec::new(0.1, Point2D::new(-220.0, -130.0), Vector2D::new(25.0, 30.0)),
        ]
    }

    /// Two planets on perpendicular orbits and a probe threaded between
    /// them for back-to-back assists.
    pub fn double_slingshot() -> Vec<BodySpec> {
        vec![
            BodySpec::new(200.0, Point2D::zero(), Vector2D::new(-3.225, -2.63)),
            BodySpec::new(5.0, Point2D::new(0.0, -120.0), Vector2D::new(130.0, 0.0)),
            BodySpec::new(5.0, Point2D::new(190.0, 0.0), Vector2D::new(0.0, 104.0)),
            BodySpec::new(0.1, Point2D::new(80.0, 80.0), Vector2D::new(-50.0, 60.0)),
        ]
    }

    /// Two tight binaries orbiting each other: velocities are the pair's
    /// internal circular speed stacked on the pair-about-pair speed, so the
    /// whole thing cancels by symmetry.
    pub fn double_double() -> Vec<BodySpec> {
        vec![
            BodySpec::new(60.0, Point2D::new(-100.0, 20.0), Vector2D::new(-87.0, -55.0)),
            BodySpec::new(60.0, Point2D::new(-100.0, -20.0), Vector2D::new(87.0, -55.0)),
            BodySpec::new(60.0, Point2D::new(100.0, 20.0), Vector2D::new(-87.0, 55.0)),
            BodySpec::new(60.0, Point2D::new(100.0, -20.0), Vector2D::new(87.0, 55.0)),
        ]
    }

    /// Two stars about their barycenter, plus a planet around one of them.
    pub fn binary_star_planet() -> Vec<BodySpec> {
        vec![
            BodySpec::new(150.0, Point2D::new(-100.0, 0.0), Vector2D::new(0.0, -60.0)),
            BodySpec::new(120.0, Point2D::new(100.0, 0.0), Vector2D::new(0.0, 75.0)),
            BodySpec::new(0.1, Point2D::new(-50.0, 0.0), Vector2D::new(0.0, 120.0)),
        ]
    }

    /// Four equal stars chasing each other around the origin.
    pub fn four_star_ballet() -> Vec<BodySpec> {
        vec![
            BodySpec::new(120.0, Point2D::new(-100.0, 100.0), Vector2D::new(-50.0, -50.0)),
            BodySpec::new(120.0, Point2D::new(100.0, 100.0), Vector2D::new(-50.0, 50.0)),
            BodySpec::new(120.0, Point2D::new(100.0, -100.0), Vector2D::new(50.0, 50.0)),
            BodySpec::new(120.0, Point2D::new(-100.0, -100.0), Vector2D::new(50.0, -50.0)),
        ]
    }

    /// A star with a seeded ring of small rocks. Same seed, same belt.
    pub fn asteroid_belt() -> Vec<BodySpec> {
        SystemBuilder::new()
            .add(
                Entry::body(200.0, Point2D::zero(), Vector2D::zero()).with(Entry::Swarm {
                    count: 24,
                    min_mass: 0.1,
                    max_mass: 0.5,
                    min_orbit: 180.0,
                    max_orbit: 260.0,
                    mass_spread: 1.0,
                    seed: 1,
                    clockwise: false,
                }),
            )
            .construct()
    }
}

use sim::bodies::BodySpec;
use std::collections::HashMap;

macro_rules! registry {
    ( $($name:ident),* $(,)? ) => {{
        let mut h: HashMap<&'static str, fn() -> Vec<BodySpec>> = HashMap::new();
        $( h.insert(stringify!($name), systems::$name as fn() -> Vec<BodySpec>); )*
        h
    }};
}

lazy_static! {
    static ref SYSTEMS: HashMap<&'static str, fn() -> Vec<BodySpec>> = registry![
        sun_planet,
        sun_planet_moon,
        sun_planet_comet,
        trojan_asteroids,
        ellipses,
        hyperbolic,
        slingshot,
        double_slingshot,
        binary_star_planet,
        four_star_ballet,
        double_double,
        asteroid_belt,
    ];
}

/// Look up a prefab system by name.
pub fn preset(name: &str) -> Option<Vec<BodySpec>> {
    SYSTEMS.get(name).map(|build| build())
}

/// Every registered prefab name, sorted.
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SYSTEMS.keys().copied().collect();
    names.sort_unstable();
    names
}
