//! Lets you load a system from a json5 file.
//!
//! A file is either a bare prefab name (`"sun_planet"`) or an array of
//! nested entries. Each entry is an orbiter (mass, pos, vel, children), a
//! locus (a reference point with children), or a swarm description. Child
//! kinematics are relative to the parent, exactly as in [`crate::builder`].

use anyhow::{anyhow, Context, Result};
use euclid::default::{Point2D, Vector2D};
use serde::Deserialize;
use sim::bodies::BodySpec;

use crate::builder::{SystemBuilder, SystemEntry};
use crate::prefabs;

/// A point or a vector, written `[x, y]`.
#[derive(Deserialize)]
struct Vec2(f64, f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Body {
        mass: f64,
        pos: Vec2,
        vel: Vec2,
        #[serde(default)]
        active: Option<bool>,
        #[serde(default)]
        children: Vec<Entry>,
    },
    Swarm {
        count: usize,
        min_mass: f64,
        max_mass: f64,
        min_orbit: f64,
        max_orbit: f64,
        #[serde(default = "one")]
        mass_spread: f64,
        #[serde(default)]
        seed: u64,
        #[serde(default)]
        clockwise: bool,
    },
    Locus {
        pos: Vec2,
        #[serde(default)]
        children: Vec<Entry>,
    },
}

/// Serde needs a function for a non-trivial default.
fn one() -> f64 {
    1.0
}

/// Either a prefab reference or a full entry list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSystem {
    Prefab(String),
    Entries(Vec<Entry>),
}

/// Parse a json5 system description into preset tuples.
pub fn load(contents: &str) -> Result<Vec<BodySpec>> {
    let raw: RawSystem = json5::from_str(contents).context("malformed system file")?;
    let specs = match raw {
        RawSystem::Prefab(name) => {
            prefabs::preset(&name).ok_or_else(|| anyhow!("no prefab system named `{}`", name))?
        }
        RawSystem::Entries(entries) => {
            let builder = &mut SystemBuilder::new();
            for root in entries {
                builder.add(convert(root));
            }
            builder.construct()
        }
    };
    tracing::debug!(bodies = specs.len(), "system file loaded");
    Ok(specs)
}

/// Depth-first conversion from the serde shape to builder entries.
fn convert(entry: Entry) -> SystemEntry {
    match entry {
        Entry::Body {
            mass,
            pos,
            vel,
            active,
            children,
        } => SystemEntry::Body {
            mass,
            position: Point2D::new(pos.0, pos.1),
            velocity: Vector2D::new(vel.0, vel.1),
            active: active.unwrap_or(true),
            children: children.into_iter().map(convert).collect(),
        },
        Entry::Swarm {
            count,
            min_mass,
            max_mass,
            min_orbit,
            max_orbit,
            mass_spread,
            seed,
            clockwise,
        } => SystemEntry::Swarm {
            count,
            min_mass,
            max_mass,
            min_orbit,
            max_orbit,
            mass_spread,
            seed,
            clockwise,
        },
        Entry::Locus { pos, children } => SystemEntry::Locus {
            position: Point2D::new(pos.0, pos.1),
            children: children.into_iter().map(convert).collect(),
        },
    }
}
