//! Preset systems for the sandbox: named prefab configurations, a
//! hierarchical builder, and a json5 file format. The root just re-exports
//! its contents.

pub mod builder;
pub mod deserialize;
pub mod prefabs;

pub use builder::{circular_speed, SystemBuilder, SystemEntry};
pub use deserialize::load;
pub use prefabs::{preset, preset_names};

#[macro_use]
extern crate lazy_static;
