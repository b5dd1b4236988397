//! Sampler configuration.

use serde::{Deserialize, Serialize};

/// Capacity hints for freshly built poses and feature switches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity of `Pose::sprites`.
    pub sprite_capacity: usize,
    pub point_capacity: usize,
    pub box_capacity: usize,

    /// Recursively sample entity objects and splice their sprites in.
    /// When off, entity objects contribute nothing.
    pub expand_entities: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprite_capacity: 32,
            point_capacity: 8,
            box_capacity: 8,
            expand_entities: true,
        }
    }
}
