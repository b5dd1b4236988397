//! Spriter Animation Core (engine-agnostic)
//!
//! Samples 2D skeletal/sprite animations into world-space poses. Given an
//! already-loaded [`SpriterData`] and a query time, the sampler locates the
//! bracketing keys, eases and interpolates every timeline, resolves the bone
//! hierarchy and sorts objects into sprites, points and boxes. Two animations
//! can be blended into one pose.
//!
//! Sampling is a pure read of the dataset; the dataset is never mutated.

pub mod blend;
pub mod config;
pub mod data;
pub mod error;
pub mod hierarchy;
pub mod interp;
pub mod pose;
pub mod sampler;
pub mod sampling;
pub mod transform;

// Re-exports for consumers (renderers, adapters)
pub use config::Config;
pub use data::{
    Animation, CurveType, Entity, EntityRef, FileRef, KeyPayload, MainlineKey, ObjectInfo,
    ObjectType, Ref, Spatial, SpriterData, Timeline, TimelineKey,
};
pub use error::DataError;
pub use hierarchy::resolve_bones;
pub use pose::Pose;
pub use sampler::{sample, sample_blended, Sampler};
