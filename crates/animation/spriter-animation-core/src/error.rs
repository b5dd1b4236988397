//! Integrity errors reported by [`SpriterData::validate`](crate::SpriterData::validate).

use thiserror::Error;

use crate::data::EntityRef;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DataError {
    #[error("animation {animation} of entity {entity} has invalid length {length}")]
    InvalidLength {
        entity: usize,
        animation: usize,
        length: f32,
    },

    #[error("animation {animation} of entity {entity} has no mainline keys")]
    EmptyMainline { entity: usize, animation: usize },

    #[error("animation {animation}: mainline key at position {index} has id {id}")]
    MainlineIdMismatch {
        animation: usize,
        index: usize,
        id: usize,
    },

    #[error("animation {animation}: timeline at position {index} has id {id}")]
    TimelineIdMismatch {
        animation: usize,
        index: usize,
        id: usize,
    },

    #[error("animation {animation}: timeline {timeline} has no keys")]
    EmptyTimeline { animation: usize, timeline: usize },

    #[error("animation {animation}: key {key} of timeline {timeline} is out of time order")]
    UnsortedTimelineKeys {
        animation: usize,
        timeline: usize,
        key: usize,
    },

    #[error("animation {animation}: mainline key {key} is out of time order")]
    UnsortedMainlineKeys { animation: usize, key: usize },

    #[error("animation {animation}: mainline key {key} references missing timeline {timeline}")]
    MissingTimeline {
        animation: usize,
        key: usize,
        timeline: usize,
    },

    #[error("animation {animation}: timeline {timeline} has no key {key}")]
    MissingTimelineKey {
        animation: usize,
        timeline: usize,
        key: usize,
    },

    #[error("animation {animation}: bone ref {index} in mainline key {key} has parent {parent} that is not resolved before it")]
    ParentOutOfOrder {
        animation: usize,
        key: usize,
        index: usize,
        parent: usize,
    },

    #[error("animation {animation}: object ref in mainline key {key} has missing parent bone {parent}")]
    MissingParent {
        animation: usize,
        key: usize,
        parent: usize,
    },

    #[error("animation {animation}: entity timeline {timeline} references unknown animation {target:?}")]
    MissingNestedAnimation {
        animation: usize,
        timeline: usize,
        target: Option<EntityRef>,
    },
}
