//! Read-only animation dataset (entities, animations, mainline, timelines).
//!
//! The loader owns parsing; this crate only consumes the already-built graph.
//! Cross references are plain indices: a [`Ref`] points at a timeline by id and
//! at one of its keys by position, and a bone's parent is a position in the
//! same mainline key's bone list.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Local or world transform of a bone (or the spatial half of an object).
/// Angles are degrees, counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spatial {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Spatial {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Image reference (folder/file pair) carried by sprite objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub folder: usize,
    pub file: usize,
}

/// Nested animation reference carried by entity objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity: usize,
    pub animation: usize,
}

/// Object payload: a spatial plus the fields bones do not have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectInfo {
    pub spatial: Spatial,
    pub alpha: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
    pub file: Option<FileRef>,
    pub entity: Option<EntityRef>,
    /// Normalized progression (0..1) through the nested animation.
    pub t: f32,
}

impl Default for ObjectInfo {
    fn default() -> Self {
        Self {
            spatial: Spatial::default(),
            alpha: 1.0,
            pivot_x: 0.0,
            pivot_y: 1.0,
            file: None,
            entity: None,
            t: 0.0,
        }
    }
}

impl From<Spatial> for ObjectInfo {
    fn from(spatial: Spatial) -> Self {
        Self {
            spatial,
            ..Self::default()
        }
    }
}

/// Easing applied to the raw time ratio of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CurveType {
    /// Hold the first key for the whole segment.
    Instant,
    #[default]
    Linear,
    Quadratic {
        c1: f32,
    },
    Cubic {
        c1: f32,
        c2: f32,
    },
    Quartic {
        c1: f32,
        c2: f32,
        c3: f32,
    },
    Quintic {
        c1: f32,
        c2: f32,
        c3: f32,
        c4: f32,
    },
    /// Cubic-bezier timing with control points (c1, c2) and (c3, c4).
    Bezier {
        c1: f32,
        c2: f32,
        c3: f32,
        c4: f32,
    },
}

/// What a timeline animates; decides where its objects land in a pose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Sprite,
    Bone,
    Box,
    Point,
    Entity,
}

/// Per-key payload. Bone timelines carry spatials, everything else objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyPayload {
    Bone(Spatial),
    Object(ObjectInfo),
}

impl KeyPayload {
    #[inline]
    pub fn spatial(&self) -> Spatial {
        match self {
            KeyPayload::Bone(s) => *s,
            KeyPayload::Object(o) => o.spatial,
        }
    }

    pub fn object(&self) -> ObjectInfo {
        match self {
            KeyPayload::Bone(s) => ObjectInfo::from(*s),
            KeyPayload::Object(o) => o.clone(),
        }
    }
}

fn default_spin() -> i32 {
    1
}

fn default_looping() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineKey {
    pub id: usize,
    #[serde(default)]
    pub time: f32,
    #[serde(default)]
    pub curve: CurveType,
    /// +1 counter-clockwise, -1 clockwise, 0 holds the angle.
    #[serde(default = "default_spin")]
    pub spin: i32,
    pub payload: KeyPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub object_type: ObjectType,
    /// Object-info index; boxes are keyed by it in a pose.
    #[serde(default)]
    pub object_id: usize,
    pub keys: Vec<TimelineKey>,
}

/// Bone or object reference inside a mainline key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    pub id: usize,
    /// Position of the parent in the same key's bone list; `None` for roots.
    #[serde(default)]
    pub parent: Option<usize>,
    pub timeline: usize,
    pub key: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainlineKey {
    pub id: usize,
    #[serde(default)]
    pub time: f32,
    #[serde(default)]
    pub curve: CurveType,
    #[serde(default)]
    pub bone_refs: Vec<Ref>,
    #[serde(default)]
    pub object_refs: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub id: usize,
    pub name: String,
    /// Length in time units; looping animations wrap back to 0 here.
    pub length: f32,
    #[serde(default = "default_looping")]
    pub looping: bool,
    pub mainline: Vec<MainlineKey>,
    /// Indexed by timeline id.
    pub timelines: Vec<Timeline>,
    /// Owning entity id.
    #[serde(default)]
    pub entity: usize,
}

impl Animation {
    #[inline]
    pub fn timeline(&self, id: usize) -> &Timeline {
        &self.timelines[id]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: usize,
    pub name: String,
    pub animations: Vec<Animation>,
}

impl Entity {
    pub fn animation_by_name(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name == name)
    }
}

/// Whole dataset as produced by the loader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriterData {
    pub entities: Vec<Entity>,
}

impl SpriterData {
    pub fn entity(&self, id: usize) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn animation(&self, entity: usize, animation: usize) -> Option<&Animation> {
        self.entities.get(entity)?.animations.get(animation)
    }

    pub fn animation_by_name(&self, entity: &str, animation: &str) -> Option<&Animation> {
        self.entities
            .iter()
            .find(|e| e.name == entity)?
            .animation_by_name(animation)
    }

    /// Loader-side integrity check. Sampling never calls this; it assumes the
    /// invariants checked here already hold.
    ///
    /// Key times must be finite, non-negative and non-decreasing. Timelines of
    /// looping animations may step back once, where they wrap.
    pub fn validate(&self) -> Result<(), DataError> {
        for entity in &self.entities {
            for anim in &entity.animations {
                self.validate_animation(entity.id, anim)?;
            }
        }
        Ok(())
    }

    fn validate_animation(&self, entity: usize, anim: &Animation) -> Result<(), DataError> {
        let animation = anim.id;
        if !anim.length.is_finite() || anim.length < 0.0 {
            return Err(DataError::InvalidLength {
                entity,
                animation,
                length: anim.length,
            });
        }
        if anim.mainline.is_empty() {
            return Err(DataError::EmptyMainline { entity, animation });
        }
        for (index, timeline) in anim.timelines.iter().enumerate() {
            if timeline.id != index {
                return Err(DataError::TimelineIdMismatch {
                    animation,
                    index,
                    id: timeline.id,
                });
            }
            if timeline.keys.is_empty() {
                return Err(DataError::EmptyTimeline {
                    animation,
                    timeline: index,
                });
            }
            let times = timeline.keys.iter().map(|k| k.time);
            check_sorted(times, anim.looping).map_err(|key| {
                DataError::UnsortedTimelineKeys {
                    animation,
                    timeline: index,
                    key,
                }
            })?;
        }
        check_sorted(anim.mainline.iter().map(|k| k.time), false).map_err(|key| {
            DataError::UnsortedMainlineKeys { animation, key }
        })?;

        for (position, key) in anim.mainline.iter().enumerate() {
            if key.id != position {
                return Err(DataError::MainlineIdMismatch {
                    animation,
                    index: position,
                    id: key.id,
                });
            }
            for (i, bone) in key.bone_refs.iter().enumerate() {
                self.check_ref(anim, key.id, bone)?;
                if let Some(parent) = bone.parent {
                    if parent >= i {
                        return Err(DataError::ParentOutOfOrder {
                            animation,
                            key: key.id,
                            index: i,
                            parent,
                        });
                    }
                }
            }
            for object in &key.object_refs {
                self.check_ref(anim, key.id, object)?;
                if let Some(parent) = object.parent {
                    if parent >= key.bone_refs.len() {
                        return Err(DataError::MissingParent {
                            animation,
                            key: key.id,
                            parent,
                        });
                    }
                }
                let timeline = anim.timeline(object.timeline);
                if timeline.object_type == ObjectType::Entity {
                    for tk in &timeline.keys {
                        let target = tk.payload.object().entity;
                        let found = target.and_then(|r| self.animation(r.entity, r.animation));
                        if found.is_none() {
                            return Err(DataError::MissingNestedAnimation {
                                animation,
                                timeline: timeline.id,
                                target,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn check_ref(&self, anim: &Animation, key: usize, r: &Ref) -> Result<(), DataError> {
        let Some(timeline) = anim.timelines.get(r.timeline) else {
            return Err(DataError::MissingTimeline {
                animation: anim.id,
                key,
                timeline: r.timeline,
            });
        };
        if r.key >= timeline.keys.len() {
            return Err(DataError::MissingTimelineKey {
                animation: anim.id,
                timeline: r.timeline,
                key: r.key,
            });
        }
        Ok(())
    }
}

/// Returns the position of the first key earlier than its predecessor.
/// With `wraps` set, one step back in time is accepted: a looping timeline may
/// restart at its wrap point.
fn check_sorted(times: impl Iterator<Item = f32>, wraps: bool) -> Result<(), usize> {
    let mut last = f32::NEG_INFINITY;
    let mut wrapped = !wraps;
    for (i, t) in times.enumerate() {
        if !t.is_finite() || t < 0.0 {
            return Err(i);
        }
        if t < last {
            if wrapped {
                return Err(i);
            }
            wrapped = true;
        }
        last = t;
    }
    Ok(())
}
