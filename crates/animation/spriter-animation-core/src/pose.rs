//! Resolved pose for one query time and the object assembler that builds it.

use hashbrown::HashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{Animation, ObjectInfo, ObjectType, Spatial, SpriterData, Timeline};
use crate::hierarchy::resolve_bones;
use crate::sampling::{adjust_time, locate_mainline, normalize_time, sample_object};

/// World-space snapshot of every visible element at one instant.
///
/// Sprites and points keep draw order. Boxes are keyed by object id so
/// collision queries can look them up directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    #[serde(default)]
    pub sprites: Vec<ObjectInfo>,
    #[serde(default)]
    pub points: Vec<ObjectInfo>,
    #[serde(default)]
    pub boxes: HashMap<usize, ObjectInfo>,
}

impl Pose {
    pub fn with_config(cfg: &Config) -> Self {
        Self {
            sprites: Vec::with_capacity(cfg.sprite_capacity),
            points: Vec::with_capacity(cfg.point_capacity),
            boxes: HashMap::with_capacity(cfg.box_capacity),
        }
    }

    #[inline]
    pub fn box_for(&self, object_id: usize) -> Option<&ObjectInfo> {
        self.boxes.get(&object_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len() + self.points.len() + self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty() && self.points.is_empty() && self.boxes.is_empty()
    }
}

/// Sample one animation at `t`, optionally placed under an outer transform.
pub(crate) fn assemble(
    cfg: &Config,
    data: &SpriterData,
    animation: &Animation,
    t: f32,
    parent: Option<&Spatial>,
) -> Pose {
    let t = normalize_time(animation, t);
    let (a, b) = locate_mainline(&animation.mainline, t);
    let key_a = &animation.mainline[a];
    let key_b = &animation.mainline[b];
    let adjusted = adjust_time(key_a, key_b, animation.length, t);

    // Bones follow their own timelines at the query time; the mainline curve
    // only retimes objects.
    let bones = resolve_bones(animation, key_a, t, parent);

    let mut pose = Pose::with_config(cfg);
    for object_ref in &key_a.object_refs {
        let mut info = sample_object(animation, object_ref, adjusted);
        match (object_ref.parent, parent) {
            (Some(index), _) => info.spatial.apply_parent(&bones[index]),
            (None, Some(outer)) => info.spatial.apply_parent(outer),
            (None, None) => {}
        }
        place_object(
            cfg,
            data,
            animation.timeline(object_ref.timeline),
            info,
            &mut pose,
        );
    }
    pose
}

/// Route a resolved object into the pose collection for its timeline's kind.
pub(crate) fn place_object(
    cfg: &Config,
    data: &SpriterData,
    timeline: &Timeline,
    info: ObjectInfo,
    pose: &mut Pose,
) {
    match timeline.object_type {
        ObjectType::Sprite => pose.sprites.push(info),
        ObjectType::Point => pose.points.push(info),
        ObjectType::Box => {
            pose.boxes.insert(timeline.object_id, info);
        }
        ObjectType::Entity => {
            if !cfg.expand_entities {
                return;
            }
            let nested = info
                .entity
                .and_then(|r| data.animation(r.entity, r.animation));
            let Some(nested) = nested else {
                warn!(
                    "entity timeline '{}' ({}) has no usable animation reference {:?}; skipped",
                    timeline.name, timeline.id, info.entity
                );
                return;
            };
            // Only sprites of the nested pose are carried over.
            let nested_time = info.t * nested.length;
            let nested_pose = assemble(cfg, data, nested, nested_time, Some(&info.spatial));
            pose.sprites.extend(nested_pose.sprites);
        }
        ObjectType::Bone => {}
    }
}
