//! Bone hierarchy resolution for one mainline key.

use crate::data::{Animation, MainlineKey, Spatial};
use crate::sampling::sample_bone;

/// World transforms of every bone ref in `key`, in ref order.
///
/// Parents are looked up by position in the output, so a parent must precede
/// its children in `key.bone_refs`. Root bones are placed under `parent` when
/// one is given (nested entity sampling).
pub fn resolve_bones(
    animation: &Animation,
    key: &MainlineKey,
    t: f32,
    parent: Option<&Spatial>,
) -> Vec<Spatial> {
    let mut resolved: Vec<Spatial> = Vec::with_capacity(key.bone_refs.len());
    for bone_ref in &key.bone_refs {
        let mut bone = sample_bone(animation, bone_ref, t);
        match (bone_ref.parent, parent) {
            (Some(index), _) => bone.apply_parent(&resolved[index]),
            (None, Some(outer)) => bone.apply_parent(outer),
            (None, None) => {}
        }
        resolved.push(bone);
    }
    resolved
}
