//! Cross-animation blending.
//!
//! Both animations are sampled independently at the same relative progress,
//! then bones and objects are paired by position and blended. Pairing by
//! position only makes sense when both animations list the same number of
//! bone and object refs at their bracketing keys; otherwise the first
//! animation is sampled alone.

use log::debug;

use crate::config::Config;
use crate::data::{Animation, MainlineKey, Spatial, SpriterData};
use crate::hierarchy::resolve_bones;
use crate::pose::{assemble, place_object, Pose};
use crate::sampling::{adjust_time, locate_mainline, normalize_time, sample_object};

/// Same bone/object ref counts on both sides of both brackets.
pub fn topology_matches(
    first: (&MainlineKey, &MainlineKey),
    second: (&MainlineKey, &MainlineKey),
) -> bool {
    let same = |a: &MainlineKey, b: &MainlineKey| {
        a.bone_refs.len() == b.bone_refs.len() && a.object_refs.len() == b.object_refs.len()
    };
    same(first.0, second.0) && same(first.1, second.1)
}

/// Blend `first` towards `second` by `factor` at `t` (in `first`'s time scale).
pub(crate) fn assemble_blended(
    cfg: &Config,
    data: &SpriterData,
    first: &Animation,
    second: &Animation,
    t: f32,
    factor: f32,
) -> Pose {
    if std::ptr::eq(first, second) {
        return assemble(cfg, data, first, t, None);
    }

    let t_first = normalize_time(first, t);
    let t_second = if first.length > 0.0 {
        normalize_time(second, t_first / first.length * second.length)
    } else {
        0.0
    };

    let (fa, fb) = locate_mainline(&first.mainline, t_first);
    let (sa, sb) = locate_mainline(&second.mainline, t_second);
    let first_keys = (&first.mainline[fa], &first.mainline[fb]);
    let second_keys = (&second.mainline[sa], &second.mainline[sb]);

    if !topology_matches(first_keys, second_keys) {
        debug!(
            "blend '{}' -> '{}': ref counts differ at t={t_first}; sampling '{}' alone",
            first.name, second.name, first.name
        );
        return assemble(cfg, data, first, t, None);
    }

    let adjusted_first = adjust_time(first_keys.0, first_keys.1, first.length, t_first);
    let adjusted_second = adjust_time(second_keys.0, second_keys.1, second.length, t_second);

    let bones_first = resolve_bones(first, first_keys.0, adjusted_first, None);
    let bones_second = resolve_bones(second, second_keys.0, adjusted_second, None);
    let bones: Vec<Spatial> = bones_first
        .iter()
        .zip(&bones_second)
        .map(|(a, b)| a.blend_closer(b, factor))
        .collect();

    // The bracket side closer to `factor` supplies the refs: parent bone and
    // classification. `first` always stays the left operand, so identity
    // fields come from it.
    let (base, base_key) = if factor < 0.5 {
        (first, first_keys.0)
    } else {
        (second, first_keys.1)
    };

    let mut pose = Pose::with_config(cfg);
    for (base_ref, ref_second) in base_key.object_refs.iter().zip(&second_keys.0.object_refs) {
        let info_first = sample_object(first, base_ref, adjusted_first);
        let info_second = sample_object(second, ref_second, adjusted_second);
        let mut info = info_first.blend_closer(&info_second, factor);

        if let Some(index) = base_ref.parent {
            info.spatial.apply_parent(&bones[index]);
        }
        place_object(cfg, data, base.timeline(base_ref.timeline), info, &mut pose);
    }
    pose
}
