//! Key location and per-timeline sampling.
//!
//! Model:
//! - Mainline keys bracket a query time as (current, next); the next key wraps
//!   to the first one unconditionally.
//! - Inside a timeline the next key wraps only for looping animations; a
//!   non-looping animation holds its last key.
//! - Segments whose second key is not after the first one (wrap-around
//!   segments) are measured across the animation's end.
//! - The raw segment ratio goes through the first key's curve.

use crate::data::{Animation, CurveType, MainlineKey, ObjectInfo, Ref, Spatial, TimelineKey};
use crate::interp::functions::{lerp, reverse_lerp};

/// A key with a time and the curve that governs the segment it starts.
pub trait TimedKey {
    fn time(&self) -> f32;
    fn curve(&self) -> &CurveType;
}

impl TimedKey for MainlineKey {
    #[inline]
    fn time(&self) -> f32 {
        self.time
    }
    #[inline]
    fn curve(&self) -> &CurveType {
        &self.curve
    }
}

impl TimedKey for TimelineKey {
    #[inline]
    fn time(&self) -> f32 {
        self.time
    }
    #[inline]
    fn curve(&self) -> &CurveType {
        &self.curve
    }
}

/// Bring a query time into the animation's domain: looping animations wrap
/// into [0, length), others clamp to [0, length].
pub fn normalize_time(animation: &Animation, t: f32) -> f32 {
    let length = animation.length;
    if length <= 0.0 || !t.is_finite() {
        return 0.0;
    }
    if animation.looping {
        let m = t.rem_euclid(length);
        if m >= length {
            0.0
        } else {
            m
        }
    } else {
        t.clamp(0.0, length)
    }
}

/// Index of the last key whose time is <= `t` (keys sorted by time).
/// Falls back to the first key when every key starts after `t`.
pub fn last_key_for_time<K: TimedKey>(keys: &[K], t: f32) -> usize {
    keys.partition_point(|k| k.time() <= t).saturating_sub(1)
}

/// Bracketing mainline keys (current, next) for `t`. The next key wraps.
pub fn locate_mainline(keys: &[MainlineKey], t: f32) -> (usize, usize) {
    let a = last_key_for_time(keys, t);
    let b = if a + 1 >= keys.len() { 0 } else { a + 1 };
    (a, b)
}

/// Key following `index` inside a timeline, or `None` when the value holds.
pub fn next_timeline_key(
    keys: &[TimelineKey],
    index: usize,
    looping: bool,
) -> Option<&TimelineKey> {
    if keys.len() <= 1 {
        return None;
    }
    let next = index + 1;
    if next >= keys.len() {
        if !looping {
            return None;
        }
        return keys.first();
    }
    keys.get(next)
}

/// Eased blend factor in [0,1] for `t` inside the segment `a -> b`.
/// A zero-length segment yields 0 (the first key's value).
pub fn factor<K: TimedKey>(a: &K, b: &K, length: f32, t: f32) -> f32 {
    let time_a = a.time();
    let mut time_b = b.time();
    let mut t = t;
    if time_b <= time_a {
        time_b += length;
        if t < time_a {
            t += length;
        }
    }
    let raw = reverse_lerp(time_a, time_b, t).clamp(0.0, 1.0);
    a.curve().apply(raw)
}

/// Re-derive an absolute time for `t` after the segment's curve is applied.
pub fn adjust_time<K: TimedKey>(a: &K, b: &K, length: f32, t: f32) -> f32 {
    let next = if b.time() > a.time() { b.time() } else { length };
    lerp(a.time(), next, factor(a, b, length, t))
}

/// Local transform of a bone ref at `t`.
pub fn sample_bone(animation: &Animation, bone: &Ref, t: f32) -> Spatial {
    let keys = &animation.timeline(bone.timeline).keys;
    let key_a = &keys[bone.key];
    match next_timeline_key(keys, bone.key, animation.looping) {
        None => key_a.payload.spatial(),
        Some(key_b) => {
            let f = factor(key_a, key_b, animation.length, t);
            key_a
                .payload
                .spatial()
                .interpolate(&key_b.payload.spatial(), f, key_a.spin)
        }
    }
}

/// Local transform (and object fields) of an object ref at `t`.
pub fn sample_object(animation: &Animation, object: &Ref, t: f32) -> ObjectInfo {
    let keys = &animation.timeline(object.timeline).keys;
    let key_a = &keys[object.key];
    match next_timeline_key(keys, object.key, animation.looping) {
        None => key_a.payload.object(),
        Some(key_b) => {
            let f = factor(key_a, key_b, animation.length, t);
            key_a
                .payload
                .object()
                .interpolate(&key_b.payload.object(), f, key_a.spin)
        }
    }
}
