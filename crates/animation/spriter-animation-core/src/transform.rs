//! Transform blending and parent composition.

use crate::data::{ObjectInfo, Spatial};
use crate::interp::functions::{angle_lerp, closer_angle_lerp, lerp, sign, wrap_degrees};

impl Spatial {
    /// Blend two keys of one timeline. The angle follows `spin`.
    pub fn interpolate(&self, other: &Spatial, f: f32, spin: i32) -> Spatial {
        Spatial {
            x: lerp(self.x, other.x, f),
            y: lerp(self.y, other.y, f),
            angle: angle_lerp(self.angle, other.angle, spin, f),
            scale_x: lerp(self.scale_x, other.scale_x, f),
            scale_y: lerp(self.scale_y, other.scale_y, f),
        }
    }

    /// Blend two animations' transforms. There is no authored spin across
    /// animations, so the angle takes the nearer direction.
    pub fn blend_closer(&self, other: &Spatial, f: f32) -> Spatial {
        Spatial {
            angle: closer_angle_lerp(self.angle, other.angle, f),
            ..self.interpolate(other, f, 1)
        }
    }

    /// Express `self` (given in `parent`'s space) in the parent's outer space.
    ///
    /// The offset is scaled, rotated and translated by the parent; scales
    /// multiply; a mirrored parent (negative scale product) reverses the
    /// child's rotation direction.
    pub fn apply_parent(&mut self, parent: &Spatial) {
        let px = parent.scale_x * self.x;
        let py = parent.scale_y * self.y;
        let (s, c) = parent.angle.to_radians().sin_cos();

        self.x = px * c - py * s + parent.x;
        self.y = px * s + py * c + parent.y;
        self.scale_x *= parent.scale_x;
        self.scale_y *= parent.scale_y;
        self.angle =
            wrap_degrees(parent.angle + sign(parent.scale_x * parent.scale_y) * self.angle);
    }

    /// Composed copy; see [`Spatial::apply_parent`].
    #[inline]
    pub fn in_parent(mut self, parent: &Spatial) -> Spatial {
        self.apply_parent(parent);
        self
    }
}

impl ObjectInfo {
    /// Blend two keys of one timeline. Identity fields (pivot, file, nested
    /// entity) come from `self`.
    pub fn interpolate(&self, other: &ObjectInfo, f: f32, spin: i32) -> ObjectInfo {
        ObjectInfo {
            spatial: self.spatial.interpolate(&other.spatial, f, spin),
            alpha: lerp(self.alpha, other.alpha, f),
            t: lerp(self.t, other.t, f),
            ..self.clone()
        }
    }

    /// Cross-animation blend; the angle takes the nearer direction.
    pub fn blend_closer(&self, other: &ObjectInfo, f: f32) -> ObjectInfo {
        ObjectInfo {
            spatial: self.spatial.blend_closer(&other.spatial, f),
            ..self.interpolate(other, f, 1)
        }
    }
}
