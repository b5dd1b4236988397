//! Scalar interpolation helpers:
//! - lerp / reverse_lerp
//! - angle_lerp (spin-directed) and closer_angle_lerp (nearest direction)
//! - polynomial curve helpers used by the quadratic..quintic curve types
//! - bezier_ease (cubic-bezier timing solved by bisection)

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `v` between `a` and `b`. A zero span yields 0.
#[inline]
pub fn reverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    (v - a) / span
}

/// Wrap degrees into [0, 360).
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sign with 0 for 0, unlike `f32::signum`.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else if value > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Interpolate an angle in the direction given by `spin`.
/// `spin == 0` holds `a`; positive spins counter-clockwise, negative clockwise.
#[inline]
pub fn angle_lerp(a: f32, b: f32, spin: i32, t: f32) -> f32 {
    if spin == 0 {
        return a;
    }
    let mut b = b;
    if spin > 0 && b - a < 0.0 {
        b += 360.0;
    } else if spin < 0 && b - a > 0.0 {
        b -= 360.0;
    }
    wrap_degrees(lerp(a, b, t))
}

/// Interpolate an angle along whichever direction is numerically nearer.
#[inline]
pub fn closer_angle_lerp(a: f32, b: f32, t: f32) -> f32 {
    let (mut a, mut b) = (a, b);
    if (b - a).abs() >= 180.0 {
        if a < b {
            a += 360.0;
        } else {
            b += 360.0;
        }
    }
    wrap_degrees(lerp(a, b, t))
}

#[inline]
pub fn quadratic(a: f32, b: f32, c: f32, t: f32) -> f32 {
    lerp(lerp(a, b, t), lerp(b, c, t), t)
}

#[inline]
pub fn cubic(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    lerp(quadratic(a, b, c, t), quadratic(b, c, d, t), t)
}

#[inline]
pub fn quartic(a: f32, b: f32, c: f32, d: f32, e: f32, t: f32) -> f32 {
    lerp(cubic(a, b, c, d, t), cubic(b, c, d, e, t), t)
}

#[inline]
pub fn quintic(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, t: f32) -> f32 {
    lerp(quartic(a, b, c, d, e, t), quartic(b, c, d, e, f, t), t)
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
pub fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
