//! Interpolation helpers and curve evaluation.

pub mod functions;

use crate::data::CurveType;
use functions::{bezier_ease, cubic, quadratic, quartic, quintic};

impl CurveType {
    /// Map a raw segment ratio in [0,1] to the eased blend factor.
    pub fn apply(&self, f: f32) -> f32 {
        match *self {
            CurveType::Instant => 0.0,
            CurveType::Linear => f,
            CurveType::Quadratic { c1 } => quadratic(0.0, c1, 1.0, f),
            CurveType::Cubic { c1, c2 } => cubic(0.0, c1, c2, 1.0, f),
            CurveType::Quartic { c1, c2, c3 } => quartic(0.0, c1, c2, c3, 1.0, f),
            CurveType::Quintic { c1, c2, c3, c4 } => quintic(0.0, c1, c2, c3, c4, 1.0, f),
            CurveType::Bezier { c1, c2, c3, c4 } => bezier_ease(f, c1, c2, c3, c4),
        }
    }
}
