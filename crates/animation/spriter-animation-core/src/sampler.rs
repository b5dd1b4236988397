//! Public sampling entry points.

use log::trace;

use crate::blend::assemble_blended;
use crate::config::Config;
use crate::data::{Animation, SpriterData};
use crate::pose::{assemble, Pose};

/// Stateless pose sampler. Holds only configuration, so one sampler can be
/// shared across threads sampling the same dataset.
#[derive(Clone, Debug, Default)]
pub struct Sampler {
    cfg: Config,
}

impl Sampler {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Pose of `animation` at `t`. `data` is the dataset the animation belongs
    /// to; nested entity objects are looked up in it.
    pub fn sample(&self, data: &SpriterData, animation: &Animation, t: f32) -> Pose {
        let pose = assemble(&self.cfg, data, animation, t, None);
        trace!(
            "sampled '{}' at {t}: {} sprites, {} points, {} boxes",
            animation.name,
            pose.sprites.len(),
            pose.points.len(),
            pose.boxes.len()
        );
        pose
    }

    /// Pose blended from `first` (factor 0) to `second` (factor 1).
    /// `t` is expressed in `first`'s time scale; `second` is sampled at the
    /// same relative progress.
    pub fn sample_blended(
        &self,
        data: &SpriterData,
        first: &Animation,
        second: &Animation,
        t: f32,
        factor: f32,
    ) -> Pose {
        let factor = factor.clamp(0.0, 1.0);
        let pose = assemble_blended(&self.cfg, data, first, second, t, factor);
        trace!(
            "sampled '{}' x '{}' at {t} (factor {factor}): {} sprites",
            first.name,
            second.name,
            pose.sprites.len()
        );
        pose
    }
}

/// [`Sampler::sample`] with the default configuration.
pub fn sample(data: &SpriterData, animation: &Animation, t: f32) -> Pose {
    Sampler::default().sample(data, animation, t)
}

/// [`Sampler::sample_blended`] with the default configuration.
pub fn sample_blended(
    data: &SpriterData,
    first: &Animation,
    second: &Animation,
    t: f32,
    factor: f32,
) -> Pose {
    Sampler::default().sample_blended(data, first, second, t, factor)
}
