//! Per-frame exponential interpolation toward layout targets.
//!
//! Every tick moves each in-motion value a fixed fraction of the remaining
//! distance toward its target. There is no velocity, so values never
//! overshoot. A value within `settle_epsilon` of its target snaps onto it and
//! leaves the moving set; that transition is reported once.

use crate::config::AnimationConfig;
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use smallvec::SmallVec;

#[inline]
pub fn lerp(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Component-wise lerp with an independent rate per axis.
#[inline]
pub fn lerp_axes(current: Vec3, target: Vec3, rates: Vec3) -> Vec3 {
    current + (target - current) * rates
}

/// Pick the scale rate: growing and shrinking settle at different speeds.
#[inline]
pub fn scale_rate(current: f32, target: f32, config: &AnimationConfig) -> f32 {
    if target > current {
        config.scale_grow_rate
    } else {
        config.scale_shrink_rate
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub position: Vec3,
    pub target_position: Vec3,
    pub scale: f32,
    pub target_scale: f32,
}

impl Track {
    fn at_rest(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            target_position: position,
            scale,
            target_scale: scale,
        }
    }

    fn is_near_target(&self, epsilon: f32) -> bool {
        self.position.distance(self.target_position) < epsilon
            && (self.scale - self.target_scale).abs() < epsilon
    }
}

/// Settle notifications from one tick; rarely more than a handful.
pub type Settled = SmallVec<[String; 4]>;

pub struct AnimationDriver {
    config: AnimationConfig,
    tracks: FnvHashMap<String, Track>,
    moving: FnvHashSet<String>,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            tracks: FnvHashMap::default(),
            moving: FnvHashSet::default(),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Put `id` at `position` immediately, without animating.
    pub fn place(&mut self, id: &str, position: Vec3, scale: f32) {
        self.tracks
            .insert(id.to_string(), Track::at_rest(position, scale));
        self.moving.remove(id);
    }

    /// Retarget `id`. Unknown ids start at rest on the target.
    pub fn set_target(&mut self, id: &str, position: Vec3, scale: f32) {
        let eps = self.config.settle_epsilon;
        let track = self
            .tracks
            .entry(id.to_string())
            .or_insert_with(|| Track::at_rest(position, scale));
        track.target_position = position;
        track.target_scale = scale;
        if !track.is_near_target(eps) {
            self.moving.insert(id.to_string());
        }
    }

    /// One interpolation step for every moving track.
    pub fn tick(&mut self) -> Settled {
        let mut settled = Settled::new();
        let eps = self.config.settle_epsilon;
        let rates = self.config.position_rates;
        for id in &self.moving {
            let Some(track) = self.tracks.get_mut(id) else {
                settled.push(id.clone());
                continue;
            };
            track.position = lerp_axes(track.position, track.target_position, rates);
            let rate = scale_rate(track.scale, track.target_scale, &self.config);
            track.scale = lerp(track.scale, track.target_scale, rate);
            if track.is_near_target(eps) {
                track.position = track.target_position;
                track.scale = track.target_scale;
                settled.push(id.clone());
            }
        }
        for id in &settled {
            self.moving.remove(id);
        }
        settled
    }

    /// Freeze every track where it is. Pending motion is dropped.
    pub fn halt(&mut self) {
        for id in self.moving.drain() {
            if let Some(track) = self.tracks.get_mut(&id) {
                track.target_position = track.position;
                track.target_scale = track.scale;
            }
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.tracks.remove(id);
        self.moving.remove(id);
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn is_moving(&self, id: &str) -> bool {
        self.moving.contains(id)
    }

    pub fn any_moving(&self) -> bool {
        !self.moving.is_empty()
    }
}
