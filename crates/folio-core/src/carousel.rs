//! Scroll-driven paged carousel.
//!
//! A [`ScrollSession`] belongs to one mounted carousel view and accumulates
//! raw scroll deltas. [`CarouselDriver`] turns the accumulated value into a
//! clamped rotation and projects every item's phase from it once per tick.

use crate::config::CarouselConfig;
use crate::item::Item;
use crate::phase::{project, Phase, Projection};
use crate::threshold::{compute_thresholds, next_enter, total_extent, ThresholdWindow};
use serde::Serialize;

/// Accumulated scroll input for one carousel view.
///
/// Scrolling "forward" drives `raw` negative; it may run past either end,
/// clamping happens in the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSession {
    raw: f32,
}

impl ScrollSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_delta(&mut self, delta: f32) {
        if delta.is_finite() {
            self.raw += delta;
        }
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn reset(&mut self) {
        self.raw = 0.0;
    }
}

/// Per-item output of a carousel tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemFrame {
    pub id: String,
    #[serde(flatten)]
    pub projection: Projection,
}

/// Edge-triggered notifications to the carousel's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselSignal {
    /// Rotation reached the end of the last item for the first time since
    /// mount or the last reset.
    Finished,
}

pub struct CarouselDriver {
    items: Vec<Item>,
    windows: Vec<ThresholdWindow>,
    config: CarouselConfig,
    rotation: f32,
    frames: Vec<ItemFrame>,
    finished: bool,
}

impl CarouselDriver {
    pub fn new(items: Vec<Item>, config: CarouselConfig) -> Self {
        let windows = compute_thresholds(&items, config.unit_angle);
        let mut driver = Self {
            items,
            windows,
            config,
            rotation: 0.0,
            frames: Vec::new(),
            finished: false,
        };
        driver.project_all();
        driver
    }

    /// Swap the content set. Thresholds are recomputed and state resets.
    pub fn set_items(&mut self, items: Vec<Item>, session: &mut ScrollSession) {
        self.windows = compute_thresholds(&items, self.config.unit_angle);
        self.items = items;
        self.reset(session);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn windows(&self) -> &[ThresholdWindow] {
        &self.windows
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn extent(&self) -> f32 {
        total_extent(&self.windows, self.config.unit_angle)
    }

    pub fn frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recompute rotation and every item's projection from the session.
    pub fn tick(&mut self, session: &ScrollSession) -> Option<CarouselSignal> {
        let extent = self.extent();
        self.rotation = (-session.raw() * self.config.sensitivity).clamp(0.0, extent);
        self.project_all();

        if !self.items.is_empty() && !self.finished && self.rotation >= extent {
            self.finished = true;
            log::debug!("[carousel] finished at rotation {:.2}", self.rotation);
            return Some(CarouselSignal::Finished);
        }
        None
    }

    /// Index of the item closest to centre, first one on ties.
    pub fn find_most_visible(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, frame) in self.frames.iter().enumerate() {
            let a = frame.projection.rotation_angle.abs();
            match best {
                Some((_, b)) if a >= b => {}
                _ => best = Some((i, a)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn most_visible_item(&self) -> Option<&Item> {
        self.find_most_visible().and_then(|i| self.items.get(i))
    }

    /// Items currently in the stationary phase.
    pub fn stationary_ids(&self) -> impl Iterator<Item = &str> {
        self.frames
            .iter()
            .filter(|f| f.projection.phase == Phase::Stationary)
            .map(|f| f.id.as_str())
    }

    pub fn reset(&mut self, session: &mut ScrollSession) {
        session.reset();
        self.rotation = 0.0;
        self.finished = false;
        self.project_all();
    }

    fn project_all(&mut self) {
        let unit = self.config.unit_angle;
        self.frames.clear();
        for (i, (item, window)) in self.items.iter().zip(&self.windows).enumerate() {
            let next = next_enter(&self.windows, i, unit);
            self.frames.push(ItemFrame {
                id: item.id.clone(),
                projection: project(self.rotation, window, next),
            });
        }
    }
}
