//! Tap / swipe disambiguation.
//!
//! A gesture is classified exactly once, when the pointer is released. The
//! result gates two mutually exclusive action families: click-style toggles
//! (tap) and drag-follow navigation (swipe).

use crate::config::InteractionConfig;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Portrait when the viewport is taller than it is wide.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        if width < height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Gesture {
    Tap,
    Swipe,
    Ignored,
}

/// A completed pointer drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    pub start_ms: f64,
    pub displacement: Vec2,
    pub duration_ms: f32,
}

impl DragGesture {
    pub fn total_movement(&self) -> f32 {
        self.displacement.length()
    }

    /// Horizontal swipe direction if |dx| dominates |dy|: -1 left, 1 right.
    pub fn horizontal_direction(&self) -> Option<i32> {
        let d = self.displacement;
        (d.x.abs() > d.y.abs() && d.x != 0.0).then(|| if d.x > 0.0 { 1 } else { -1 })
    }
}

/// Tracks one pointer from press to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    start: Option<(f64, Vec2)>,
    last: Vec2,
}

impl DragTracker {
    pub fn begin(&mut self, now_ms: f64, pos: Vec2) {
        self.start = Some((now_ms, pos));
        self.last = pos;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Record a move and return the delta since the previous sample.
    pub fn update(&mut self, pos: Vec2) -> Option<Vec2> {
        self.start?;
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    /// Finish the drag. `None` if no drag was in progress.
    pub fn end(&mut self, now_ms: f64, pos: Vec2) -> Option<DragGesture> {
        let (start_ms, start_pos) = self.start.take()?;
        Some(DragGesture {
            start_ms,
            displacement: pos - start_pos,
            duration_ms: (now_ms - start_ms).max(0.0) as f32,
        })
    }

    /// Offset of the latest sample from the press point.
    pub fn displacement(&self) -> Option<Vec2> {
        self.start.map(|(_, pos)| self.last - pos)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Live vertical drag scrolling that stays out of the tap family.
///
/// Nothing is streamed while the press could still be a tap. Once the pointer
/// leaves tap range on a mostly vertical path, the whole offset so far is
/// released and later vertical steps follow directly. A press that streamed
/// can no longer resolve to a tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragScroll {
    streaming: bool,
}

impl DragScroll {
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Vertical pixels to scroll for one pointer move, if any.
    pub fn on_move(&mut self, delta: Vec2, displacement: Vec2, tap_max_movement_px: f32) -> Option<f32> {
        if self.streaming {
            return (delta.y.abs() > delta.x.abs()).then_some(delta.y);
        }
        if displacement.length() < tap_max_movement_px
            || displacement.y.abs() <= displacement.x.abs()
        {
            return None;
        }
        self.streaming = true;
        Some(displacement.y)
    }

    /// Close the press and filter its classification.
    pub fn finish(&mut self, gesture: Gesture) -> Gesture {
        let streamed = std::mem::take(&mut self.streaming);
        match gesture {
            Gesture::Tap if streamed => Gesture::Ignored,
            g => g,
        }
    }

    pub fn reset(&mut self) {
        self.streaming = false;
    }
}

pub fn classify(
    duration_ms: f32,
    total_movement_px: f32,
    delta_x_px: f32,
    orientation: Orientation,
    config: &InteractionConfig,
) -> Gesture {
    let tap = config.tap(orientation);
    if duration_ms < tap.max_duration_ms && total_movement_px < tap.max_movement_px {
        Gesture::Tap
    } else if delta_x_px.abs() > config.swipe_min_movement_px {
        Gesture::Swipe
    } else {
        Gesture::Ignored
    }
}

pub fn classify_drag(
    drag: &DragGesture,
    orientation: Orientation,
    config: &InteractionConfig,
) -> Gesture {
    classify(
        drag.duration_ms,
        drag.total_movement(),
        drag.displacement.x,
        orientation,
        config,
    )
}
