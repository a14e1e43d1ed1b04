//! Scroll windows for a sequence of weighted items.
//!
//! Each item reserves `weight * unit_angle` of rotation. An item after the
//! first starts entering half a unit before its stationary point.

use crate::item::Item;
use serde::Serialize;

/// Rotation values at which an item starts entering, becomes stationary and
/// starts exiting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThresholdWindow {
    pub enter: f32,
    pub stationary: f32,
    pub exit: f32,
    pub weight: u32,
}

pub fn compute_thresholds(items: &[Item], unit_angle: f32) -> Vec<ThresholdWindow> {
    let mut windows = Vec::with_capacity(items.len());
    // Unit counts are summed as integers and scaled once, so a weight-1 item
    // gets bit-identical `stationary` and `exit`.
    let mut cumulative = 0i64;
    for (i, item) in items.iter().enumerate() {
        let before = cumulative as f32 * unit_angle;
        cumulative += i64::from(item.weight);
        let exit = (cumulative - 1) as f32 * unit_angle;
        let window = if i == 0 {
            ThresholdWindow {
                enter: 0.0,
                stationary: 0.0,
                exit,
                weight: item.weight,
            }
        } else {
            ThresholdWindow {
                enter: before - 0.5 * unit_angle,
                stationary: before,
                exit,
                weight: item.weight,
            }
        };
        windows.push(window);
    }
    windows
}

/// Total rotation needed to scroll the last item fully out.
///
/// Zero for an empty list.
pub fn total_extent(windows: &[ThresholdWindow], unit_angle: f32) -> f32 {
    windows.last().map_or(0.0, |w| w.exit + unit_angle)
}

/// The `enter` of the item after `index`, or one unit past the last exit.
pub fn next_enter(windows: &[ThresholdWindow], index: usize, unit_angle: f32) -> f32 {
    match windows.get(index + 1) {
        Some(next) => next.enter,
        None => windows
            .get(index)
            .map_or(unit_angle, |w| w.exit + unit_angle),
    }
}
