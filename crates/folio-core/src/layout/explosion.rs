use super::Viewport;
use crate::config::LayoutConfig;
use crate::item::Item;
use glam::Vec3;
use std::f32::consts::TAU;

/// Explosion targets, index-aligned to the input items.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionLayout {
    pub positions: Vec<Vec3>,
    pub delays_ms: Vec<u32>,
    pub selected_index: usize,
}

/// Move `selected_id` to the origin and spread the rest evenly on a circle.
///
/// `config` is the table for the current orientation; only its depth and
/// stagger differ between portrait and landscape. Returns `None` if no item
/// has `selected_id`. The caller may move the selected item to a
/// camera-relative focal point afterwards.
pub fn compute_explosion(
    items: &[Item],
    viewport: Viewport,
    selected_id: &str,
    config: &LayoutConfig,
) -> Option<ExplosionLayout> {
    let selected_index = items.iter().position(|i| i.id == selected_id)?;
    let n = items.len();

    let radius = viewport.max_extent() * config.radius_multiplier;
    let step = if n > 1 { TAU / (n - 1) as f32 } else { 0.0 };

    let mut positions = Vec::with_capacity(n);
    let mut delays_ms = Vec::with_capacity(n);
    let mut angle = 0.0f32;
    for i in 0..n {
        if i == selected_index {
            positions.push(Vec3::ZERO);
            delays_ms.push(0);
            continue;
        }
        positions.push(Vec3::new(
            angle.cos() * radius,
            angle.sin() * radius,
            config.explosion_z,
        ));
        delays_ms.push(i as u32 * config.explosion_stagger_ms);
        angle += step;
    }

    Some(ExplosionLayout {
        positions,
        delays_ms,
        selected_index,
    })
}
