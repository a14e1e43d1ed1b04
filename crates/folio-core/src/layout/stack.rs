use super::Viewport;
use crate::config::LayoutConfig;
use crate::gesture::Orientation;
use crate::item::{reorder_by_category, Category, Item};
use glam::Vec3;

/// Stack targets, index-aligned to `items` (creative first, then engineering).
#[derive(Clone, Debug, PartialEq)]
pub struct StackLayout {
    pub items: Vec<Item>,
    pub positions: Vec<Vec3>,
    pub start_positions: Vec<Vec3>,
    pub delays_ms: Vec<u32>,
}

impl StackLayout {
    fn with_capacity(items: Vec<Item>) -> Self {
        let n = items.len();
        Self {
            items,
            positions: Vec::with_capacity(n),
            start_positions: Vec::with_capacity(n),
            delays_ms: Vec::with_capacity(n),
        }
    }
}

pub fn compute_stack(
    items: &[Item],
    viewport: Viewport,
    orientation: Orientation,
    config: &LayoutConfig,
) -> StackLayout {
    let ordered = reorder_by_category(items);
    let creative = ordered
        .iter()
        .filter(|i| i.category == Category::Creative)
        .count();
    let engineering = ordered.len() - creative;

    let mut layout = StackLayout::with_capacity(ordered);
    match orientation {
        Orientation::Landscape => {
            landscape(&mut layout, creative, engineering, viewport, config)
        }
        Orientation::Portrait => portrait(&mut layout, creative, engineering, viewport, config),
    }
    layout
}

/// Vertical offset of `slot` in a run of `count`, centred on y = 0.
#[inline]
fn centred_y(slot: usize, count: usize, spacing: f32) -> f32 {
    ((count as f32 - 1.0) * 0.5 - slot as f32) * spacing
}

/// Off-screen start: creative drops in from above, engineering rises from below.
#[inline]
fn start_for(rest: Vec3, category: Category, slot: usize, viewport: Viewport, spacing: f32) -> Vec3 {
    let offset = viewport.height + slot as f32 * spacing;
    match category {
        Category::Creative => Vec3::new(rest.x, rest.y + offset, rest.z),
        Category::Engineering => Vec3::new(rest.x, rest.y - offset, rest.z),
    }
}

fn landscape(
    layout: &mut StackLayout,
    creative: usize,
    engineering: usize,
    viewport: Viewport,
    config: &LayoutConfig,
) {
    let columns = [
        (Category::Creative, creative, -config.column_offset),
        (Category::Engineering, engineering, config.column_offset),
    ];
    let mut delay_slot = 0u32;
    for (category, count, x) in columns {
        for local in 0..count {
            let rest = Vec3::new(x, centred_y(local, count, config.spacing), config.stack_z);
            layout.positions.push(rest);
            layout
                .start_positions
                .push(start_for(rest, category, local, viewport, config.spacing));
            layout.delays_ms.push(delay_slot * config.stack_stagger_ms);
            delay_slot += 1;
        }
    }
}

fn portrait(
    layout: &mut StackLayout,
    creative: usize,
    engineering: usize,
    viewport: Viewport,
    config: &LayoutConfig,
) {
    let total = creative + engineering;
    // Interlace A,B,A,B,...; the longer category runs on alone once the
    // shorter one is exhausted.
    let mut slots = vec![0usize; total];
    let mut slot = 0usize;
    for k in 0..creative.max(engineering) {
        if k < creative {
            slots[k] = slot;
            slot += 1;
        }
        if k < engineering {
            slots[creative + k] = slot;
            slot += 1;
        }
    }

    for (i, &slot) in slots.iter().enumerate() {
        let (category, x) = if i < creative {
            (Category::Creative, -config.column_offset)
        } else {
            (Category::Engineering, config.column_offset)
        };
        let rest = Vec3::new(x, centred_y(slot, total, config.spacing), config.stack_z);
        layout.positions.push(rest);
        layout
            .start_positions
            .push(start_for(rest, category, slot, viewport, config.spacing));
        layout.delays_ms.push(slot as u32 * config.stack_stagger_ms);
    }
}
