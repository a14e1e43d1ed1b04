// Host-side tests for the stack and explosion layout engines.

use folio_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn skills(creative: usize, engineering: usize) -> Vec<Item> {
    // Interleave the input so the reordering is exercised too.
    let mut items = Vec::new();
    for i in 0..creative.max(engineering) {
        if i < engineering {
            items.push(Item::new(format!("eng{i}"), Category::Engineering, 1));
        }
        if i < creative {
            items.push(Item::new(format!("cre{i}"), Category::Creative, 1));
        }
    }
    items
}

fn viewport() -> Viewport {
    Viewport::new(8.0, 5.0)
}

#[test]
fn landscape_columns_are_centred_and_evenly_spaced() {
    let cfg = LayoutConfig::landscape();
    for (a, b) in [(3, 2), (4, 4), (1, 5), (0, 3), (2, 0)] {
        let stack = compute_stack(&skills(a, b), viewport(), Orientation::Landscape, &cfg);
        assert_eq!(stack.positions.len(), a + b);

        let (left, right) = stack.positions.split_at(a);
        assert!(left.iter().all(|p| p.x == -cfg.column_offset));
        assert!(right.iter().all(|p| p.x == cfg.column_offset));

        for column in [left, right] {
            for pair in column.windows(2) {
                assert!(approx(pair[0].y - pair[1].y, cfg.spacing));
            }
            let sum: f32 = column.iter().map(|p| p.y).sum();
            assert!(approx(sum, 0.0), "column not centred: {column:?}");
            assert!(column.iter().all(|p| p.z == cfg.stack_z));
        }
    }
}

#[test]
fn stack_output_follows_category_order() {
    let stack = compute_stack(
        &skills(2, 2),
        viewport(),
        Orientation::Landscape,
        &LayoutConfig::landscape(),
    );
    let ids: Vec<_> = stack.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["cre0", "cre1", "eng0", "eng1"]);
}

#[test]
fn landscape_starts_off_screen_and_staggers_across_columns() {
    let cfg = LayoutConfig::landscape();
    let vp = viewport();
    let stack = compute_stack(&skills(2, 2), vp, Orientation::Landscape, &cfg);

    for i in 0..2 {
        let (rest, start) = (stack.positions[i], stack.start_positions[i]);
        assert!(approx(start.y - rest.y, vp.height + i as f32 * cfg.spacing));
        assert_eq!((start.x, start.z), (rest.x, rest.z));
    }
    for j in 0..2 {
        let (rest, start) = (stack.positions[2 + j], stack.start_positions[2 + j]);
        assert!(approx(rest.y - start.y, vp.height + j as f32 * cfg.spacing));
    }
    let s = cfg.stack_stagger_ms;
    assert_eq!(stack.delays_ms, vec![0, s, 2 * s, 3 * s]);
}

#[test]
fn resting_spacing_ignores_viewport() {
    let cfg = LayoutConfig::landscape();
    let small = compute_stack(&skills(3, 3), Viewport::new(4.0, 3.0), Orientation::Landscape, &cfg);
    let large = compute_stack(&skills(3, 3), Viewport::new(16.0, 9.0), Orientation::Landscape, &cfg);
    assert_eq!(small.positions, large.positions);
    assert_ne!(small.start_positions, large.start_positions);
}

#[test]
fn portrait_interlaces_categories() {
    let cfg = LayoutConfig::portrait();
    let stack = compute_stack(
        &skills(3, 2),
        Viewport::new(3.0, 6.0),
        Orientation::Portrait,
        &cfg,
    );
    // Output order: cre0 cre1 cre2 eng0 eng1; visual slots: cre0 eng0 cre1 eng1 cre2.
    let slot_of = [0usize, 2, 4, 1, 3];
    let total = 5.0f32;
    for (i, slot) in slot_of.iter().enumerate() {
        let p = stack.positions[i];
        let expected_y = ((total - 1.0) * 0.5 - *slot as f32) * cfg.spacing;
        assert!(approx(p.y, expected_y), "item {i}: {} vs {expected_y}", p.y);
        assert_eq!(p.z, cfg.stack_z);
        assert_eq!(stack.delays_ms[i], *slot as u32 * cfg.stack_stagger_ms);
    }
    assert!(stack.positions[..3].iter().all(|p| p.x == -cfg.column_offset));
    assert!(stack.positions[3..].iter().all(|p| p.x == cfg.column_offset));

    // Creative from above, engineering from below.
    assert!(stack.start_positions[0].y > stack.positions[0].y);
    assert!(stack.start_positions[3].y < stack.positions[3].y);
}

#[test]
fn empty_stack_is_empty() {
    let stack = compute_stack(&[], viewport(), Orientation::Portrait, &LayoutConfig::portrait());
    assert!(stack.positions.is_empty());
    assert!(stack.start_positions.is_empty());
    assert!(stack.delays_ms.is_empty());
}

#[test]
fn explosion_places_selected_at_origin_and_rest_on_circle() {
    let cfg = LayoutConfig::landscape();
    let items: Vec<_> = (1..=5)
        .map(|i| Item::new(format!("item{i}"), Category::Creative, 1))
        .collect();
    let vp = Viewport::new(8.0, 5.0);
    let layout = compute_explosion(&items, vp, "item3", &cfg).unwrap();

    assert_eq!(layout.selected_index, 2);
    assert_eq!(layout.positions[2], glam::Vec3::ZERO);

    let radius = 8.0 * 1.5;
    let expected = [(0, 0.0), (1, FRAC_PI_2), (3, PI), (4, 3.0 * FRAC_PI_2)];
    for (i, angle) in expected {
        let p = layout.positions[i];
        assert!(approx(p.x, angle.cos() * radius), "item {i} x {}", p.x);
        assert!(approx(p.y, angle.sin() * radius), "item {i} y {}", p.y);
        assert_eq!(p.z, cfg.explosion_z);
    }

    let s = cfg.explosion_stagger_ms;
    assert_eq!(layout.delays_ms, vec![0, s, 0, 3 * s, 4 * s]);
}

#[test]
fn explosion_with_only_the_selected_item() {
    let items = vec![Item::new("solo", Category::Engineering, 1)];
    let layout = compute_explosion(&items, viewport(), "solo", &LayoutConfig::portrait()).unwrap();
    assert_eq!(layout.positions, vec![glam::Vec3::ZERO]);
    assert_eq!(layout.delays_ms, vec![0]);
}

#[test]
fn explosion_of_unknown_item_is_none() {
    let items = skills(2, 2);
    assert!(compute_explosion(&items, viewport(), "nope", &LayoutConfig::landscape()).is_none());
}

#[test]
fn explosion_radius_follows_larger_viewport_side() {
    let cfg = LayoutConfig::portrait();
    let items = skills(1, 1);
    let layout = compute_explosion(&items, Viewport::new(3.0, 6.0), "cre0", &cfg).unwrap();
    let other = layout.positions[1 - layout.selected_index];
    assert!(approx(other.truncate().length(), 6.0 * cfg.radius_multiplier));
}
