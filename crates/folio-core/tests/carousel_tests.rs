// Host-side tests for the scroll-driven carousel driver.

use folio_core::*;

fn sections() -> Vec<Item> {
    vec![
        Item::new("Contents", Category::Creative, 2),
        Item::new("Editorial", Category::Creative, 2),
        Item::new("Graphics", Category::Creative, 2),
    ]
}

/// Raw scroll that produces `rotation` with the default sensitivity.
fn raw_for(rotation: f32) -> f32 {
    -rotation / CarouselConfig::default().sensitivity
}

#[test]
fn starts_on_first_item() {
    let driver = CarouselDriver::new(sections(), CarouselConfig::default());
    assert_eq!(driver.rotation(), 0.0);
    assert_eq!(driver.frames()[0].projection.phase, Phase::Stationary);
    assert_eq!(driver.frames()[1].projection.phase, Phase::Waiting);
    assert_eq!(driver.most_visible_item().map(|i| i.id.as_str()), Some("Contents"));
}

#[test]
fn rotation_is_clamped_to_extent() {
    let mut driver = CarouselDriver::new(sections(), CarouselConfig::default());
    let mut session = ScrollSession::new();

    session.push_delta(1000.0);
    driver.tick(&session);
    assert_eq!(driver.rotation(), 0.0);

    session.reset();
    session.push_delta(-1.0e6);
    driver.tick(&session);
    assert_eq!(driver.rotation(), driver.extent());
    assert!(driver
        .frames()
        .iter()
        .all(|f| f.projection.phase == Phase::Hidden));
}

#[test]
fn finished_fires_once_until_reset() {
    let mut driver = CarouselDriver::new(sections(), CarouselConfig::default());
    let mut session = ScrollSession::new();

    session.push_delta(raw_for(500.0));
    assert_eq!(driver.tick(&session), None);

    session.push_delta(-1.0e5);
    assert_eq!(driver.tick(&session), Some(CarouselSignal::Finished));
    assert_eq!(driver.tick(&session), None);
    session.push_delta(-10.0);
    assert_eq!(driver.tick(&session), None);
    assert!(driver.is_finished());

    driver.reset(&mut session);
    assert_eq!(session.raw(), 0.0);
    assert!(!driver.is_finished());
    assert_eq!(driver.rotation(), 0.0);

    session.push_delta(-1.0e5);
    assert_eq!(driver.tick(&session), Some(CarouselSignal::Finished));
}

#[test]
fn empty_carousel_never_finishes() {
    let mut driver = CarouselDriver::new(Vec::new(), CarouselConfig::default());
    let mut session = ScrollSession::new();
    session.push_delta(-100.0);
    assert_eq!(driver.tick(&session), None);
    assert_eq!(driver.find_most_visible(), None);
    assert!(driver.frames().is_empty());
}

#[test]
fn most_visible_follows_scroll() {
    let mut driver = CarouselDriver::new(sections(), CarouselConfig::default());
    let mut session = ScrollSession::new();

    session.push_delta(raw_for(400.0));
    driver.tick(&session);
    assert_eq!(driver.most_visible_item().map(|i| i.id.as_str()), Some("Editorial"));
    assert_eq!(driver.stationary_ids().collect::<Vec<_>>(), ["Editorial"]);
}

#[test]
fn most_visible_ties_pick_the_first() {
    let mut driver = CarouselDriver::new(sections(), CarouselConfig::default());
    let mut session = ScrollSession::new();
    // Past everything: all hidden at +90.
    session.push_delta(-1.0e6);
    driver.tick(&session);
    assert_eq!(driver.find_most_visible(), Some(0));
}

#[test]
fn non_finite_deltas_are_dropped() {
    let mut session = ScrollSession::new();
    session.push_delta(f32::NAN);
    session.push_delta(f32::INFINITY);
    session.push_delta(-3.0);
    assert_eq!(session.raw(), -3.0);
}

#[test]
fn swapping_items_resets_state() {
    let mut driver = CarouselDriver::new(sections(), CarouselConfig::default());
    let mut session = ScrollSession::new();
    session.push_delta(-1.0e5);
    driver.tick(&session);

    driver.set_items(vec![Item::new("Solo", Category::Engineering, 3)], &mut session);
    assert_eq!(session.raw(), 0.0);
    assert_eq!(driver.windows().len(), 1);
    assert_eq!(driver.frames()[0].id, "Solo");
    assert!(!driver.is_finished());
}

#[test]
fn content_with_large_page_counts_builds_a_carousel() {
    let index = ContentIndex::from_json(
        r#"[
            {"title": "Archive", "page_count": 4000000000, "category": "creative"},
            {"title": "Backlist", "page_count": 4000000000, "category": "creative"}
        ]"#,
    )
    .unwrap();
    let driver = CarouselDriver::new(index.items(), CarouselConfig::default());
    assert!(driver.extent().is_finite());
    assert!(driver.windows()[0].exit < driver.windows()[1].exit);
}
