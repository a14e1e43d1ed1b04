// Host-side tests for magazine navigation, page flips and content lookup.

use folio_core::*;

#[test]
fn magazine_navigation_wraps() {
    let mut nav = MagazineNav::default();
    assert_eq!(nav.current(), Magazine::Vague);
    assert_eq!(nav.previous(), Magazine::Smoke);
    assert_eq!(nav.next(), Magazine::Vague);
    assert_eq!(nav.next(), Magazine::Engineer);
    assert_eq!(nav.step(4), Magazine::Smoke);
}

#[test]
fn magazine_names_round_trip() {
    for m in Magazine::ALL {
        assert_eq!(Magazine::from_name(m.name()), Some(m));
    }
    assert_eq!(Magazine::from_name(" engineer "), Some(Magazine::Engineer));
    assert_eq!(Magazine::from_name("vogue"), None);
}

#[test]
fn wrap_index_handles_negative_and_empty() {
    assert_eq!(wrap_index(0, -1, 4), 3);
    assert_eq!(wrap_index(3, 1, 4), 0);
    assert_eq!(wrap_index(2, -9, 4), 1);
    assert_eq!(wrap_index(5, 1, 0), 0);
}

#[test]
fn page_book_clamps_both_ends() {
    let mut book = PageBook::new(2);
    assert!(book.is_closed());
    assert!(!book.flip_back());
    assert!(book.flip_forward());
    assert!(book.flip_forward());
    assert!(book.is_finished());
    assert!(!book.flip_forward());
    assert_eq!(book.current(), 2);
    book.close();
    assert_eq!(book.current(), 0);
}

#[test]
fn description_carousel_wraps() {
    let mut c = DescriptionCarousel::new(3);
    assert_eq!(c.previous(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.next(), 1);

    let mut empty = DescriptionCarousel::new(0);
    assert_eq!(empty.next(), 0);
}

#[test]
fn content_json_feeds_the_carousel() {
    let json = r#"[
        {"title": "Contents", "page_count": 2, "category": "creative"},
        {"title": "Shader Work", "page_count": 3, "category": "engineering"}
    ]"#;
    let index = ContentIndex::from_json(json).unwrap();
    let items = index.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].weight, 3);
    assert_eq!(items[1].category, Category::Engineering);
    assert_eq!(index.find("shaderwork").unwrap().title, "Shader Work");
    assert!(matches!(
        ContentIndex::from_json("{"),
        Err(FolioError::Serialization(_))
    ));
}

#[test]
fn selection_state_queues_only_user_changes() {
    let mut s = SelectionState::default();
    s.select("rust");
    s.select("rust");
    assert_eq!(s.take_outgoing(), Some(Some("rust".into())));
    assert_eq!(s.take_outgoing(), None);

    s.apply_external(Some("wgpu"));
    assert_eq!(s.selected(), Some("wgpu"));
    assert_eq!(s.take_outgoing(), None);

    s.clear();
    assert_eq!(s.take_outgoing(), Some(None));
    s.clear();
    assert_eq!(s.take_outgoing(), None);
}
