use super::*;

#[test]
fn starts_at_first_card() {
    let cursor = CarouselCursor::new(4);
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.len(), 4);
}

#[test]
fn prev_at_first_wraps_to_last() {
    let mut cursor = CarouselCursor::new(5);
    cursor.prev();
    assert_eq!(cursor.index(), 4);
}

#[test]
fn next_at_last_wraps_to_first() {
    let mut cursor = CarouselCursor::new(3);
    cursor.go_to(2);
    cursor.next();
    assert_eq!(cursor.index(), 0);
}

#[test]
fn next_then_prev_is_identity_from_every_index() {
    for len in 1..6 {
        for start in 0..len {
            let mut cursor = CarouselCursor::new(len);
            cursor.go_to(start);
            cursor.next();
            cursor.prev();
            assert_eq!(cursor.index(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn full_lap_returns_to_start() {
    let mut cursor = CarouselCursor::new(4);
    for _ in 0..4 {
        cursor.next();
    }
    assert_eq!(cursor.index(), 0);
    for _ in 0..4 {
        cursor.prev();
    }
    assert_eq!(cursor.index(), 0);
}

#[test]
fn single_card_stays_put() {
    let mut cursor = CarouselCursor::new(1);
    cursor.next();
    assert_eq!(cursor.index(), 0);
    cursor.prev();
    assert_eq!(cursor.index(), 0);
    assert!(!cursor.is_pageable());
}

#[test]
fn empty_list_is_inert() {
    let mut cursor = CarouselCursor::new(0);
    cursor.next();
    cursor.prev();
    cursor.go_to(0);
    assert_eq!(cursor.index(), 0);
    assert!(cursor.is_empty());
    assert!(!cursor.is_active(0));
}

#[test]
fn go_to_ignores_out_of_range() {
    let mut cursor = CarouselCursor::new(2);
    cursor.go_to(1);
    cursor.go_to(7);
    assert_eq!(cursor.index(), 1);
}

#[test]
fn entrance_delay_staggers_by_position() {
    assert_eq!(entrance_delay(0), Duration::ZERO);
    assert_eq!(entrance_delay(1), Duration::from_millis(150));
    assert_eq!(entrance_delay(4), Duration::from_millis(600));
    assert_eq!(card_style(2), "animation-delay: 300ms;");
}

#[test]
fn track_style_translates_by_whole_cards() {
    assert_eq!(track_style(0), "transform: translateX(-0%);");
    assert_eq!(track_style(3), "transform: translateX(-300%);");
}

#[test]
fn only_focal_card_is_active() {
    let mut cursor = CarouselCursor::new(3);
    cursor.next();
    assert_eq!(card_class(&cursor, 0), "cert-card");
    assert_eq!(card_class(&cursor, 1), "cert-card is-active");
    assert_eq!(card_class(&cursor, 2), "cert-card");
}
