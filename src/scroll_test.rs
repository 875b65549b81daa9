#![allow(clippy::float_cmp)]

use super::*;

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("about", 0.0, 600.0),
        SectionBounds::new("research", 600.0, 800.0),
        SectionBounds::new("publications", 1400.0, 500.0),
        SectionBounds::new("contact", 1900.0, 300.0),
    ]
}

// =============================================================
// anchor_id / scroll_target
// =============================================================

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#research"), Some("research"));
}

#[test]
fn anchor_id_rejects_bare_hash() {
    assert_eq!(anchor_id("#"), None);
}

#[test]
fn anchor_id_rejects_external_href() {
    assert_eq!(anchor_id("https://example.org/#x"), None);
    assert_eq!(anchor_id(""), None);
}

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(scroll_target(900.0, 70.0), 830.0);
    assert_eq!(scroll_target(0.0, 70.0), -70.0);
}

// =============================================================
// SectionBounds / active_section
// =============================================================

#[test]
fn contains_is_half_open() {
    let s = SectionBounds::new("a", 100.0, 400.0);
    assert!(!s.contains(99.9));
    assert!(s.contains(100.0));
    assert!(s.contains(499.9));
    assert!(!s.contains(500.0));
}

#[test]
fn zero_height_section_never_contains() {
    let s = SectionBounds::new("empty", 100.0, 0.0);
    assert!(!s.contains(100.0));
}

#[test]
fn scrolled_to_150_activates_section_at_100() {
    let sections = vec![SectionBounds::new("research", 100.0, 400.0)];
    assert_eq!(active_section(&sections, 150.0, 100.0), Some("research"));
}

#[test]
fn top_of_page_activates_first_section() {
    assert_eq!(active_section(&page(), 0.0, 100.0), Some("about"));
}

#[test]
fn boundary_belongs_to_next_section() {
    // 500 + 100 = 600 is the first pixel of "research".
    assert_eq!(active_section(&page(), 500.0, 100.0), Some("research"));
}

#[test]
fn past_last_section_is_none() {
    assert_eq!(active_section(&page(), 5000.0, 100.0), None);
}

#[test]
fn no_sections_is_none() {
    assert_eq!(active_section(&[], 0.0, 100.0), None);
}

#[test]
fn overlapping_ranges_last_match_wins() {
    let sections = vec![SectionBounds::new("first", 0.0, 1000.0), SectionBounds::new("second", 200.0, 300.0)];
    assert_eq!(active_section(&sections, 150.0, 100.0), Some("second"));
    assert_eq!(active_section(&sections, 500.0, 100.0), Some("first"));
}

#[test]
fn at_most_one_section_for_every_offset() {
    let sections = page();
    let mut offset = -200.0;
    while offset < 2600.0 {
        let position = offset + 100.0;
        let matches = sections.iter().filter(|s| s.contains(position)).count();
        assert!(matches <= 1, "offset {offset} matched {matches} sections");
        let active = active_section(&sections, offset, 100.0);
        assert_eq!(active.is_some(), matches == 1);
        offset += 25.0;
    }
}

// =============================================================
// HeaderAutoHide
// =============================================================

#[test]
fn header_transforms() {
    assert_eq!(HeaderPosition::Shown.transform(), "translateY(0)");
    assert_eq!(HeaderPosition::Hidden.transform(), "translateY(-100%)");
}

#[test]
fn scrolling_down_past_threshold_hides() {
    let mut header = HeaderAutoHide::new(100.0);
    assert_eq!(header.on_scroll(50.0), HeaderPosition::Shown);
    assert_eq!(header.on_scroll(150.0), HeaderPosition::Hidden);
}

#[test]
fn scrolling_back_up_shows() {
    let mut header = HeaderAutoHide::new(100.0);
    header.on_scroll(50.0);
    header.on_scroll(150.0);
    assert_eq!(header.on_scroll(50.0), HeaderPosition::Shown);
}

#[test]
fn scrolling_down_below_threshold_stays_shown() {
    let mut header = HeaderAutoHide::new(100.0);
    assert_eq!(header.on_scroll(40.0), HeaderPosition::Shown);
    assert_eq!(header.on_scroll(100.0), HeaderPosition::Shown);
}

#[test]
fn small_upward_scroll_far_down_shows() {
    let mut header = HeaderAutoHide::new(100.0);
    header.on_scroll(2000.0);
    assert_eq!(header.on_scroll(1990.0), HeaderPosition::Shown);
}

#[test]
fn repeated_offset_shows() {
    let mut header = HeaderAutoHide::new(100.0);
    header.on_scroll(500.0);
    assert_eq!(header.on_scroll(500.0), HeaderPosition::Shown);
}

#[test]
fn last_scroll_top_updates_every_event() {
    let mut header = HeaderAutoHide::new(100.0);
    assert_eq!(header.last_scroll_top(), 0.0);
    header.on_scroll(300.0);
    assert_eq!(header.last_scroll_top(), 300.0);
    header.on_scroll(20.0);
    assert_eq!(header.last_scroll_top(), 20.0);
}
