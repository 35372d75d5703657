use super::*;

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 500.0),
        SectionBounds::new("about", 500.0, 700.0),
        SectionBounds::new("contact", 1200.0, 400.0),
    ]
}

const CONTROLS: &[&str] = &["home", "about", "contact"];

fn active_sections(update: &SpyUpdate) -> Vec<&str> {
    update.controls.iter().filter(|c| c.active).map(|c| c.section.as_str()).collect()
}

// =============================================================
// SectionBounds
// =============================================================

#[test]
fn bounds_are_half_open() {
    let section = SectionBounds::new("about", 500.0, 700.0);
    assert!(!section.contains(499.9));
    assert!(section.contains(500.0));
    assert!(section.contains(1199.9));
    assert!(!section.contains(1200.0));
}

#[test]
fn zero_height_section_never_matches() {
    let section = SectionBounds::new("empty", 100.0, 0.0);
    assert!(!section.contains(100.0));
}

// =============================================================
// Probe mapping
// =============================================================

#[test]
fn probe_adds_lookahead() {
    let spy = ScrollSpy::new(300.0);
    assert!((spy.probe(250.0) - 550.0).abs() < f64::EPSILON);
}

#[test]
fn probe_positions_select_expected_sections() {
    let sections = vec![SectionBounds::new("s1", 0.0, 500.0), SectionBounds::new("s2", 500.0, 700.0)];
    assert_eq!(section_containing(300.0, &sections).map(|s| s.id.as_str()), Some("s1"));
    assert_eq!(section_containing(800.0, &sections).map(|s| s.id.as_str()), Some("s2"));
    assert_eq!(section_containing(5000.0, &sections), None);
}

#[test]
fn scroll_offset_is_shifted_by_lookahead() {
    let spy = ScrollSpy::new(300.0);
    let sections = page();
    // 250 + 300 = 550 is inside "about" although the viewport top is in "home".
    assert_eq!(spy.section_at(250.0, &sections).map(|s| s.id.as_str()), Some("about"));
    assert_eq!(spy.section_at(0.0, &sections).map(|s| s.id.as_str()), Some("home"));
}

#[test]
fn overlapping_sections_resolve_to_lowest_top() {
    let sections = vec![
        SectionBounds::new("late", 400.0, 600.0),
        SectionBounds::new("early", 0.0, 800.0),
    ];
    assert_eq!(section_containing(500.0, &sections).map(|s| s.id.as_str()), Some("early"));
}

#[test]
fn equal_tops_resolve_to_document_order() {
    let sections = vec![SectionBounds::new("first", 0.0, 800.0), SectionBounds::new("second", 0.0, 900.0)];
    assert_eq!(section_containing(100.0, &sections).map(|s| s.id.as_str()), Some("first"));
}

// =============================================================
// Control styling
// =============================================================

#[test]
fn only_bound_control_is_active() {
    let mut spy = ScrollSpy::new(300.0);
    let update = spy.update(400.0, true, &page(), CONTROLS);
    assert_eq!(update.current.as_deref(), Some("about"));
    assert_eq!(active_sections(&update), vec!["about"]);
}

#[test]
fn no_match_styles_everything_inactive() {
    let mut spy = ScrollSpy::new(300.0);
    spy.update(0.0, false, &page(), CONTROLS);
    let update = spy.update(5000.0, false, &page(), CONTROLS);
    assert_eq!(update.current, None);
    assert!(update.changed);
    assert!(active_sections(&update).is_empty());
    assert!(update.controls.iter().all(|c| c.label == LabelVisibility::Hide));
}

#[test]
fn narrow_viewport_hides_inactive_labels() {
    let mut spy = ScrollSpy::new(300.0);
    let update = spy.update(0.0, false, &page(), CONTROLS);
    let labels: Vec<LabelVisibility> = update.controls.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec![LabelVisibility::Show, LabelVisibility::Hide, LabelVisibility::Hide]);
}

#[test]
fn wide_viewport_never_hides_labels() {
    let mut spy = ScrollSpy::new(300.0);
    let update = spy.update(0.0, true, &page(), CONTROLS);
    let labels: Vec<LabelVisibility> = update.controls.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec![LabelVisibility::Show, LabelVisibility::Keep, LabelVisibility::Keep]);
}

#[test]
fn duplicate_controls_for_one_section_are_all_active() {
    let mut spy = ScrollSpy::new(300.0);
    let update = spy.update(1000.0, true, &page(), &["contact", "about", "contact"]);
    assert_eq!(active_sections(&update), vec!["contact", "contact"]);
}

#[test]
fn changed_only_when_section_switches() {
    let mut spy = ScrollSpy::new(300.0);
    assert!(spy.update(0.0, true, &page(), CONTROLS).changed);
    assert!(!spy.update(50.0, true, &page(), CONTROLS).changed);
    assert!(spy.update(400.0, true, &page(), CONTROLS).changed);
    assert_eq!(spy.current(), Some("about"));
}

#[test]
fn control_for_unknown_section_stays_inactive() {
    let mut spy = ScrollSpy::new(300.0);
    let update = spy.update(0.0, true, &page(), &["blog"]);
    assert!(!update.controls[0].active);
    assert_eq!(update.controls[0].label, LabelVisibility::Keep);
}
