use super::*;
use crate::theme::Theme;

// =============================================================
// Harness: a fake document plus a virtual clock for scheduled wakes
// =============================================================

#[derive(Debug)]
struct FakeDocument {
    panel_open: bool,
    modal_hidden: bool,
    modal_shown: bool,
    modal_body: &'static str,
    scroll_suppressed: bool,
    icon_renders: usize,
    scrolls: Vec<String>,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self {
            panel_open: false,
            modal_hidden: true,
            modal_shown: false,
            modal_body: "",
            scroll_suppressed: false,
            icon_renders: 0,
            scrolls: Vec::new(),
        }
    }
}

struct Harness {
    core: PageCore,
    doc: FakeDocument,
    now_ms: u64,
    pending: Vec<(u64, Wake)>,
}

impl Harness {
    fn new() -> Self {
        Self { core: PageCore::default(), doc: FakeDocument::default(), now_ms: 0, pending: Vec::new() }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetPanelOpen(open) => self.doc.panel_open = open,
                Effect::SetModalBody(html) => self.doc.modal_body = html,
                Effect::SetModalHidden(hidden) => self.doc.modal_hidden = hidden,
                Effect::SetModalShown(shown) => self.doc.modal_shown = shown,
                Effect::RenderIcons => self.doc.icon_renders += 1,
                Effect::SetScrollSuppressed(suppressed) => self.doc.scroll_suppressed = suppressed,
                Effect::ScrollToSection(id) => self.doc.scrolls.push(id),
                Effect::ScrollToTop => self.doc.scrolls.push("<top>".into()),
                Effect::Schedule { delay_ms, wake } => self.pending.push((self.now_ms + u64::from(delay_ms), wake)),
            }
        }
    }

    /// Advance the clock, firing due wakes in deadline order.
    fn advance(&mut self, ms: u64) {
        let until = self.now_ms + ms;
        loop {
            self.pending.sort_by_key(|(due, _)| *due);
            let Some(&(due, _)) = self.pending.first() else {
                break;
            };
            if due > until {
                break;
            }
            let (due, wake) = self.pending.remove(0);
            self.now_ms = due;
            let effects = self.core.wake(wake);
            self.apply(effects);
        }
        self.now_ms = until;
    }

    fn open_panel(&mut self) {
        let effects = self.core.open_panel();
        self.apply(effects);
    }

    fn close_panel(&mut self) {
        let effects = self.core.close_panel();
        self.apply(effects);
    }

    fn open_modal(&mut self, key: &str) {
        let effects = self.core.open_modal(key);
        self.apply(effects);
    }

    fn close_modal(&mut self) {
        let effects = self.core.close_modal();
        self.apply(effects);
    }
}

// =============================================================
// Modal cycle
// =============================================================

#[test]
fn privacy_modal_shows_policy_and_locks_after_delay() {
    let mut h = Harness::new();
    h.open_modal("privacy");
    assert!(h.doc.modal_body.contains("Privacy Policy"));
    assert!(!h.doc.modal_hidden);
    assert!(!h.doc.modal_shown);
    assert!(!h.doc.scroll_suppressed);
    assert_eq!(h.doc.icon_renders, 1);

    h.advance(10);
    assert!(h.doc.modal_shown);
    assert!(h.doc.scroll_suppressed);
}

#[test]
fn unknown_modal_key_yields_empty_body() {
    let mut h = Harness::new();
    h.open_modal("privacy");
    h.advance(10);
    h.open_modal("xyz");
    assert_eq!(h.doc.modal_body, "");
}

#[test]
fn modal_close_eventually_hides_and_unlocks() {
    let mut h = Harness::new();
    h.open_modal("terms");
    h.advance(10);
    h.close_modal();
    assert!(!h.doc.modal_shown);
    assert!(!h.doc.modal_hidden);
    assert!(h.doc.scroll_suppressed);

    h.advance(299);
    assert!(!h.doc.modal_hidden);
    h.advance(1);
    assert!(h.doc.modal_hidden);
    assert!(!h.doc.scroll_suppressed);
}

#[test]
fn rapid_close_then_open_leaves_modal_visible() {
    let mut h = Harness::new();
    h.open_modal("privacy");
    h.advance(10);
    h.close_modal();
    h.advance(100);
    h.open_modal("methodology");
    h.advance(500);
    assert!(!h.doc.modal_hidden);
    assert!(h.doc.modal_shown);
    assert!(h.doc.scroll_suppressed);
    assert!(h.doc.modal_body.contains("Our Methodology"));
}

#[test]
fn overlay_background_click_closes_content_click_does_not() {
    let mut h = Harness::new();
    h.open_modal("purpose");
    h.advance(10);
    let effects = h.core.modal_overlay_clicked(false);
    h.apply(effects);
    h.advance(1000);
    assert!(h.doc.modal_shown);

    let effects = h.core.modal_overlay_clicked(true);
    h.apply(effects);
    h.advance(300);
    assert!(h.doc.modal_hidden);
}

// =============================================================
// Shared scroll lock
// =============================================================

#[test]
fn closing_modal_keeps_lock_while_panel_open() {
    let mut h = Harness::new();
    h.open_panel();
    h.open_modal("privacy");
    h.advance(10);
    assert!(h.doc.scroll_suppressed);

    h.close_modal();
    h.advance(300);
    assert!(h.doc.modal_hidden);
    assert!(h.doc.scroll_suppressed);

    h.close_panel();
    assert!(!h.doc.scroll_suppressed);
}

#[test]
fn closing_panel_keeps_lock_while_modal_open() {
    let mut h = Harness::new();
    h.open_modal("terms");
    h.advance(10);
    h.open_panel();
    h.close_panel();
    assert!(!h.doc.panel_open);
    assert!(h.doc.scroll_suppressed);

    h.close_modal();
    h.advance(300);
    assert!(!h.doc.scroll_suppressed);
}

// =============================================================
// Mobile panel and shortcuts
// =============================================================

#[test]
fn panel_anchor_link_closes_then_scrolls_after_delay() {
    let mut h = Harness::new();
    h.open_panel();
    let effects = h.core.panel_link_clicked(&LinkTarget::Anchor("projects".into()));
    h.apply(effects);

    h.advance(399);
    assert!(h.doc.panel_open);
    assert!(h.doc.scrolls.is_empty());

    h.advance(1);
    assert!(!h.doc.panel_open);
    assert!(!h.doc.scroll_suppressed);
    assert_eq!(h.doc.scrolls, vec!["projects".to_owned()]);
}

#[test]
fn panel_external_link_only_closes() {
    let mut h = Harness::new();
    h.open_panel();
    let effects = h.core.panel_link_clicked(&LinkTarget::External);
    h.apply(effects);
    h.advance(400);
    assert!(!h.doc.panel_open);
    assert!(h.doc.scrolls.is_empty());
}

#[test]
fn latest_panel_link_click_decides_the_scroll() {
    let mut h = Harness::new();
    h.open_panel();
    let effects = h.core.panel_link_clicked(&LinkTarget::Anchor("about".into()));
    h.apply(effects);
    h.advance(100);
    let effects = h.core.panel_link_clicked(&LinkTarget::Anchor("contact".into()));
    h.apply(effects);

    h.advance(300);
    assert!(h.doc.panel_open);
    assert!(h.doc.scrolls.is_empty());

    h.advance(700);
    assert!(!h.doc.panel_open);
    assert!(!h.doc.scroll_suppressed);
    assert_eq!(h.doc.scrolls, vec!["contact".to_owned()]);
}

#[test]
fn mobile_contact_overrides_pending_panel_link() {
    let mut h = Harness::new();
    h.open_panel();
    let effects = h.core.panel_link_clicked(&LinkTarget::Anchor("projects".into()));
    h.apply(effects);
    let effects = h.core.contact_clicked(ContactShortcut::Mobile);
    h.apply(effects);
    h.advance(1000);
    assert_eq!(h.doc.scrolls, vec!["contact".to_owned()]);
}

#[test]
fn desktop_contact_scrolls_immediately() {
    let mut h = Harness::new();
    let effects = h.core.contact_clicked(ContactShortcut::Desktop);
    h.apply(effects);
    assert_eq!(h.doc.scrolls, vec!["contact".to_owned()]);
    assert!(h.pending.is_empty());
}

#[test]
fn mobile_contact_closes_panel_then_scrolls() {
    let mut h = Harness::new();
    h.open_panel();
    let effects = h.core.contact_clicked(ContactShortcut::Mobile);
    h.apply(effects);
    assert!(h.doc.scrolls.is_empty());
    h.advance(400);
    assert!(!h.doc.panel_open);
    assert_eq!(h.doc.scrolls, vec!["contact".to_owned()]);
}

#[test]
fn contact_shortcut_uses_configured_section() {
    let config = BehaviorConfig { contact_section: "hire-me".into(), ..BehaviorConfig::default() };
    let mut core = PageCore::new(config, ModalContent::builtin());
    assert_eq!(core.contact_clicked(ContactShortcut::Desktop), vec![Effect::ScrollToSection("hire-me".into())]);
}

#[test]
fn nav_and_brand_clicks_scroll() {
    let core = PageCore::default();
    assert_eq!(core.nav_clicked("about"), vec![Effect::ScrollToSection("about".into())]);
    assert_eq!(core.brand_clicked(), vec![Effect::ScrollToTop]);
}

// =============================================================
// Wiring from config
// =============================================================

#[test]
fn core_respects_configured_delays_and_lookahead() {
    let config = BehaviorConfig {
        panel_close_delay_ms: 250,
        spy_lookahead_px: 100.0,
        default_theme: Theme::Light,
        ..BehaviorConfig::default()
    };
    let mut core = PageCore::new(config, ModalContent::builtin());
    let effects = core.panel_link_clicked(&LinkTarget::External);
    assert!(matches!(effects.as_slice(), [Effect::Schedule { delay_ms: 250, .. }]));

    let sections = [SectionBounds::new("home", 0.0, 500.0), SectionBounds::new("about", 500.0, 500.0)];
    let update = core.run_spy(450.0, true, &sections, &["home", "about"]);
    assert_eq!(update.current.as_deref(), Some("about"));
}
