//! Shared constants: default tunables, class names, and element ids.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on icons that should not be displayed.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Scroll spy ──────────────────────────────────────────────────

/// Lookahead added to the scroll offset so a section turns current slightly
/// before its top reaches the viewport top.
pub const SPY_LOOKAHEAD_PX: f64 = 300.0;

/// Viewport width at and above which nav labels are always shown.
pub const LABEL_BREAKPOINT_PX: u32 = 768;

/// Classes applied to the nav control bound to the current section.
pub const NAV_ACTIVE_CLASSES: &[&str] = &["nav-active", "bg-brand-orange", "text-white", "shadow-neon-orange"];

/// Classes applied to every other nav control.
pub const NAV_INACTIVE_CLASSES: &[&str] = &["text-gray-500", "dark:text-gray-400"];

// ── Navigation ──────────────────────────────────────────────────

/// Fixed header height subtracted from a section's top when scrolling to it.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Section id that always scrolls to the very top.
pub const HOME_SECTION_ID: &str = "home";

/// Section id targeted by the "get in touch" shortcuts.
pub const CONTACT_SECTION_ID: &str = "contact";

/// How long the ripple class stays on a clicked control.
pub const RIPPLE_MS: u32 = 600;

pub const RIPPLE_CLASS: &str = "ripple-active";
pub const NAV_CLICK_EFFECT_CLASS: &str = "nav-click-effect";
pub const MOBILE_RIPPLE_CLASS: &str = "mobile-ripple";

// ── Overlays ────────────────────────────────────────────────────

/// Delay between an in-panel link click and the panel closing.
pub const PANEL_CLOSE_DELAY_MS: u32 = 400;

/// Delay between unhiding the modal and applying `show`, so the CSS
/// transition engages.
pub const MODAL_SHOW_DELAY_MS: u32 = 10;

/// Length of the modal fade-out before the overlay is fully hidden.
pub const MODAL_HIDE_DELAY_MS: u32 = 300;

/// Class marking the mobile panel and reveal targets as active.
pub const ACTIVE_CLASS: &str = "active";

/// Class applied to the modal overlay once its transition has engaged.
pub const SHOW_CLASS: &str = "show";

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction at which a reveal target counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin: shrink the viewport bottom by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Document contract ───────────────────────────────────────────

pub mod ids {
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const SUN_ICON: &str = "sun-icon";
    pub const MOON_ICON: &str = "moon-icon";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const MOBILE_MENU_BUTTON: &str = "mobile-menu-btn";
    pub const MOBILE_MENU_CLOSE: &str = "mobile-menu-close";
    pub const GET_IN_TOUCH_DESKTOP: &str = "get-in-touch-btn";
    pub const GET_IN_TOUCH_MOBILE: &str = "get-in-touch-mobile";
    pub const MODAL_OVERLAY: &str = "modal-overlay";
    pub const MODAL_BODY: &str = "modal-body";
    pub const MODAL_CLOSE: &str = "modal-close";
    pub const PRIVACY_LINK: &str = "privacy-link";
    pub const TERMS_LINK: &str = "terms-link";
    pub const CONFIG_SCRIPT: &str = "page-behavior-config";
}

pub mod selectors {
    pub const SECTIONS: &str = "section[id]";
    pub const NAV_CONTROLS: &str = "nav button[data-section]";
    pub const MOBILE_LINKS: &str = ".mobile-nav-link";
    pub const MODAL_TRIGGERS: &str = "[data-modal]";
    pub const BRAND_MARK: &str = "header div[onclick]";
}
