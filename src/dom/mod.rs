//! Browser wiring: resolves the page's markup and attaches every behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. Each feature is wired
//! independently; one whose markup is missing is logged and skipped so the
//! rest of the page keeps working.

pub mod elements;
pub mod host;
pub mod icons;
pub mod storage;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::BehaviorConfig;
use crate::consts::{
    ACTIVE_CLASS, HIDDEN_CLASS, MOBILE_RIPPLE_CLASS, NAV_ACTIVE_CLASSES, NAV_CLICK_EFFECT_CLASS, NAV_INACTIVE_CLASSES,
    ids, selectors,
};
use crate::content::ModalContent;
use crate::error::BehaviorError;
use crate::navigation::{ContactShortcut, LinkTarget};
use crate::page::PageCore;
use crate::reveal::RevealVariant;
use crate::scroll_spy::{LabelVisibility, SectionBounds};
use crate::theme::{Theme, ThemeChange, ThemeStore};

use self::elements::{
    by_id, document, find_by_id, js_error, listen, query, query_all, report, ripple, set_class, set_classes,
};
use self::host::Host;
use self::icons::render_icons;
use self::storage::BrowserStorage;

const REVEAL_SLOT_ATTR: &str = "data-reveal-slot";

/// Install logging and mount once the document is parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        // A second start keeps the logger that is already installed.
        log::debug!("logging: {e}");
    }

    let Ok(window) = elements::window() else {
        return;
    };
    let Ok(doc) = document(&window) else {
        return;
    };
    if doc.ready_state() == "loading" {
        report("mount", listen(&doc, "DOMContentLoaded", |_| mount()));
    } else {
        mount();
    }
}

/// Wire every behavior against the current document.
pub fn mount() {
    let (window, doc) = match elements::window().and_then(|w| document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("mount: {e}");
            return;
        }
    };

    report("icons", render_icons(&window));

    let config = load_config(&doc);
    let host = Rc::new(Host {
        core: RefCell::new(PageCore::new(config.clone(), ModalContent::builtin())),
        body: doc.body(),
        panel: find_by_id(&doc, ids::MOBILE_MENU),
        modal_overlay: find_by_id(&doc, ids::MODAL_OVERLAY),
        modal_body: find_by_id(&doc, ids::MODAL_BODY),
        window,
        document: doc,
    });

    report("theme", wire_theme(&host, &config));
    report("reveal", wire_reveal(&host, &config));
    report("scroll spy", wire_scroll_spy(&host, &config));
    report("navigation", wire_navigation(&host, &config));
    report("mobile panel", wire_mobile_panel(&host, &config));
    report("modal", wire_modal(&host));
    log::info!("page behaviors mounted");
}

/// Inline JSON overrides, falling back to defaults on any problem.
fn load_config(doc: &Document) -> BehaviorConfig {
    let Some(script) = doc.get_element_by_id(ids::CONFIG_SCRIPT) else {
        return BehaviorConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    BehaviorConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("config: {e}; using defaults");
        BehaviorConfig::default()
    })
}

// --- Theme ---

fn wire_theme(host: &Rc<Host>, config: &BehaviorConfig) -> Result<(), BehaviorError> {
    let storage = BrowserStorage::open(&host.window);
    let store = ThemeStore::new(storage, config.storage_key.clone(), config.default_theme);
    apply_theme(host, ThemeChange::from(store.applied()));

    let toggle = by_id(&host.document, ids::THEME_TOGGLE)?;
    let store = Rc::new(RefCell::new(store));
    let host_cb = Rc::clone(host);
    listen(&toggle, "click", move |_| {
        let live = live_theme(&host_cb);
        let change = store.borrow_mut().toggle(live);
        apply_theme(&host_cb, change);
    })
}

fn live_theme(host: &Host) -> Theme {
    let is_dark = host
        .document
        .document_element()
        .is_some_and(|root| root.class_list().contains(Theme::Dark.as_str()));
    Theme::from_dark_flag(is_dark)
}

fn apply_theme(host: &Host, change: ThemeChange) {
    if let Some(root) = host.document.document_element() {
        root.set_class_name(change.theme.as_str());
    }
    if let Ok(sun) = by_id(&host.document, ids::SUN_ICON) {
        set_class(&sun, HIDDEN_CLASS, !change.icons.sun_visible);
    }
    if let Ok(moon) = by_id(&host.document, ids::MOON_ICON) {
        set_class(&moon, HIDDEN_CLASS, !change.icons.moon_visible);
    }
}

// --- Reveal ---

fn wire_reveal(host: &Rc<Host>, config: &BehaviorConfig) -> Result<(), BehaviorError> {
    let targets = query_all(&host.document, &RevealVariant::selector())?;
    if targets.is_empty() {
        return Err(BehaviorError::missing(RevealVariant::selector()));
    }

    let host_cb = Rc::clone(host);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(Ok(slot)) = target.get_attribute(REVEAL_SLOT_ATTR).map(|raw| raw.parse::<usize>()) else {
                continue;
            };
            let update = host_cb.core.borrow_mut().reveal.observe(slot, entry.is_intersecting());
            if let Some(update) = update {
                set_class(&target, ACTIVE_CLASS, update.active);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.reveal_threshold.into());
    options.set_root_margin(&config.reveal_root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| js_error("IntersectionObserver", &e))?;
    // Observation runs for the page's lifetime.
    callback.forget();

    for target in targets {
        let slot = host.core.borrow_mut().reveal.register();
        target.set_attribute(REVEAL_SLOT_ATTR, &slot.to_string()).map_err(|e| js_error("setAttribute", &e))?;
        observer.observe(&target);
    }
    Ok(())
}

// --- Scroll spy ---

struct SpyTargets {
    sections: Vec<HtmlElement>,
    controls: Vec<(HtmlElement, String)>,
    /// Viewport width class the controls were last styled for.
    styled_wide: Cell<Option<bool>>,
}

fn nav_controls(doc: &Document) -> Result<Vec<(HtmlElement, String)>, BehaviorError> {
    Ok(query_all(doc, selectors::NAV_CONTROLS)?
        .into_iter()
        .filter_map(|btn| btn.get_attribute("data-section").map(|id| (btn, id)))
        .collect())
}

fn wire_scroll_spy(host: &Rc<Host>, config: &BehaviorConfig) -> Result<(), BehaviorError> {
    let targets = Rc::new(SpyTargets {
        sections: query_all(&host.document, selectors::SECTIONS)?,
        controls: nav_controls(&host.document)?,
        styled_wide: Cell::new(None),
    });
    let query = config.wide_viewport_query();

    run_scroll_spy(host, &targets, &query);
    let host_cb = Rc::clone(host);
    listen(&host.window, "scroll", move |_| run_scroll_spy(&host_cb, &targets, &query))
}

fn run_scroll_spy(host: &Host, targets: &SpyTargets, wide_query: &str) {
    let scroll_y = host.window.scroll_y().unwrap_or_default();
    let wide = matches!(host.window.match_media(wide_query), Ok(Some(mql)) if mql.matches());
    let bounds: Vec<SectionBounds> = targets
        .sections
        .iter()
        .map(|section| {
            SectionBounds::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height()))
        })
        .collect();
    let ids: Vec<&str> = targets.controls.iter().map(|(_, id)| id.as_str()).collect();

    let update = host.core.borrow_mut().run_spy(scroll_y, wide, &bounds, &ids);
    let wide_changed = targets.styled_wide.replace(Some(wide)) != Some(wide);
    if !update.changed && !wide_changed {
        return;
    }
    for ((btn, _), state) in targets.controls.iter().zip(&update.controls) {
        set_classes(btn, NAV_ACTIVE_CLASSES, state.active);
        set_classes(btn, NAV_INACTIVE_CLASSES, !state.active);
        let Ok(Some(label)) = btn.query_selector("span") else {
            continue;
        };
        match state.label {
            LabelVisibility::Show => set_class(&label, HIDDEN_CLASS, false),
            LabelVisibility::Hide => set_class(&label, HIDDEN_CLASS, true),
            LabelVisibility::Keep => {}
        }
    }
}

// --- Navigation ---

fn wire_navigation(host: &Rc<Host>, config: &BehaviorConfig) -> Result<(), BehaviorError> {
    let ripple_ms = config.ripple_ms;
    for (btn, section) in nav_controls(&host.document)? {
        set_class(&btn, NAV_CLICK_EFFECT_CLASS, true);
        let host_cb = Rc::clone(host);
        let target = btn.clone();
        listen(&btn, "click", move |_| {
            ripple(&target, ripple_ms);
            host_cb.dispatch(|core| core.nav_clicked(&section));
        })?;
    }

    report(
        "brand mark",
        query(&host.document, selectors::BRAND_MARK).and_then(|logo| {
            let host_cb = Rc::clone(host);
            listen(&logo, "click", move |_| host_cb.dispatch(|core| core.brand_clicked()))
        }),
    );

    if let Ok(btn) = by_id(&host.document, ids::GET_IN_TOUCH_DESKTOP) {
        let host_cb = Rc::clone(host);
        listen(&btn, "click", move |_| host_cb.dispatch(|core| core.contact_clicked(ContactShortcut::Desktop)))?;
    }
    Ok(())
}

// --- Mobile panel ---

fn wire_mobile_panel(host: &Rc<Host>, config: &BehaviorConfig) -> Result<(), BehaviorError> {
    let ripple_ms = config.ripple_ms;

    if host.panel.is_some()
        && let Some(open_btn) = find_by_id(&host.document, ids::MOBILE_MENU_BUTTON)
    {
        let host_cb = Rc::clone(host);
        listen(&open_btn, "click", move |_| host_cb.dispatch(PageCore::open_panel))?;
    }

    if let Ok(close_btn) = by_id(&host.document, ids::MOBILE_MENU_CLOSE) {
        let host_cb = Rc::clone(host);
        listen(&close_btn, "click", move |_| host_cb.dispatch(PageCore::close_panel))?;
    }

    for link in query_all(&host.document, selectors::MOBILE_LINKS)? {
        set_class(&link, MOBILE_RIPPLE_CLASS, true);
        let host_cb = Rc::clone(host);
        let target_el = link.clone();
        listen(&link, "click", move |ev: Event| {
            ripple(&target_el, ripple_ms);
            let target = LinkTarget::from_href(&target_el.get_attribute("href").unwrap_or_default());
            if target.prevents_default() {
                ev.prevent_default();
            }
            host_cb.dispatch(|core| core.panel_link_clicked(&target));
        })?;
    }

    if let Ok(btn) = by_id(&host.document, ids::GET_IN_TOUCH_MOBILE) {
        set_class(&btn, MOBILE_RIPPLE_CLASS, true);
        let host_cb = Rc::clone(host);
        let target_el = btn.clone();
        listen(&btn, "click", move |_| {
            ripple(&target_el, ripple_ms);
            host_cb.dispatch(|core| core.contact_clicked(ContactShortcut::Mobile));
        })?;
    }
    Ok(())
}

// --- Modal ---

fn wire_modal(host: &Rc<Host>) -> Result<(), BehaviorError> {
    let Some(overlay) = host.modal_overlay.clone() else {
        return Err(BehaviorError::missing(format!("#{}", ids::MODAL_OVERLAY)));
    };
    if host.modal_body.is_none() {
        return Err(BehaviorError::missing(format!("#{}", ids::MODAL_BODY)));
    }

    let mut triggers: Vec<(HtmlElement, String)> = Vec::new();
    for (id, key) in [(ids::PRIVACY_LINK, "privacy"), (ids::TERMS_LINK, "terms")] {
        if let Ok(el) = by_id(&host.document, id) {
            triggers.push((el, key.to_owned()));
        }
    }
    for el in query_all(&host.document, selectors::MODAL_TRIGGERS)? {
        let key = el.get_attribute("data-modal").unwrap_or_default();
        triggers.push((el, key));
    }
    for (el, key) in triggers {
        let host_cb = Rc::clone(host);
        listen(&el, "click", move |_| host_cb.dispatch(|core| core.open_modal(&key)))?;
    }

    if let Ok(close_btn) = by_id(&host.document, ids::MODAL_CLOSE) {
        let host_cb = Rc::clone(host);
        listen(&close_btn, "click", move |_| host_cb.dispatch(PageCore::close_modal))?;
    }

    let host_cb = Rc::clone(host);
    let overlay_value: wasm_bindgen::JsValue = overlay.clone().into();
    listen(&overlay, "click", move |ev: Event| {
        let on_overlay = ev.target().is_some_and(|target| {
            let target: &wasm_bindgen::JsValue = target.as_ref();
            *target == overlay_value
        });
        host_cb.dispatch(|core| core.modal_overlay_clicked(on_overlay));
    })
}
