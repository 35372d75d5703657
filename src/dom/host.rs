//! Applies core [`Effect`]s to the live document.
//!
//! ARCHITECTURE
//! ============
//! `Host` owns the shared `PageCore` and the overlay elements resolved at
//! mount. DOM listeners call [`Host::dispatch`]; the core borrow is released
//! before effects run, so a scheduled wake can re-enter the core safely.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::{ACTIVE_CLASS, HIDDEN_CLASS, SHOW_CLASS};
use crate::dom::elements::{by_id, js_error, report, set_class};
use crate::dom::icons::render_icons;
use crate::effect::{Effect, Wake};
use crate::page::PageCore;

pub struct Host {
    pub core: RefCell<PageCore>,
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub panel: Option<HtmlElement>,
    pub modal_overlay: Option<HtmlElement>,
    pub modal_body: Option<HtmlElement>,
}

impl Host {
    /// Run `f` against the core, then apply what it returns.
    pub fn dispatch<F>(self: &Rc<Self>, f: F)
    where
        F: FnOnce(&mut PageCore) -> Vec<Effect>,
    {
        let effects = f(&mut self.core.borrow_mut());
        self.apply(effects);
    }

    pub fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetPanelOpen(open) => {
                    if let Some(panel) = &self.panel {
                        set_class(panel, ACTIVE_CLASS, open);
                    }
                }
                Effect::SetModalBody(html) => {
                    if let Some(body) = &self.modal_body {
                        body.set_inner_html(html);
                    }
                }
                Effect::SetModalHidden(hidden) => {
                    if let Some(overlay) = &self.modal_overlay {
                        set_class(overlay, HIDDEN_CLASS, hidden);
                    }
                }
                Effect::SetModalShown(shown) => {
                    if let Some(overlay) = &self.modal_overlay {
                        set_class(overlay, SHOW_CLASS, shown);
                    }
                }
                Effect::RenderIcons => report("icons", render_icons(&self.window)),
                Effect::SetScrollSuppressed(suppressed) => self.set_scroll_suppressed(suppressed),
                Effect::ScrollToSection(id) => self.scroll_to_section(&id),
                Effect::ScrollToTop => self.scroll_to(0.0),
                Effect::Schedule { delay_ms, wake } => self.schedule(delay_ms, wake),
            }
        }
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32, wake: Wake) {
        let host = Rc::clone(self);
        Timeout::new(delay_ms, move || host.dispatch(|core| core.wake(wake))).forget();
    }

    fn set_scroll_suppressed(&self, suppressed: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let result = if suppressed {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_previous| ())
        };
        if let Err(e) = result {
            log::warn!("scroll lock: {}", js_error("body.style", &e));
        }
    }

    /// Measure `id` now and scroll to it; a missing section is skipped.
    fn scroll_to_section(&self, id: &str) {
        let top = match by_id(&self.document, id) {
            Ok(section) => Some(f64::from(section.offset_top())),
            Err(e) => {
                log::debug!("navigation: {e}");
                None
            }
        };
        if let Some(target) = self.core.borrow().navigation.scroll_top(id, top) {
            self.scroll_to(target);
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
