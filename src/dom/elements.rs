//! Thin web-sys helpers: lookups, class flips, listeners, ripple.
//!
//! Lookups return `BehaviorError::MissingElement` so callers can log why a
//! feature was skipped. Class and style writes never fail the caller; a
//! throwing browser call is logged at `warn`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::consts::RIPPLE_CLASS;
use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or_else(|| BehaviorError::missing("window"))
}

pub fn document(window: &Window) -> Result<Document, BehaviorError> {
    window.document().ok_or_else(|| BehaviorError::missing("document"))
}

/// Convert a thrown JS value into a `BehaviorError`.
pub fn js_error(context: &'static str, value: &JsValue) -> BehaviorError {
    let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    BehaviorError::Js { context, message }
}

pub fn find_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

pub fn by_id(document: &Document, id: &str) -> Result<HtmlElement, BehaviorError> {
    find_by_id(document, id).ok_or_else(|| BehaviorError::missing(format!("#{id}")))
}

pub fn query(root: &Document, selector: &str) -> Result<HtmlElement, BehaviorError> {
    match root.query_selector(selector) {
        Ok(Some(el)) => el.dyn_into::<HtmlElement>().map_err(|_| BehaviorError::missing(selector)),
        Ok(None) => Err(BehaviorError::missing(selector)),
        Err(e) => Err(js_error("querySelector", &e)),
    }
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>, BehaviorError> {
    let list = root.query_selector_all(selector).map_err(|e| js_error("querySelectorAll", &e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

/// Add (`on`) or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let class_list = el.class_list();
    let result = if on { class_list.add_1(class) } else { class_list.remove_1(class) };
    if let Err(e) = result {
        log::warn!("{}", js_error("classList", &e));
    }
}

pub fn set_classes(el: &Element, classes: &[&str], on: bool) {
    for class in classes {
        set_class(el, class, on);
    }
}

/// Attach a page-lifetime listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| js_error("addEventListener", &e))?;
    // Listeners live as long as the page; there is no teardown.
    cb.forget();
    Ok(())
}

/// Restart the ripple animation on `el` and clear it after `duration_ms`.
pub fn ripple(el: &HtmlElement, duration_ms: u32) {
    set_class(el, RIPPLE_CLASS, false);
    // Reading layout forces a reflow so re-adding the class restarts the animation.
    el.offset_width();
    set_class(el, RIPPLE_CLASS, true);
    let el = el.clone();
    Timeout::new(duration_ms, move || set_class(&el, RIPPLE_CLASS, false)).forget();
}

/// Log a wiring failure. Missing markup is expected on some pages.
pub fn report(feature: &str, result: Result<(), BehaviorError>) {
    match result {
        Ok(()) => {}
        Err(e @ BehaviorError::MissingElement { .. }) => log::debug!("{feature}: skipped ({e})"),
        Err(e) => log::warn!("{feature}: {e}"),
    }
}
