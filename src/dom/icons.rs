//! Bridge to the page's icon library (`window.lucide`).
//!
//! The library replaces `<i data-lucide="…">` placeholders with SVGs. It is
//! optional: when the script is absent, icons are simply not rendered.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::dom::elements::js_error;
use crate::error::BehaviorError;

/// Render every icon placeholder currently in the document.
pub fn render_icons(window: &Window) -> Result<(), BehaviorError> {
    let lucide = Reflect::get(window, &JsValue::from_str("lucide")).map_err(|e| js_error("window.lucide", &e))?;
    if lucide.is_undefined() || lucide.is_null() {
        return Err(BehaviorError::missing("window.lucide"));
    }
    let create = Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .map_err(|e| js_error("lucide.createIcons", &e))?
        .dyn_into::<Function>()
        .map_err(|_| BehaviorError::missing("lucide.createIcons"))?;
    create.call0(&lucide).map_err(|e| js_error("lucide.createIcons", &e))?;
    Ok(())
}
