//! # portfolio-behavior
//!
//! Client-side behavior layer for the portfolio page, compiled to
//! WebAssembly. The page ships fully rendered; this crate attaches the
//! interactive parts to it once the document is parsed.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Persisted light/dark theme and the sun/moon icons |
//! | [`reveal`] | Replayable reveal-on-scroll flags |
//! | [`scroll_spy`] | Scroll offset → current section → nav styling |
//! | [`navigation`] | Scroll targets for nav controls and in-panel links |
//! | [`mobile_panel`] | Slide-in mobile navigation state machine |
//! | [`modal`] | Informational modal state machine |
//! | [`content`] | Static modal pane markup |
//! | [`scroll_lock`] | Owner-counted page scroll lock shared by the overlays |
//! | [`page`] | [`page::PageCore`], the testable coordinator |
//! | [`effect`] | Effects returned by the cores for the host to apply |
//! | [`config`] | Runtime tunables with inline JSON overrides |
//! | `dom` | web-sys host (`hydrate` feature only) |
//!
//! Everything outside `dom` is plain Rust and is tested natively.

pub mod config;
pub mod consts;
pub mod content;
pub mod effect;
pub mod error;
pub mod mobile_panel;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod scroll_lock;
pub mod scroll_spy;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install logging and mount when the document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::start();
}
