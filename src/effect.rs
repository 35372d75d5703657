//! Effects returned by the behavior cores for the DOM host to apply.
//!
//! Cores never touch the document. They describe class flips, scrolls, and
//! delayed continuations; the host performs them and feeds every [`Wake`]
//! back once its delay elapses.

/// A change the host must make to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Add (`true`) or remove the `active` class on the mobile panel.
    SetPanelOpen(bool),
    /// Replace the modal body markup.
    SetModalBody(&'static str),
    /// Add (`true`) or remove the `hidden` class on the modal overlay.
    SetModalHidden(bool),
    /// Add (`true`) or remove the `show` class on the modal overlay.
    SetModalShown(bool),
    /// Ask the icon library to render placeholders present in the document.
    RenderIcons,
    /// Suppress (`true`) or restore body scrolling.
    SetScrollSuppressed(bool),
    /// Smooth-scroll to a section, measured when the effect is applied.
    ScrollToSection(String),
    /// Smooth-scroll to the very top.
    ScrollToTop,
    /// Call back into the core with `wake` after `delay_ms`.
    Schedule { delay_ms: u32, wake: Wake },
}

/// A delayed continuation. Each carries the generation of the state machine
/// that scheduled it; a mismatch at wake time means it was superseded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// Close the mobile panel, then optionally scroll to a section.
    PanelClose { generation: u64, scroll_to: Option<String> },
    /// Apply `show` and take the scroll lock.
    ModalShow { generation: u64 },
    /// Hide the overlay and release the scroll lock.
    ModalHide { generation: u64 },
}

/// Translate a scroll-lock transition into an effect.
pub(crate) fn push_lock_change(effects: &mut Vec<Effect>, change: Option<bool>) {
    if let Some(suppressed) = change {
        effects.push(Effect::SetScrollSuppressed(suppressed));
    }
}
