//! Informational modal with CSS enter/exit transitions.
//!
//! ```text
//! Hidden --open--> Opening --(show delay)--> Shown --close--> Closing --(hide delay)--> Hidden
//! ```
//!
//! Opening unhides the overlay first and applies `show` a moment later so the
//! transition engages; closing drops `show` at once and hides the overlay
//! after the fade. Every open/close bumps the generation, so a continuation
//! from an earlier open or close cannot hide a freshly opened modal.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::content::ModalContent;
use crate::effect::{Effect, Wake, push_lock_change};
use crate::scroll_lock::{LockOwner, ScrollLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Opening,
    Shown,
    Closing,
}

#[derive(Clone, Debug)]
pub struct ModalController {
    content: ModalContent,
    state: ModalState,
    generation: u64,
    show_delay_ms: u32,
    hide_delay_ms: u32,
}

impl ModalController {
    #[must_use]
    pub fn new(content: ModalContent, show_delay_ms: u32, hide_delay_ms: u32) -> Self {
        Self { content, state: ModalState::Hidden, generation: 0, show_delay_ms, hide_delay_ms }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Inject the pane for `key` and start the enter transition. Unknown keys
    /// open an empty pane.
    pub fn open(&mut self, key: &str) -> Vec<Effect> {
        let body = self.content.get(key).unwrap_or_else(|| {
            log::debug!("modal: no pane for key {key:?}");
            ""
        });
        self.generation += 1;
        self.state = ModalState::Opening;
        log::debug!("modal: open {key:?} (generation {})", self.generation);

        vec![
            Effect::SetModalBody(body),
            Effect::SetModalHidden(false),
            Effect::RenderIcons,
            Effect::Schedule { delay_ms: self.show_delay_ms, wake: Wake::ModalShow { generation: self.generation } },
        ]
    }

    /// Start the exit transition. No-op when already hidden or closing.
    pub fn close(&mut self) -> Vec<Effect> {
        if matches!(self.state, ModalState::Hidden | ModalState::Closing) {
            return Vec::new();
        }
        self.generation += 1;
        self.state = ModalState::Closing;
        log::debug!("modal: close (generation {})", self.generation);

        vec![
            Effect::SetModalShown(false),
            Effect::Schedule { delay_ms: self.hide_delay_ms, wake: Wake::ModalHide { generation: self.generation } },
        ]
    }

    /// A click landed on the overlay. Only clicks whose target is the overlay
    /// element itself (not its content) close the modal.
    pub fn overlay_clicked(&mut self, target_is_overlay: bool) -> Vec<Effect> {
        if target_is_overlay { self.close() } else { Vec::new() }
    }

    /// Finish the enter transition.
    pub fn wake_show(&mut self, generation: u64, lock: &mut ScrollLock) -> Vec<Effect> {
        if generation != self.generation {
            log::debug!("modal: dropping stale show (generation {generation}, now {})", self.generation);
            return Vec::new();
        }
        self.state = ModalState::Shown;
        let mut effects = vec![Effect::SetModalShown(true)];
        push_lock_change(&mut effects, lock.lock(LockOwner::Modal));
        effects
    }

    /// Finish the exit transition.
    pub fn wake_hide(&mut self, generation: u64, lock: &mut ScrollLock) -> Vec<Effect> {
        if generation != self.generation {
            log::debug!("modal: dropping stale hide (generation {generation}, now {})", self.generation);
            return Vec::new();
        }
        self.state = ModalState::Hidden;
        let mut effects = vec![Effect::SetModalHidden(true)];
        push_lock_change(&mut effects, lock.unlock(LockOwner::Modal));
        effects
    }
}
