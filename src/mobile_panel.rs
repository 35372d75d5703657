//! Slide-in mobile navigation panel.
//!
//! `Closed` → `Open` on the menu button, back to `Closed` on the close button
//! or shortly after an in-panel link is clicked (so the ripple is seen before
//! the panel slides away). Each transition and each link click bumps the
//! generation; a delayed close scheduled under an older generation does
//! nothing, so the latest click decides where the page ends up.

#[cfg(test)]
#[path = "mobile_panel_test.rs"]
mod mobile_panel_test;

use crate::effect::{Effect, Wake, push_lock_change};
use crate::navigation::LinkTarget;
use crate::scroll_lock::{LockOwner, ScrollLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug)]
pub struct MobilePanel {
    state: PanelState,
    generation: u64,
    close_delay_ms: u32,
}

impl MobilePanel {
    #[must_use]
    pub fn new(close_delay_ms: u32) -> Self {
        Self { state: PanelState::Closed, generation: 0, close_delay_ms }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the panel and lock page scrolling.
    pub fn open(&mut self, lock: &mut ScrollLock) -> Vec<Effect> {
        self.generation += 1;
        self.state = PanelState::Open;
        log::debug!("mobile_panel: open (generation {})", self.generation);

        let mut effects = vec![Effect::SetPanelOpen(true)];
        push_lock_change(&mut effects, lock.lock(LockOwner::MobilePanel));
        effects
    }

    /// Hide the panel and release this panel's scroll lock.
    pub fn close(&mut self, lock: &mut ScrollLock) -> Vec<Effect> {
        self.generation += 1;
        if self.state == PanelState::Closed && !lock.is_held_by(LockOwner::MobilePanel) {
            return Vec::new();
        }
        self.state = PanelState::Closed;
        log::debug!("mobile_panel: close (generation {})", self.generation);

        let mut effects = vec![Effect::SetPanelOpen(false)];
        push_lock_change(&mut effects, lock.unlock(LockOwner::MobilePanel));
        effects
    }

    /// An in-panel link was clicked: schedule the delayed close, and the
    /// scroll for in-page anchors. Supersedes any close already pending.
    pub fn link_clicked(&mut self, target: &LinkTarget) -> Vec<Effect> {
        self.generation += 1;
        let scroll_to = match target {
            LinkTarget::Anchor(id) => Some(id.clone()),
            LinkTarget::External => None,
        };
        vec![Effect::Schedule {
            delay_ms: self.close_delay_ms,
            wake: Wake::PanelClose { generation: self.generation, scroll_to },
        }]
    }

    /// Run a delayed close scheduled by [`Self::link_clicked`].
    pub fn wake_close(&mut self, generation: u64, scroll_to: Option<String>, lock: &mut ScrollLock) -> Vec<Effect> {
        if generation != self.generation {
            log::debug!("mobile_panel: dropping stale close (generation {generation}, now {})", self.generation);
            return Vec::new();
        }
        let mut effects = self.close(lock);
        if let Some(id) = scroll_to {
            effects.push(Effect::ScrollToSection(id));
        }
        effects
    }
}
