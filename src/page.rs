//! Page-level coordinator owning every overlay and the shared scroll lock.
//!
//! Separated from the DOM host so the coordination rules (who holds the
//! scroll lock, which delayed continuation is still current) are testable
//! without a browser. The host translates DOM events into calls here and
//! applies the returned [`Effect`]s.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::BehaviorConfig;
use crate::content::ModalContent;
use crate::effect::{Effect, Wake};
use crate::mobile_panel::MobilePanel;
use crate::modal::ModalController;
use crate::navigation::{ContactShortcut, LinkTarget, NavigationDispatcher};
use crate::reveal::RevealTracker;
use crate::scroll_lock::ScrollLock;
use crate::scroll_spy::{ScrollSpy, SectionBounds, SpyUpdate};

pub struct PageCore {
    pub config: BehaviorConfig,
    pub lock: ScrollLock,
    pub panel: MobilePanel,
    pub modal: ModalController,
    pub spy: ScrollSpy,
    pub reveal: RevealTracker,
    pub navigation: NavigationDispatcher,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(BehaviorConfig::default(), ModalContent::builtin())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: BehaviorConfig, content: ModalContent) -> Self {
        Self {
            lock: ScrollLock::new(),
            panel: MobilePanel::new(config.panel_close_delay_ms),
            modal: ModalController::new(content, config.modal_show_delay_ms, config.modal_hide_delay_ms),
            spy: ScrollSpy::new(config.spy_lookahead_px),
            reveal: RevealTracker::new(),
            navigation: NavigationDispatcher::new(config.home_section.clone(), config.header_offset_px),
            config,
        }
    }

    // --- Navigation ---

    /// A nav control bound to `section` was clicked.
    #[must_use]
    pub fn nav_clicked(&self, section: &str) -> Vec<Effect> {
        vec![Effect::ScrollToSection(section.to_owned())]
    }

    /// The brand mark in the header was clicked.
    #[must_use]
    pub fn brand_clicked(&self) -> Vec<Effect> {
        vec![Effect::ScrollToTop]
    }

    /// One of the "get in touch" shortcuts was clicked.
    pub fn contact_clicked(&mut self, shortcut: ContactShortcut) -> Vec<Effect> {
        let contact = self.config.contact_section.clone();
        match shortcut {
            ContactShortcut::Desktop => vec![Effect::ScrollToSection(contact)],
            ContactShortcut::Mobile => self.panel.link_clicked(&LinkTarget::Anchor(contact)),
        }
    }

    /// Run a scroll-spy pass.
    pub fn run_spy(
        &mut self,
        scroll_y: f64,
        wide_viewport: bool,
        sections: &[SectionBounds],
        controls: &[&str],
    ) -> SpyUpdate {
        self.spy.update(scroll_y, wide_viewport, sections, controls)
    }

    // --- Mobile panel ---

    pub fn open_panel(&mut self) -> Vec<Effect> {
        self.panel.open(&mut self.lock)
    }

    pub fn close_panel(&mut self) -> Vec<Effect> {
        self.panel.close(&mut self.lock)
    }

    pub fn panel_link_clicked(&mut self, target: &LinkTarget) -> Vec<Effect> {
        self.panel.link_clicked(target)
    }

    // --- Modal ---

    pub fn open_modal(&mut self, key: &str) -> Vec<Effect> {
        self.modal.open(key)
    }

    pub fn close_modal(&mut self) -> Vec<Effect> {
        self.modal.close()
    }

    pub fn modal_overlay_clicked(&mut self, target_is_overlay: bool) -> Vec<Effect> {
        self.modal.overlay_clicked(target_is_overlay)
    }

    // --- Continuations ---

    /// Deliver a delayed continuation scheduled by an earlier effect.
    pub fn wake(&mut self, wake: Wake) -> Vec<Effect> {
        match wake {
            Wake::PanelClose { generation, scroll_to } => self.panel.wake_close(generation, scroll_to, &mut self.lock),
            Wake::ModalShow { generation } => self.modal.wake_show(generation, &mut self.lock),
            Wake::ModalHide { generation } => self.modal.wake_hide(generation, &mut self.lock),
        }
    }
}
