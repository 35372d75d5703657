//! Runtime tunables for every behavior on the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults mirror the page's stylesheet and markup (header height, CSS
//! transition lengths, breakpoint). A page may override any of them with an
//! inline `<script type="application/json" id="page-behavior-config">` block;
//! omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::BehaviorError;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub storage_key: String,
    pub default_theme: Theme,
    pub spy_lookahead_px: f64,
    pub label_breakpoint_px: u32,
    pub header_offset_px: f64,
    pub home_section: String,
    pub contact_section: String,
    pub ripple_ms: u32,
    pub panel_close_delay_ms: u32,
    pub modal_show_delay_ms: u32,
    pub modal_hide_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            spy_lookahead_px: consts::SPY_LOOKAHEAD_PX,
            label_breakpoint_px: consts::LABEL_BREAKPOINT_PX,
            header_offset_px: consts::HEADER_OFFSET_PX,
            home_section: consts::HOME_SECTION_ID.to_owned(),
            contact_section: consts::CONTACT_SECTION_ID.to_owned(),
            ripple_ms: consts::RIPPLE_MS,
            panel_close_delay_ms: consts::PANEL_CLOSE_DELAY_MS,
            modal_show_delay_ms: consts::MODAL_SHOW_DELAY_MS,
            modal_hide_delay_ms: consts::MODAL_HIDE_DELAY_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
        }
    }
}

impl BehaviorConfig {
    /// Parse an inline JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would silently disable a behavior.
    pub fn validate(&self) -> Result<(), BehaviorError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storageKey", "must not be empty"));
        }
        if self.home_section.trim().is_empty() {
            return Err(invalid("homeSection", "must not be empty"));
        }
        if self.contact_section.trim().is_empty() {
            return Err(invalid("contactSection", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("revealThreshold", format!("{} is outside [0, 1]", self.reveal_threshold)));
        }
        if !self.spy_lookahead_px.is_finite() || self.spy_lookahead_px < 0.0 {
            return Err(invalid("spyLookaheadPx", format!("{} is not a non-negative length", self.spy_lookahead_px)));
        }
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            return Err(invalid("headerOffsetPx", format!("{} is not a non-negative length", self.header_offset_px)));
        }
        Ok(())
    }

    /// Media query that matches when nav labels are always shown.
    #[must_use]
    pub fn wide_viewport_query(&self) -> String {
        format!("(min-width: {}px)", self.label_breakpoint_px)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> BehaviorError {
    BehaviorError::InvalidConfig { field, reason: reason.into() }
}
