//! Scroll spy: scroll offset → current section → nav control styling.
//!
//! DESIGN
//! ======
//! The host measures `section[id]` bounds on every pass (layout can shift as
//! images load) and hands them in; this module owns only the mapping rules.
//!
//! - probe = `scroll_y + lookahead`, so a section turns current slightly
//!   before its top reaches the viewport top.
//! - A section is current iff `top <= probe < top + height`.
//! - Overlapping ranges resolve to the lowest `top`; equal tops resolve to the
//!   first section in document order.
//! - With no current section every control is styled inactive.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Measured extent of one page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// What to do with a nav control's text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelVisibility {
    Show,
    Hide,
    /// Leave whatever the markup has (wide viewports never hide labels).
    Keep,
}

/// Styling for one nav control after a spy pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavControlState {
    pub section: String,
    pub active: bool,
    pub label: LabelVisibility,
}

/// Result of one spy pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpyUpdate {
    pub current: Option<String>,
    /// Whether the current section differs from the previous pass.
    pub changed: bool,
    pub controls: Vec<NavControlState>,
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    lookahead: f64,
    current: Option<String>,
}

impl ScrollSpy {
    #[must_use]
    pub fn new(lookahead: f64) -> Self {
        Self { lookahead, current: None }
    }

    #[must_use]
    pub fn probe(&self, scroll_y: f64) -> f64 {
        scroll_y + self.lookahead
    }

    /// Section under the probe for `scroll_y`, if any.
    #[must_use]
    pub fn section_at<'a>(&self, scroll_y: f64, sections: &'a [SectionBounds]) -> Option<&'a SectionBounds> {
        section_containing(self.probe(scroll_y), sections)
    }

    /// Section selected by the last pass.
    #[cfg(test)]
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Run one pass over `controls` (each control's `data-section` value, in
    /// document order). `wide_viewport` is true at or above the label
    /// breakpoint.
    pub fn update(
        &mut self,
        scroll_y: f64,
        wide_viewport: bool,
        sections: &[SectionBounds],
        controls: &[&str],
    ) -> SpyUpdate {
        let current = self.section_at(scroll_y, sections).map(|section| section.id.clone());
        let changed = current != self.current;
        if changed {
            log::debug!("scroll_spy: current section {:?} -> {current:?}", self.current);
        }

        let controls = controls
            .iter()
            .map(|&section| {
                let active = current.as_deref() == Some(section);
                let label = if active {
                    LabelVisibility::Show
                } else if wide_viewport {
                    LabelVisibility::Keep
                } else {
                    LabelVisibility::Hide
                };
                NavControlState { section: section.to_owned(), active, label }
            })
            .collect();

        self.current.clone_from(&current);
        SpyUpdate { current, changed, controls }
    }
}

/// Section whose range contains `probe`; lowest `top` wins on overlap.
#[must_use]
pub fn section_containing(probe: f64, sections: &[SectionBounds]) -> Option<&SectionBounds> {
    sections
        .iter()
        .filter(|section| section.contains(probe))
        .min_by(|a, b| a.top.total_cmp(&b.top))
}
