//! Navigation dispatch: which offset a control or link scrolls to.
//!
//! Pure arithmetic over measured offsets; the host performs the actual
//! smooth scroll and plays the ripple.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// A scroll destination resolved from a section id.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationTarget {
    pub id: String,
    pub is_home: bool,
    pub top_offset: f64,
}

impl NavigationTarget {
    /// Page offset to scroll to. Home is always the very top; everything else
    /// lands just below the fixed header.
    #[must_use]
    pub fn scroll_top(&self, header_offset: f64) -> f64 {
        if self.is_home { 0.0 } else { (self.top_offset - header_offset).max(0.0) }
    }
}

/// Where an in-panel link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// `#id` on this page; default navigation is suppressed.
    Anchor(String),
    /// Anything else; the browser navigates natively.
    External,
}

impl LinkTarget {
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some(id) => Self::Anchor(id.to_owned()),
            None => Self::External,
        }
    }

    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Anchor(_))
    }
}

/// The two "get in touch" shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactShortcut {
    /// Header button: scrolls immediately.
    Desktop,
    /// Panel button: ripple, then closes the panel and scrolls after a delay.
    Mobile,
}

#[derive(Clone, Debug)]
pub struct NavigationDispatcher {
    home_id: String,
    header_offset: f64,
}

impl NavigationDispatcher {
    pub fn new(home_id: impl Into<String>, header_offset: f64) -> Self {
        Self { home_id: home_id.into(), header_offset }
    }

    #[must_use]
    pub fn is_home(&self, id: &str) -> bool {
        id == self.home_id
    }

    /// Build a target for `id` measured at `top_offset`. `None` when the
    /// section is not on the page.
    #[must_use]
    pub fn target(&self, id: &str, top_offset: Option<f64>) -> Option<NavigationTarget> {
        let top_offset = top_offset?;
        Some(NavigationTarget { id: id.to_owned(), is_home: self.is_home(id), top_offset })
    }

    /// Scroll offset for `id`, or `None` when the section is missing.
    #[must_use]
    pub fn scroll_top(&self, id: &str, top_offset: Option<f64>) -> Option<f64> {
        self.target(id, top_offset).map(|target| target.scroll_top(self.header_offset))
    }
}
