//! Static markup for the informational modal panes.
//!
//! Pure data: the modal controller receives a [`ModalContent`] table and
//! never knows what the panes say.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

const BUILTIN: &[(&str, &str)] = &[
    ("privacy", include_str!("panes/privacy.html")),
    ("terms", include_str!("panes/terms.html")),
    ("purpose", include_str!("panes/purpose.html")),
    ("iteration", include_str!("panes/iteration.html")),
    ("methodology", include_str!("panes/methodology.html")),
];

/// Immutable key → markup table.
#[derive(Clone, Debug)]
pub struct ModalContent {
    panes: Vec<(&'static str, &'static str)>,
}

impl Default for ModalContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModalContent {
    /// The panes shipped with the page.
    #[must_use]
    pub fn builtin() -> Self {
        Self { panes: BUILTIN.to_vec() }
    }

    #[cfg(test)]
    #[must_use]
    pub fn from_panes(panes: Vec<(&'static str, &'static str)>) -> Self {
        Self { panes }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.panes.iter().find(|(k, _)| *k == key).map(|(_, html)| *html)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.panes.iter().map(|(k, _)| *k)
    }
}
