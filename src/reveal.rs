//! Replayable reveal-on-scroll flags.
//!
//! Each observed element carries an `active` flag that follows intersection
//! both ways: leaving the viewport clears it so the entrance animation plays
//! again on re-entry. Only flag changes are reported back to the host.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Directional reveal variants. They only differ in CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    Up,
    Left,
    Right,
}

impl RevealVariant {
    pub const ALL: [Self; 3] = [Self::Up, Self::Left, Self::Right];

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Up => "reveal",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
        }
    }

    /// Selector matching every reveal target, whatever its variant.
    #[must_use]
    pub fn selector() -> String {
        Self::ALL.iter().map(|variant| format!(".{}", variant.class_name())).collect::<Vec<_>>().join(", ")
    }
}

/// Flag write requested for one observed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealUpdate {
    pub slot: usize,
    pub active: bool,
}

/// Per-element reveal state, indexed by registration slot.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    active: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its slot.
    pub fn register(&mut self) -> usize {
        self.active.push(false);
        self.active.len() - 1
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_active(&self, slot: usize) -> bool {
        self.active.get(slot).copied().unwrap_or(false)
    }

    /// Record one observation. The flag mirrors `intersecting`; `None` when
    /// it already did.
    pub fn observe(&mut self, slot: usize, intersecting: bool) -> Option<RevealUpdate> {
        let Some(flag) = self.active.get_mut(slot) else {
            log::debug!("reveal: observation for unknown slot {slot}");
            return None;
        };
        if *flag == intersecting {
            return None;
        }
        *flag = intersecting;
        Some(RevealUpdate { slot, active: intersecting })
    }
}
