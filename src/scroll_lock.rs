//! Page scroll lock shared by the overlays.
//!
//! Each overlay locks and unlocks under its own owner tag. Body scrolling is
//! suppressed iff the owner set is non-empty, so closing one overlay never
//! releases a lock another still needs.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Overlays that may hold the scroll lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LockOwner {
    MobilePanel,
    Modal,
}

impl LockOwner {
    const fn bit(self) -> u8 {
        match self {
            Self::MobilePanel => 0b01,
            Self::Modal => 0b10,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    owners: u8,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.owners != 0
    }

    #[must_use]
    pub fn is_held_by(&self, owner: LockOwner) -> bool {
        self.owners & owner.bit() != 0
    }

    /// Acquire for `owner`. Returns `Some(true)` when the page must start
    /// suppressing scroll, `None` when nothing visible changes.
    pub fn lock(&mut self, owner: LockOwner) -> Option<bool> {
        let was_locked = self.is_locked();
        self.owners |= owner.bit();
        (!was_locked).then_some(true)
    }

    /// Release for `owner`. Returns `Some(false)` when the last owner left
    /// and scrolling must be restored. Releasing a lock the owner does not
    /// hold is a no-op.
    pub fn unlock(&mut self, owner: LockOwner) -> Option<bool> {
        if !self.is_held_by(owner) {
            return None;
        }
        self.owners &= !owner.bit();
        (!self.is_locked()).then_some(false)
    }
}
