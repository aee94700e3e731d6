//! Ordered registry of active overlays
//!
//! Stands in for the overlay stacking coordinator: the most recently activated
//! instance that is still active is the topmost one.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

static MODAL_IDS: AtomicU64 = AtomicU64::new(1);

/// Identity of one dialog instance for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(u64);

impl ModalId {
    /// Allocate a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(MODAL_IDS.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct OverlayStack {
    active: SmallVec<[ModalId; 4]>,
}

pub type SharedStack = Rc<RefCell<OverlayStack>>;

impl OverlayStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> SharedStack {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Push `id` on top. Re-activating an id already on the stack moves it to the top.
    pub fn activate(&mut self, id: ModalId) {
        self.active.retain(|entry| *entry != id);
        self.active.push(id);
        log::debug!("overlay {id} activated, depth {}", self.active.len());
    }

    /// Remove `id` wherever it sits. Returns whether it was present.
    pub fn deactivate(&mut self, id: ModalId) -> bool {
        let before = self.active.len();
        self.active.retain(|entry| *entry != id);
        let removed = self.active.len() != before;
        if removed {
            log::debug!("overlay {id} deactivated, depth {}", self.active.len());
        }
        removed
    }

    #[must_use]
    pub fn topmost(&self) -> Option<ModalId> {
        self.active.last().copied()
    }

    #[must_use]
    pub fn is_topmost(&self, id: ModalId) -> bool {
        self.topmost() == Some(id)
    }

    #[must_use]
    pub fn contains(&self, id: ModalId) -> bool {
        self.active.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_activation_is_topmost() {
        let mut stack = OverlayStack::new();
        let a = ModalId::next();
        let b = ModalId::next();
        stack.activate(a);
        assert!(stack.is_topmost(a));
        stack.activate(b);
        assert!(stack.is_topmost(b));
        assert!(!stack.is_topmost(a));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn closing_top_restores_previous() {
        let mut stack = OverlayStack::new();
        let a = ModalId::next();
        let b = ModalId::next();
        stack.activate(a);
        stack.activate(b);
        assert!(stack.deactivate(b));
        assert_eq!(stack.topmost(), Some(a));
    }

    #[test]
    fn closing_buried_entry_keeps_top() {
        let mut stack = OverlayStack::new();
        let a = ModalId::next();
        let b = ModalId::next();
        stack.activate(a);
        stack.activate(b);
        assert!(stack.deactivate(a));
        assert_eq!(stack.topmost(), Some(b));
        assert!(!stack.contains(a));
    }

    #[test]
    fn reactivation_moves_without_duplicating() {
        let mut stack = OverlayStack::new();
        let a = ModalId::next();
        let b = ModalId::next();
        stack.activate(a);
        stack.activate(b);
        stack.activate(a);
        assert_eq!(stack.len(), 2);
        assert!(stack.is_topmost(a));
    }

    #[test]
    fn deactivating_unknown_id_is_noop() {
        let mut stack = OverlayStack::new();
        assert!(!stack.deactivate(ModalId::next()));
        assert!(stack.is_empty());
        assert_eq!(stack.topmost(), None);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ModalId::next(), ModalId::next());
    }
}
