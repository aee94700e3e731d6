//! Per-dialog focus state
use crate::stack::{ModalId, OverlayStack};
use crate::trap::TrapView;

/// Which way focus should move once the UI has settled after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Move focus onto the content root after opening.
    IntoContent,
    /// Return focus to the activator after closing.
    ToActivator,
}

impl Handoff {
    #[must_use]
    pub const fn for_state(active: bool) -> Self {
        if active {
            Self::IntoContent
        } else {
            Self::ToActivator
        }
    }

    /// The activation state this handoff was requested for.
    #[must_use]
    pub const fn expects_active(self) -> bool {
        matches!(self, Self::IntoContent)
    }
}

/// The unit under control: activation flags plus the borrowed element references.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalInstance<E> {
    id: ModalId,
    is_active: bool,
    retain_focus: bool,
    content_root: Option<E>,
    activator: Option<E>,
}

impl<E> ModalInstance<E> {
    #[must_use]
    pub const fn new(id: ModalId, is_active: bool, retain_focus: bool) -> Self {
        Self {
            id,
            is_active,
            retain_focus,
            content_root: None,
            activator: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ModalId {
        self.id
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn retain_focus(&self) -> bool {
        self.retain_focus
    }

    /// Whether the document-wide focus listener should be attached.
    #[must_use]
    pub const fn should_trap(&self) -> bool {
        self.is_active && self.retain_focus
    }

    /// The content root, only while active.
    #[must_use]
    pub fn content_root(&self) -> Option<&E> {
        if self.is_active {
            self.content_root.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn activator(&self) -> Option<&E> {
        self.activator.as_ref()
    }

    /// Record a new activation state. Returns the handoff to schedule when the state changed.
    pub fn set_active(&mut self, active: bool) -> Option<Handoff> {
        if self.is_active == active {
            return None;
        }
        self.is_active = active;
        Some(Handoff::for_state(active))
    }

    /// Returns whether the flag changed.
    pub fn set_retain_focus(&mut self, retain: bool) -> bool {
        let changed = self.retain_focus != retain;
        self.retain_focus = retain;
        changed
    }

    pub fn set_content_root(&mut self, root: Option<E>) {
        self.content_root = root;
    }

    pub fn set_activator(&mut self, activator: Option<E>) {
        self.activator = activator;
    }

    /// Snapshot consumed by the trap for one focus event.
    #[must_use]
    pub fn trap_view<'a>(&'a self, stack: &OverlayStack) -> TrapView<'a, E> {
        TrapView {
            content_root: self.content_root(),
            is_topmost: stack.is_topmost(self.id),
        }
    }
}
