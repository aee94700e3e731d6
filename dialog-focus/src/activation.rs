//! Activation lifecycle driver
//!
//! A transition of the activation flag is handled in two phases. The first
//! phase records the new state and yields a [`Handoff`]; the host schedules it
//! behind its settle-wait. The second phase runs once the UI has settled and
//! re-reads the live instance before moving focus, so a wait that was
//! overtaken by a later toggle does nothing.

use crate::host::{FocusHost, FocusOptions};
use crate::modal::{Handoff, ModalInstance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffOutcome {
    Focused,
    /// The instance changed state again before the wait resolved.
    Superseded,
    /// The element to focus was not present when the wait resolved.
    MissingTarget,
}

/// Second phase: move focus according to the instance's current state.
pub fn complete_handoff<H: FocusHost + ?Sized>(
    host: &H,
    modal: &ModalInstance<H::Element>,
    requested: Handoff,
) -> HandoffOutcome {
    if modal.is_active() != requested.expects_active() {
        return HandoffOutcome::Superseded;
    }
    let target = match requested {
        Handoff::IntoContent => modal.content_root(),
        Handoff::ToActivator => modal.activator(),
    };
    let Some(target) = target else {
        return HandoffOutcome::MissingTarget;
    };
    host.focus(target, FocusOptions::preserve_scroll());
    HandoffOutcome::Focused
}
