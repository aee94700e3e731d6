//! Focus trap controller
//!
//! Decides, for one focus-in event, whether focus escaped the topmost active
//! dialog and where it has to be sent back to. The checks run in a fixed order
//! and stop at the first one that lets the event through.

use crate::focusable::resolve_focusable;
use crate::host::{FocusChange, FocusHost, FocusOptions};

/// What the trap sees of a dialog when an event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapView<'a, E> {
    pub content_root: Option<&'a E>,
    pub is_topmost: bool,
}

/// Why an event was let through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    NoMovement,
    NotRendered,
    NotTopmost,
    OnContainer,
    InsideTrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapDecision<E> {
    Pass(Pass),
    /// Focus escaped but the dialog has nothing focusable to catch it.
    Unredirectable,
    Redirect(E),
}

impl<E> TrapDecision<E> {
    #[must_use]
    pub const fn redirect_target(&self) -> Option<&E> {
        match self {
            Self::Redirect(target) => Some(target),
            _ => None,
        }
    }
}

/// Classify a focus change against one dialog without side effects.
pub fn evaluate<H: FocusHost + ?Sized>(
    host: &H,
    change: &FocusChange<H::Element>,
    view: &TrapView<'_, H::Element>,
) -> TrapDecision<H::Element> {
    if change.previous == change.target {
        return TrapDecision::Pass(Pass::NoMovement);
    }
    let Some(root) = view.content_root else {
        return TrapDecision::Pass(Pass::NotRendered);
    };
    if !view.is_topmost {
        return TrapDecision::Pass(Pass::NotTopmost);
    }
    if let Some(target) = change.target.as_ref() {
        if host.is_document_root(target) || target == root {
            return TrapDecision::Pass(Pass::OnContainer);
        }
        if host.contains(root, target) {
            return TrapDecision::Pass(Pass::InsideTrap);
        }
    }

    let focusable = resolve_focusable(host, root);
    let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
        return TrapDecision::Unredirectable;
    };
    if change.previous.as_ref() == Some(first) {
        TrapDecision::Redirect(last.clone())
    } else {
        TrapDecision::Redirect(first.clone())
    }
}

/// Carry out a decision on the host.
pub fn apply<H: FocusHost + ?Sized>(host: &H, decision: &TrapDecision<H::Element>) {
    match decision {
        TrapDecision::Redirect(target) => {
            log::trace!("focus escaped dialog, redirecting to {target:?}");
            host.focus(target, FocusOptions::preserve_scroll());
        }
        TrapDecision::Unredirectable => {
            log::warn!("focus escaped a dialog with no focusable descendants");
        }
        TrapDecision::Pass(reason) => {
            log::trace!("focus change passed trap: {reason:?}");
        }
    }
}

/// Evaluate and apply in one step.
pub fn on_focus_change<H: FocusHost + ?Sized>(
    host: &H,
    change: &FocusChange<H::Element>,
    view: &TrapView<'_, H::Element>,
) -> TrapDecision<H::Element> {
    let decision = evaluate(host, change, view);
    apply(host, &decision);
    decision
}
