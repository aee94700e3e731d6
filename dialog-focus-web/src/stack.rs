use std::rc::Rc;

use dialog_focus::{OverlayStack, SharedStack};

thread_local! {
    static OVERLAY_STACK: SharedStack = OverlayStack::shared();
}

/// The overlay stack shared by every dialog on this page.
#[must_use]
pub fn overlay_stack() -> SharedStack {
    OVERLAY_STACK.with(Rc::clone)
}
