//! Dialog focus containment
//!
//! Platform-agnostic focus logic for modal dialogs: trapping keyboard focus
//! inside the topmost open dialog, tracking dialog stacking order, and handing
//! focus into a dialog on open and back to its activator on close.
//! Hosts plug in through the traits in [`host`].

pub mod activation;
pub mod config;
pub mod dialog;
pub mod error;
pub mod focusable;
pub mod host;
pub mod memory;
pub mod modal;
pub mod stack;
pub mod subscription;
pub mod trap;

pub use activation::{HandoffOutcome, complete_handoff};
pub use config::{DialogConfig, ScrollStrategy, activator_aria, content_aria};
pub use dialog::DialogFocus;
pub use error::ConfigError;
pub use focusable::{FOCUSABLE_SELECTOR, FocusableSet, resolve_focusable};
pub use host::{
    Disposer, FocusChange, FocusEvents, FocusHandler, FocusHost, FocusOptions, Settle,
};
pub use memory::{FocusRecord, MemoryDom, NodeId};
pub use modal::{Handoff, ModalInstance};
pub use stack::{ModalId, OverlayStack, SharedStack};
pub use subscription::Subscription;
pub use trap::{Pass, TrapDecision, TrapView, on_focus_change};
