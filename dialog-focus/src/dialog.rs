//! Registration glue for one dialog instance
//!
//! [`DialogFocus`] ties a [`ModalInstance`] to a host: it keeps the
//! document-wide listener attached exactly while the dialog is active and
//! retaining focus, keeps the overlay stack in step with activation, and
//! schedules focus handoffs behind the host's settle-wait.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::activation::complete_handoff;
use crate::config::DialogConfig;
use crate::host::{FocusChange, FocusEvents, FocusHandler, Settle};
use crate::modal::{Handoff, ModalInstance};
use crate::stack::{ModalId, OverlayStack, SharedStack};
use crate::subscription::Subscription;
use crate::trap;

pub struct DialogFocus<H>
where
    H: FocusEvents + Settle + 'static,
{
    host: Rc<H>,
    stack: SharedStack,
    modal: Rc<RefCell<ModalInstance<H::Element>>>,
    subscription: Subscription,
    activator_pinned: bool,
}

impl<H> DialogFocus<H>
where
    H: FocusEvents + Settle + 'static,
{
    /// Set up focus handling; the listener condition is evaluated immediately,
    /// so a dialog created already open is trapped from the start.
    pub fn new(host: Rc<H>, stack: SharedStack, config: &DialogConfig) -> Self {
        let modal = ModalInstance::new(ModalId::next(), config.model_value, config.retain_focus);
        if modal.is_active() {
            stack.borrow_mut().activate(modal.id());
        }
        let mut this = Self {
            host,
            stack,
            modal: Rc::new(RefCell::new(modal)),
            subscription: Subscription::new(),
            activator_pinned: false,
        };
        this.sync_listener();
        this
    }

    #[must_use]
    pub fn id(&self) -> ModalId {
        self.modal.borrow().id()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.modal.borrow().is_active()
    }

    #[must_use]
    pub fn is_topmost(&self) -> bool {
        self.stack.borrow().is_topmost(self.id())
    }

    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.subscription.is_attached()
    }

    #[must_use]
    pub const fn listener_attachments(&self) -> usize {
        self.subscription.attachments()
    }

    /// Snapshot of the instance state.
    #[must_use]
    pub fn modal(&self) -> ModalInstance<H::Element> {
        self.modal.borrow().clone()
    }

    #[must_use]
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Apply an activation change. Does nothing when the state is unchanged.
    pub fn set_active(&mut self, active: bool) {
        let Some(handoff) = self.modal.borrow_mut().set_active(active) else {
            return;
        };
        let id = self.id();
        if active {
            if !self.activator_pinned {
                let focused = self.host.active_element();
                self.modal.borrow_mut().set_activator(focused);
            }
            self.stack.borrow_mut().activate(id);
        } else {
            self.stack.borrow_mut().deactivate(id);
        }
        self.sync_listener();
        self.schedule_handoff(handoff);
    }

    pub fn set_retain_focus(&mut self, retain: bool) {
        if self.modal.borrow_mut().set_retain_focus(retain) {
            self.sync_listener();
        }
    }

    pub fn set_content_root(&self, root: Option<H::Element>) {
        self.modal.borrow_mut().set_content_root(root);
    }

    /// Pin the activator. Passing `None` releases a pinned activator, after
    /// which the element focused at activation time is captured instead; an
    /// already captured activator is kept.
    pub fn set_activator(&mut self, activator: Option<H::Element>) {
        if activator.is_none() && !self.activator_pinned {
            return;
        }
        self.activator_pinned = activator.is_some();
        self.modal.borrow_mut().set_activator(activator);
    }

    fn sync_listener(&mut self) {
        let wanted = self.modal.borrow().should_trap();
        let id = self.id();
        let (host, modal, stack) = (&self.host, &self.modal, &self.stack);
        if self
            .subscription
            .sync(wanted, || host.subscribe(trap_handler(host, modal, stack)))
        {
            let state = if wanted { "attached" } else { "detached" };
            log::debug!("focus trap listener {state} for {id}");
        }
    }

    fn schedule_handoff(&self, handoff: Handoff) {
        let host = Rc::downgrade(&self.host);
        let modal = Rc::downgrade(&self.modal);
        self.host.after_settle(Box::new(move || {
            let (Some(host), Some(modal)) = (host.upgrade(), modal.upgrade()) else {
                return;
            };
            let Ok(modal) = modal.try_borrow() else {
                return;
            };
            let outcome = complete_handoff(&*host, &modal, handoff);
            log::trace!("{} handoff {handoff:?}: {outcome:?}", modal.id());
        }));
    }
}

impl<H> Drop for DialogFocus<H>
where
    H: FocusEvents + Settle + 'static,
{
    fn drop(&mut self) {
        self.subscription.detach();
        let id = self.id();
        if let Ok(mut stack) = self.stack.try_borrow_mut() {
            stack.deactivate(id);
            return;
        }
        log::warn!("overlay stack busy while dropping {id}; removal deferred");
        let stack = Rc::downgrade(&self.stack);
        self.host.after_settle(Box::new(move || {
            let Some(stack) = stack.upgrade() else {
                return;
            };
            match stack.try_borrow_mut() {
                Ok(mut stack) => {
                    stack.deactivate(id);
                }
                Err(_) => log::warn!("overlay stack still busy; {id} left on the stack"),
            }
        }));
    }
}

fn trap_handler<H>(
    host: &Rc<H>,
    modal: &Rc<RefCell<ModalInstance<H::Element>>>,
    stack: &SharedStack,
) -> FocusHandler<H::Element>
where
    H: FocusEvents + 'static,
{
    let host: Weak<H> = Rc::downgrade(host);
    let modal = Rc::downgrade(modal);
    let stack: Weak<RefCell<OverlayStack>> = Rc::downgrade(stack);
    Rc::new(move |change: &FocusChange<H::Element>| {
        let (Some(host), Some(modal), Some(stack)) =
            (host.upgrade(), modal.upgrade(), stack.upgrade())
        else {
            return;
        };
        let decision = {
            let (Ok(modal), Ok(stack)) = (modal.try_borrow(), stack.try_borrow()) else {
                return;
            };
            trap::evaluate(&*host, change, &modal.trap_view(&stack))
        };
        trap::apply(&*host, &decision);
    })
}
