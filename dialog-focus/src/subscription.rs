//! Attach-on-demand listener guard
use crate::host::Disposer;

/// Holds at most one live registration and the disposer that releases it.
#[derive(Debug, Default)]
pub struct Subscription {
    disposer: Option<Disposer>,
    attachments: usize,
}

impl Subscription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the registration in line with `wanted`.
    ///
    /// `attach` only runs when a registration is needed and none is live.
    /// Returns whether anything changed.
    pub fn sync(&mut self, wanted: bool, attach: impl FnOnce() -> Disposer) -> bool {
        match (wanted, self.disposer.is_some()) {
            (true, false) => {
                self.disposer = Some(attach());
                self.attachments += 1;
                true
            }
            (false, true) => {
                self.detach();
                true
            }
            _ => false,
        }
    }

    pub fn detach(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer.dispose();
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.disposer.is_some()
    }

    /// How many times a registration has been made over this guard's life.
    #[must_use]
    pub const fn attachments(&self) -> usize {
        self.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_attach(live: &Rc<Cell<i32>>) -> impl FnOnce() -> Disposer {
        let live = live.clone();
        move || {
            live.set(live.get() + 1);
            Disposer::new(move || live.set(live.get() - 1))
        }
    }

    #[test]
    fn sync_attaches_once_and_detaches_once() {
        let live = Rc::new(Cell::new(0));
        let mut sub = Subscription::new();
        assert!(sub.sync(true, counting_attach(&live)));
        assert!(!sub.sync(true, counting_attach(&live)));
        assert_eq!(live.get(), 1);
        assert!(sub.sync(false, counting_attach(&live)));
        assert!(!sub.sync(false, counting_attach(&live)));
        assert_eq!(live.get(), 0);
        assert_eq!(sub.attachments(), 1);
    }

    #[test]
    fn dropping_guard_releases_registration() {
        let live = Rc::new(Cell::new(0));
        {
            let mut sub = Subscription::new();
            sub.sync(true, counting_attach(&live));
            assert!(sub.is_attached());
        }
        assert_eq!(live.get(), 0);
    }
}
