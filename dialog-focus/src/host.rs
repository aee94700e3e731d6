//! Host abstraction
//!
//! The focus logic never touches a document directly. A host supplies element
//! queries, the platform focus operation, the document-wide focus-in event and
//! a settle-wait. Browser and in-memory implementations live elsewhere.

use std::fmt;
use std::rc::Rc;

use crate::focusable;

/// Options passed to the platform focus call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusOptions {
    pub prevent_scroll: bool,
}

impl FocusOptions {
    /// Focus without scrolling the page to the target.
    #[must_use]
    pub const fn preserve_scroll() -> Self {
        Self {
            prevent_scroll: true,
        }
    }
}

/// Element queries and the focus primitive of a document-like host.
pub trait FocusHost {
    type Element: Clone + PartialEq + fmt::Debug;

    /// All descendants of `container` in document order, excluding `container`.
    fn descendants(&self, container: &Self::Element) -> Vec<Self::Element>;

    /// Lower-case tag name.
    fn tag_name(&self, element: &Self::Element) -> String;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Inclusive containment, matching `Node.contains`.
    fn contains(&self, container: &Self::Element, element: &Self::Element) -> bool;

    /// Whether `element` stands for the document itself.
    fn is_document_root(&self, element: &Self::Element) -> bool;

    fn active_element(&self) -> Option<Self::Element>;

    /// Move focus to `element`. Silently ignored when the element cannot take focus.
    fn focus(&self, element: &Self::Element, options: FocusOptions);

    /// Descendants matching the focusable selector, in document order.
    ///
    /// Hosts with a native selector engine should override this.
    fn selector_candidates(&self, container: &Self::Element) -> Vec<Self::Element> {
        self.descendants(container)
            .into_iter()
            .filter(|el| focusable::matches_selector(self, el))
            .collect()
    }
}

/// A focus movement observed on the document: where focus came from and where it landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange<E> {
    pub previous: Option<E>,
    pub target: Option<E>,
}

impl<E> FocusChange<E> {
    #[must_use]
    pub const fn new(previous: Option<E>, target: Option<E>) -> Self {
        Self { previous, target }
    }
}

pub type FocusHandler<E> = Rc<dyn Fn(&FocusChange<E>)>;

/// Releases a registration when dropped.
#[must_use = "dropping a Disposer immediately releases the registration"]
pub struct Disposer(Option<Box<dyn FnOnce()>>);

impl Disposer {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    /// A disposer with nothing to release.
    pub fn noop() -> Self {
        Self(None)
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("armed", &self.0.is_some())
            .finish()
    }
}

/// Document-wide focus-in subscription.
pub trait FocusEvents: FocusHost {
    fn subscribe(&self, handler: FocusHandler<Self::Element>) -> Disposer;
}

/// One-shot scheduling after pending UI updates have been applied.
pub trait Settle {
    fn after_settle(&self, task: Box<dyn FnOnce()>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn disposer_releases_once_on_drop() {
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            let _guard = Disposer::new(move || hits.set(hits.get() + 1));
        }
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn explicit_dispose_does_not_double_release() {
        let hits = Rc::new(Cell::new(0));
        let guard = {
            let hits = hits.clone();
            Disposer::new(move || hits.set(hits.get() + 1))
        };
        guard.dispose();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn preserve_scroll_sets_prevent_scroll() {
        assert!(FocusOptions::preserve_scroll().prevent_scroll);
        assert!(!FocusOptions::default().prevent_scroll);
    }
}
