//! Browser implementation of the focus host traits
use dialog_focus::{
    Disposer, FOCUSABLE_SELECTOR, FocusChange, FocusEvents, FocusHandler, FocusHost,
    FocusOptions, Settle,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement};

use crate::dom;

const FOCUS_IN: &str = "focusin";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("focus listener registration failed: {0}")]
    Listener(String),
}

/// The live browser document.
#[derive(Debug, Clone, PartialEq)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Detect a usable document. `None` outside a browser, in which case focus
    /// handling is skipped entirely.
    #[must_use]
    pub fn detect() -> Option<Self> {
        dom::document().map(|document| Self { document })
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Map an event target onto an element, treating the document as its root element.
    fn event_element(&self, target: Option<EventTarget>) -> Option<Element> {
        let target = target?;
        if let Some(element) = target.dyn_ref::<Element>() {
            return Some(element.clone());
        }
        if target.dyn_ref::<Document>().is_some() {
            return self.document.document_element();
        }
        None
    }

    fn listen(&self, handler: FocusHandler<Element>) -> Result<Disposer, DomError> {
        let host = self.clone();
        // `Fn`: a redirect re-enters this listener synchronously.
        let closure = Closure::<dyn Fn(web_sys::FocusEvent)>::wrap(Box::new(
            move |event: web_sys::FocusEvent| {
                let change = FocusChange::new(
                    host.event_element(event.related_target()),
                    host.event_element(event.target()),
                );
                handler(&change);
            },
        ));

        self.document
            .add_event_listener_with_callback(FOCUS_IN, closure.as_ref().unchecked_ref())
            .map_err(|err| DomError::Listener(dom::js_error_message(&err)))?;

        let document = self.document.clone();
        Ok(Disposer::new(move || {
            let _ = document
                .remove_event_listener_with_callback(FOCUS_IN, closure.as_ref().unchecked_ref());
        }))
    }
}

impl FocusHost for DomHost {
    type Element = Element;

    fn descendants(&self, container: &Element) -> Vec<Element> {
        container
            .query_selector_all("*")
            .map(|list| dom::node_list_elements(&list))
            .unwrap_or_default()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_attribute(&self, element: &Element, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn contains(&self, container: &Element, element: &Element) -> bool {
        container.contains(Some(element))
    }

    fn is_document_root(&self, element: &Element) -> bool {
        self.document
            .document_element()
            .is_some_and(|root| root == *element)
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&self, element: &Element, options: FocusOptions) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let native = web_sys::FocusOptions::new();
        native.set_prevent_scroll(options.prevent_scroll);
        let _ = element.focus_with_options(&native);
    }

    fn selector_candidates(&self, container: &Element) -> Vec<Element> {
        container
            .query_selector_all(FOCUSABLE_SELECTOR)
            .map(|list| dom::node_list_elements(&list))
            .unwrap_or_default()
    }
}

impl FocusEvents for DomHost {
    fn subscribe(&self, handler: FocusHandler<Element>) -> Disposer {
        self.listen(handler).unwrap_or_else(|err| {
            log::error!("{err}");
            Disposer::noop()
        })
    }
}

impl Settle for DomHost {
    fn after_settle(&self, task: Box<dyn FnOnce()>) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::next_frame().await {
                log::warn!(
                    "settle-wait fell back to immediate run: {}",
                    dom::js_error_message(&err)
                );
            }
            task();
        });
    }
}
