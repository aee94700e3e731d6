//! Focusable-set resolution
use smallvec::SmallVec;

use crate::host::FocusHost;

/// CSS form of the focusable selector, for hosts with a native selector engine.
pub const FOCUSABLE_SELECTOR: &str = "button, [href], input:not([type=\"hidden\"]), select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Tabindex value that removes an element from sequential navigation.
pub const SKIP_TABINDEX: &str = "-1";

pub type FocusableSet<E> = SmallVec<[E; 8]>;

/// Whether `element` matches the focusable selector, before the disabled/skip filter.
pub fn matches_selector<H: FocusHost + ?Sized>(host: &H, element: &H::Element) -> bool {
    let tag = host.tag_name(element);
    match tag.as_str() {
        "button" | "select" | "textarea" => return true,
        "input" => {
            let hidden = host
                .attribute(element, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
            if !hidden {
                return true;
            }
        }
        _ => {}
    }
    if host.has_attribute(element, "href") {
        return true;
    }
    host.attribute(element, "tabindex")
        .is_some_and(|t| t != SKIP_TABINDEX)
}

/// Whether a selector candidate survives the disabled/skip filter.
pub fn is_enabled_stop<H: FocusHost + ?Sized>(host: &H, element: &H::Element) -> bool {
    !host.has_attribute(element, "disabled")
        && host.attribute(element, "tabindex").as_deref() != Some(SKIP_TABINDEX)
}

/// Focusable descendants of `container` in document order.
///
/// An empty set is a valid result.
pub fn resolve_focusable<H: FocusHost + ?Sized>(
    host: &H,
    container: &H::Element,
) -> FocusableSet<H::Element> {
    host.selector_candidates(container)
        .into_iter()
        .filter(|el| is_enabled_stop(host, el))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    #[test]
    fn selector_contract_covers_interactive_tags() {
        let dom = MemoryDom::new();
        let root = dom.create_element(dom.body(), "div");
        let button = dom.create_element(root, "button");
        let link = dom.create_element(root, "a");
        dom.set_attribute(link, "href", "#");
        let bare_link = dom.create_element(root, "a");
        let hidden = dom.create_element(root, "input");
        dom.set_attribute(hidden, "type", "HIDDEN");
        let text = dom.create_element(root, "input");
        let select = dom.create_element(root, "select");
        let area = dom.create_element(root, "textarea");
        let span = dom.create_element(root, "span");
        let tabbable = dom.create_element(root, "div");
        dom.set_attribute(tabbable, "tabindex", "0");

        assert!(matches_selector(&dom, &button));
        assert!(matches_selector(&dom, &link));
        assert!(!matches_selector(&dom, &bare_link));
        assert!(!matches_selector(&dom, &hidden));
        assert!(matches_selector(&dom, &text));
        assert!(matches_selector(&dom, &select));
        assert!(matches_selector(&dom, &area));
        assert!(!matches_selector(&dom, &span));
        assert!(matches_selector(&dom, &tabbable));
    }

    #[test]
    fn resolve_filters_disabled_and_skipped_in_document_order() {
        let dom = MemoryDom::new();
        let root = dom.create_element(dom.body(), "div");
        let first = dom.create_element(root, "button");
        let disabled = dom.create_element(root, "button");
        dom.set_attribute(disabled, "disabled", "");
        let skipped = dom.create_element(root, "button");
        dom.set_attribute(skipped, "tabindex", "-1");
        let nested_wrap = dom.create_element(root, "section");
        let nested = dom.create_element(nested_wrap, "textarea");
        let late = dom.create_element(root, "div");
        dom.set_attribute(late, "tabindex", "5");

        let set = resolve_focusable(&dom, &root);
        assert_eq!(set.as_slice(), &[first, nested, late]);
    }

    #[test]
    fn empty_container_resolves_to_empty_set() {
        let dom = MemoryDom::new();
        let root = dom.create_element(dom.body(), "div");
        dom.create_element(root, "p");
        assert!(resolve_focusable(&dom, &root).is_empty());
    }

    #[test]
    fn container_itself_is_not_a_candidate() {
        let dom = MemoryDom::new();
        let root = dom.create_element(dom.body(), "div");
        dom.set_attribute(root, "tabindex", "0");
        assert!(resolve_focusable(&dom, &root).is_empty());
    }
}
