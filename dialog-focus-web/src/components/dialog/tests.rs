use super::{Dialog, Props};
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn base_props(open: bool) -> Props {
    Props {
        open,
        on_open_change: Callback::noop(),
        id: Some(AttrValue::from("confirm")),
        title: Some(AttrValue::from("Confirm")),
        activator_label: Some(AttrValue::from("Open")),
        return_focus_id: None,
        retain_focus: true,
        fullscreen: false,
        scrollable: false,
        z_index: 2400,
        children: ChildrenRenderer::default(),
    }
}

#[test]
fn closed_dialog_renders_only_activator() {
    let html = block_on(LocalServerRenderer::<Dialog>::with_props(base_props(false)).render());
    assert!(html.contains("confirm-activator"));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("confirm-content"));
}

#[test]
fn open_dialog_renders_modal_content() {
    let html = block_on(LocalServerRenderer::<Dialog>::with_props(base_props(true)).render());
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("confirm-content"));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("tabindex=\"-1\""));
    assert!(html.contains("z-index: 2400"));
}

#[test]
fn layout_flags_compose_classes() {
    let props = Props {
        fullscreen: true,
        scrollable: true,
        ..base_props(true)
    };
    let html = block_on(LocalServerRenderer::<Dialog>::with_props(props).render());
    assert!(html.contains("dialog--fullscreen"));
    assert!(html.contains("dialog--scrollable"));
}
