use std::cell::Cell;
use std::rc::Rc;

use dialog_focus_web::app::App;
use dialog_focus_web::{Dialog, DialogProps, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{FocusEvent, FocusEventInit, HtmlElement};
use yew::html::ChildrenRenderer;
use yew::{AppHandle, AttrValue, Callback, Renderer};

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn html_element(id: &str) -> HtmlElement {
    dom::element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} exists"))
        .dyn_into()
        .expect("html element")
}

fn active_id() -> String {
    dom::document()
        .and_then(|doc| doc.active_element())
        .map(|el| el.id())
        .unwrap_or_default()
}

async fn settle() {
    for _ in 0..3 {
        dom::next_frame().await.expect("animation frame");
    }
}

/// Focus `id` the way sequential navigation would, reporting `from` as the previous target.
fn focus_from(id: &str, from: &str) {
    let target = html_element(id);
    let init = FocusEventInit::new();
    init.set_bubbles(true);
    init.set_related_target(Some(&html_element(from)));
    target.focus().expect("focus");
    let event = FocusEvent::new_with_focus_event_init_dict("focusin", &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

async fn open_dialog_a() -> AppHandle<App> {
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    html_element("dialog-a-activator").click();
    settle().await;
    handle
}

#[wasm_bindgen_test]
async fn opening_focuses_content_root() {
    let app = open_dialog_a().await;
    assert_eq!(active_id(), "dialog-a-content");
    let activator = html_element("dialog-a-activator");
    assert_eq!(activator.get_attribute("aria-expanded").as_deref(), Some("true"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn escaping_focus_is_pulled_back() {
    let app = open_dialog_a().await;
    html_element("dialog-a-save").focus().expect("focus save");
    focus_from("before", "dialog-a-save");
    assert_eq!(active_id(), "dialog-a-cancel");
    focus_from("after", "dialog-a-cancel");
    assert_eq!(active_id(), "dialog-a-save");
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_key_closes_and_restores_activator() {
    let app = open_dialog_a().await;
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    html_element("dialog-a-content")
        .dispatch_event(&event)
        .expect("dispatch");
    settle().await;
    assert!(dom::element_by_id("dialog-a-content").is_none());
    assert_eq!(active_id(), "dialog-a-activator");
    app.destroy();
}

#[wasm_bindgen_test]
async fn native_redirect_raises_no_script_error() {
    let errors = Rc::new(Cell::new(0u32));
    let on_error = {
        let errors = errors.clone();
        Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(move |_| errors.set(errors.get() + 1)))
    };
    let win = dom::window().expect("window");
    win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .expect("error listener");

    let app = open_dialog_a().await;
    html_element("dialog-a-cancel").focus().expect("focus cancel");
    html_element("after").focus().expect("focus after");
    assert_eq!(active_id(), "dialog-a-save");
    settle().await;
    assert_eq!(errors.get(), 0);

    let _ = win.remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    app.destroy();
}

#[wasm_bindgen_test]
async fn dialog_mounted_open_keeps_existing_focus() {
    let root = ensure_app_root();
    let doc = dom::document().expect("document");
    let outside: HtmlElement = doc
        .create_element("button")
        .expect("button")
        .dyn_into()
        .expect("html element");
    outside.set_id("mounted-open-outside");
    doc.body().expect("body").append_child(&outside).expect("append");
    outside.focus().expect("focus outside");

    let props = DialogProps {
        open: true,
        on_open_change: Callback::noop(),
        id: Some(AttrValue::from("mounted-open")),
        title: None,
        activator_label: None,
        return_focus_id: None,
        retain_focus: true,
        fullscreen: false,
        scrollable: false,
        z_index: 2400,
        children: ChildrenRenderer::default(),
    };
    let app = Renderer::<Dialog>::with_root_and_props(root, props).render();
    settle().await;

    assert!(dom::element_by_id("mounted-open-content").is_some());
    assert_eq!(active_id(), "mounted-open-outside");

    app.destroy();
    outside.remove();
}
