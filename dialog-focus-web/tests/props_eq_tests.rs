use dialog_focus_web::DialogProps;
use dialog_focus_web::components::dialog::FocusBinding;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, NodeRef};

fn binding(content_ref: &NodeRef, activator_ref: &NodeRef) -> FocusBinding {
    FocusBinding {
        open: false,
        retain_focus: true,
        content_ref: content_ref.clone(),
        activator_ref: activator_ref.clone(),
        return_focus_id: None,
    }
}

#[test]
fn focus_binding_changes_only_with_flags_or_refs() {
    let content = NodeRef::default();
    let activator = NodeRef::default();
    let base = binding(&content, &activator);

    assert!(base == binding(&content, &activator));
    assert!(
        base != FocusBinding {
            open: true,
            ..binding(&content, &activator)
        }
    );
    assert!(
        base != FocusBinding {
            retain_focus: false,
            ..binding(&content, &activator)
        }
    );
    assert!(base != binding(&NodeRef::default(), &activator));
    assert!(
        base != FocusBinding {
            return_focus_id: Some(AttrValue::from("opener")),
            ..binding(&content, &activator)
        }
    );
}

#[test]
fn dialog_props_compare_callbacks_by_identity() {
    let on_open_change = Callback::from(|_: bool| {});
    let props = |cb: &Callback<bool>| DialogProps {
        open: true,
        on_open_change: cb.clone(),
        id: None,
        title: None,
        activator_label: None,
        return_focus_id: None,
        retain_focus: true,
        fullscreen: false,
        scrollable: false,
        z_index: 2400,
        children: ChildrenRenderer::default(),
    };

    assert!(props(&on_open_change) == props(&on_open_change));
    assert!(props(&on_open_change) != props(&Callback::from(|_: bool| {})));
}
