use std::rc::Rc;

use dialog_focus::{DialogConfig, DialogFocus};
use web_sys::Element;
use yew::hook;
use yew::prelude::*;

use crate::dom;
use crate::host::DomHost;
use crate::stack::overlay_stack;

/// Element references and flags the dialog hands to its focus handling.
#[derive(Clone, PartialEq)]
pub struct FocusBinding {
    pub open: bool,
    pub retain_focus: bool,
    pub content_ref: NodeRef,
    pub activator_ref: NodeRef,
    pub return_focus_id: Option<AttrValue>,
}

impl FocusBinding {
    fn activator(&self) -> Option<Element> {
        self.activator_ref.cast::<Element>().or_else(|| {
            self.return_focus_id
                .as_ref()
                .and_then(|id| dom::element_by_id(id.as_ref()))
        })
    }
}

#[hook]
pub fn use_dialog_focus(binding: FocusBinding) {
    let focus = use_mut_ref(|| None::<DialogFocus<DomHost>>);

    {
        let focus = focus.clone();
        // A dialog mounted open starts trapped, with no opening handoff.
        let config = DialogConfig {
            model_value: binding.open,
            retain_focus: binding.retain_focus,
            ..DialogConfig::default()
        };
        use_effect_with((), move |()| {
            if let Some(host) = DomHost::detect() {
                *focus.borrow_mut() =
                    Some(DialogFocus::new(Rc::new(host), overlay_stack(), &config));
            }
            move || {
                focus.borrow_mut().take();
            }
        });
    }

    use_effect_with(binding, move |binding| {
        if let Some(dialog) = focus.borrow_mut().as_mut() {
            dialog.set_content_root(binding.content_ref.cast::<Element>());
            dialog.set_activator(binding.activator());
            dialog.set_retain_focus(binding.retain_focus);
            dialog.set_active(binding.open);
        }
        || {}
    });
}
