use std::sync::atomic::{AtomicUsize, Ordering};

use dialog_focus::config::DEFAULT_Z_INDEX;
use dialog_focus::{DialogConfig, activator_aria, content_aria};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom;

pub mod focus;
#[cfg(test)]
mod tests;

pub use focus::{FocusBinding, use_dialog_focus};

static DIALOG_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Requested activation changes: activator click, scrim click, Escape.
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Renders a built-in activator button with this label.
    #[prop_or_default]
    pub activator_label: Option<AttrValue>,
    /// Element to return focus to when there is no built-in activator.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or(true)]
    pub retain_focus: bool,
    #[prop_or_default]
    pub fullscreen: bool,
    #[prop_or_default]
    pub scrollable: bool,
    #[prop_or(DEFAULT_Z_INDEX)]
    pub z_index: i32,
    #[prop_or_default]
    pub children: Children,
}

impl Props {
    fn config(&self) -> DialogConfig {
        DialogConfig {
            retain_focus: self.retain_focus,
            model_value: self.open,
            fullscreen: self.fullscreen,
            scrollable: self.scrollable,
            z_index: self.z_index,
            ..DialogConfig::default()
        }
    }
}

#[function_component(Dialog)]
pub fn dialog(props: &Props) -> Html {
    let serial = use_state(|| DIALOG_IDS.fetch_add(1, Ordering::Relaxed));
    let base_id = props
        .id
        .as_ref()
        .map_or_else(|| format!("dialog-{}", *serial), ToString::to_string);
    let content_id = format!("{base_id}-content");
    let title_id = format!("{base_id}-title");

    let content_ref = use_node_ref();
    let activator_ref = use_node_ref();
    use_dialog_focus(FocusBinding {
        open: props.open,
        retain_focus: props.retain_focus,
        content_ref: content_ref.clone(),
        activator_ref: activator_ref.clone(),
        return_focus_id: props.return_focus_id.clone(),
    });

    let request = |next: bool| {
        let cb = props.on_open_change.clone();
        Callback::from(move |_| cb.emit(next))
    };
    let on_keydown = {
        let cb = props.on_open_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                e.stop_propagation();
                cb.emit(false);
            }
        })
    };

    let activator = props.activator_label.as_ref().map(|label| {
        let [(_, haspopup), (_, expanded)] = activator_aria(props.open);
        html! {
            <button
                type="button"
                id={format!("{base_id}-activator")}
                class="dialog__activator"
                aria-haspopup={haspopup}
                aria-expanded={expanded}
                aria-controls={content_id.clone()}
                ref={activator_ref.clone()}
                onclick={request(true)}
            >
                { label.clone() }
            </button>
        }
    });

    let overlay = if props.open {
        let config = props.config();
        let [(_, role), (_, aria_modal)] = content_aria();
        let overlay = html! {
            <div class="dialog-overlay" style={format!("z-index: {}", config.z_index)}>
                <div class="dialog-overlay__scrim" aria-hidden="true" onclick={request(false)} />
                <div
                    id={content_id.clone()}
                    class={classes!(config.classes())}
                    role={role}
                    aria-modal={aria_modal}
                    aria-labelledby={props.title.as_ref().map(|_| title_id.clone())}
                    tabindex="-1"
                    data-scroll-strategy={config.scroll_strategy.as_str()}
                    ref={content_ref}
                    onkeydown={on_keydown}
                >
                    { props.title.as_ref().map(|title| html! {
                        <h2 id={title_id.clone()} class="dialog__title">{ title.clone() }</h2>
                    }).unwrap_or_default() }
                    <div class="dialog__body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        };
        match dom::body() {
            Some(body) => create_portal(overlay, body.into()),
            None => overlay,
        }
    } else {
        Html::default()
    };

    html! {
        <>
            { activator.unwrap_or_default() }
            { overlay }
        </>
    }
}
