//! Demo page with two stacked dialogs, used by the browser tests and the tester binary.
use yew::prelude::*;

use crate::components::dialog::Dialog;

#[function_component(App)]
pub fn app() -> Html {
    let outer = use_state(|| false);
    let inner = use_state(|| false);
    let empty = use_state(|| false);

    let toggle = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |open: bool| handle.set(open))
    };
    let close_inner = {
        let inner = inner.clone();
        Callback::from(move |_| inner.set(false))
    };
    let close_outer = {
        let outer = outer.clone();
        Callback::from(move |_| outer.set(false))
    };

    html! {
        <main id="main" role="main">
            <a id="before" href="#main">{ "Skip to content" }</a>
            <Dialog
                id="dialog-a"
                title="Save changes?"
                activator_label="Open dialog"
                open={*outer}
                on_open_change={toggle(&outer)}
            >
                <button id="dialog-a-save" type="button">{ "Save" }</button>
                <Dialog
                    id="dialog-b"
                    title="Are you sure?"
                    activator_label="More options"
                    open={*inner}
                    on_open_change={toggle(&inner)}
                >
                    <button id="dialog-b-ok" type="button" onclick={close_inner.clone()}>{ "OK" }</button>
                    <button id="dialog-b-cancel" type="button" onclick={close_inner}>{ "Cancel" }</button>
                </Dialog>
                <button id="dialog-a-cancel" type="button" onclick={close_outer}>{ "Cancel" }</button>
            </Dialog>
            <Dialog
                id="dialog-empty"
                title="Nothing to focus"
                activator_label="Open empty dialog"
                open={*empty}
                on_open_change={toggle(&empty)}
            >
                <p>{ "This dialog has no focusable content." }</p>
            </Dialog>
            <button id="after" type="button">{ "After" }</button>
        </main>
    }
}
