#![forbid(unsafe_code)]
//! Browser bindings for `dialog-focus`: a `web-sys` host, the settle-wait on the
//! browser event loop, and a yew `Dialog` component that keeps keyboard focus
//! inside the topmost open dialog.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod host;
pub mod stack;

pub use components::dialog::{Dialog, Props as DialogProps};
pub use host::{DomError, DomHost};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
