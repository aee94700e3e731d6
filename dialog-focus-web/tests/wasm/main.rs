//! Browser tests; run with `wasm-pack test --headless --chrome dialog-focus-web`.
#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod focus_trap;
