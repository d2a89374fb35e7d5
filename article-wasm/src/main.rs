#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod models;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod pagination;
#[cfg(target_arch = "wasm32")]
mod state;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod text;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod upload;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Пустой main нужен только чтобы `cargo build --workspace` на хосте
    // проходил; чистая логика (pagination, upload, text) тестируется на хосте.
}
