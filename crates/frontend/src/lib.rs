pub mod config;
pub mod domain;
pub mod shared;

use config::FrontendConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Подключить все поведения к уже отрисованной странице.
///
/// Каждое поведение активируется только при наличии своей разметки.
pub fn attach_behaviors(document: &Document, config: &FrontendConfig) {
    if let Err(err) = domain::a002_bill::ui::editor::attach(document, config) {
        log::error!("Failed to attach bill item editor: {:?}", err);
    }
    if let Err(err) = shared::collapse::attach_collapse_toggles(document, config) {
        log::error!("Failed to attach collapse toggles: {:?}", err);
    }
    if let Err(err) = shared::table_sort::attach_table_sort(document, config) {
        log::error!("Failed to attach inventory table sorting: {:?}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = FrontendConfig::from_document(&document);
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);

    if document.ready_state() != "loading" {
        attach_behaviors(&document, &config);
        return;
    }

    let doc = document.clone();
    let on_ready = Closure::once(move || attach_behaviors(&doc, &config));
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}
