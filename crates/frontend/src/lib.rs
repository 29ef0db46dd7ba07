pub mod config;
pub mod exports;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Attach every page behaviour to the server-rendered document.
pub fn hydrate() {
    let config = config::current();

    shared::theme::init(&config);
    layout::sidebar::init(&config);
    layout::modal::init();
    shared::toast::auto_hide_rendered(&config);
    shared::effects::init(&config);
    shared::counter::init(&config);
    shared::reveal::init(&config);
    shared::password::init();
    shared::live_search::init(&config);
    shared::upload::init(&config);

    if let Some(body) = shared::dom::document().and_then(|d| d.body()) {
        let _ = body.style().set_property("opacity", "1");
    }
    log::debug!("page behaviours attached");
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = shared::dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(hydrate) as Box<dyn FnMut()>);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    } else {
        hydrate();
    }
}
