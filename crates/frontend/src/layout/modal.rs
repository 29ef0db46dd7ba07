//! Modal overlays rendered by the server, shown by toggling `active`.
//!
//! Opening a modal locks body scrolling; closing it (button, overlay click,
//! Escape) releases the lock.

use crate::layout::sidebar;
use crate::shared::dom;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const ACTIVE_CLASS: &str = "active";
const OVERLAY_CLASS: &str = "modal-overlay";

pub fn open(id: &str) {
    if let Some(modal) = dom::by_id(id) {
        let _ = modal.class_list().add_1(ACTIVE_CLASS);
        lock_scroll(true);
    }
}

pub fn close(id: &str) {
    if let Some(modal) = dom::by_id(id) {
        let _ = modal.class_list().remove_1(ACTIVE_CLASS);
        lock_scroll(false);
    }
}

/// Close every open modal and the mobile drawer.
pub fn close_all() {
    for modal in dom::query_all(".modal-overlay.active") {
        let _ = modal.class_list().remove_1(ACTIVE_CLASS);
    }
    lock_scroll(false);
    sidebar::close_mobile();
}

/// Overlay clicks and the Escape key.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };

    // Клик по подложке закрывает модальное окно
    dom::listen(&document, "click", |ev| {
        if let Some(overlay) = dom::event_target_with_class(&ev, OVERLAY_CLASS) {
            let _ = overlay.class_list().remove_1(ACTIVE_CLASS);
            lock_scroll(false);
        }
    });

    dom::listen(&document, "keydown", |ev| {
        let is_escape = ev
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if is_escape {
            close_all();
        }
    });
}

fn lock_scroll(locked: bool) {
    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    if locked {
        dom::set_style(&body, "overflow", "hidden");
    } else {
        dom::clear_style(&body, "overflow");
    }
}
