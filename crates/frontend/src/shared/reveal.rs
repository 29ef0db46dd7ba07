//! Fade dashboard cards in the first time they scroll into view.

use crate::shared::dom;
use crate::shared::timer::after;
use sms_ui_core::reveal::{
    reveal_delay, HIDDEN_STYLE, REVEALED_STYLE, REVEAL_TARGETS, REVEAL_THRESHOLD,
};
use sms_ui_core::UiConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn apply(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        dom::set_style(el, property, value);
    }
}

pub fn init(config: &UiConfig) {
    let cards = dom::query_all(REVEAL_TARGETS);
    if cards.is_empty() {
        return;
    }

    let stagger = config.reveal_stagger_ms;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let card = entry.target();
                observer.unobserve(&card);
                after(reveal_delay(index, stagger), move || apply(&card, &REVEALED_STYLE));
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            // Без observer карточки не скрываем, иначе они не появятся вовсе.
            log::warn!("IntersectionObserver unavailable, cards shown as is: {err:?}");
            return;
        }
    };
    callback.forget();

    for card in &cards {
        apply(card, &HIDDEN_STYLE);
        observer.observe(card);
    }
    log::debug!("reveal: observing {} card(s)", cards.len());
}
