//! Count-up animation for the dashboard stat values.

use crate::shared::dom;
use sms_ui_core::counter::{parse_leading_int, CounterAnimation};
use sms_ui_core::UiConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Animate every positive `.stat-card .value` up from zero.
pub fn init(config: &UiConfig) {
    for el in dom::query_all(".stat-card .value") {
        let target = parse_leading_int(&el.text_content().unwrap_or_default());
        if target > 0 {
            dom::set_text(&el, "0");
            animate(el, CounterAnimation::new(0, target, config.counter_duration_ms));
        }
    }
}

fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn request_frame(callback: &FrameCallback) -> bool {
    window()
        .map(|w| {
            w.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
                .is_ok()
        })
        .unwrap_or(false)
}

fn animate(el: Element, animation: CounterAnimation) {
    let started = now();
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&slot);
    let fallback_el = el.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let elapsed = timestamp - started;
        dom::set_text(&el, &animation.value_at(elapsed).to_string());

        let scheduled = !animation.is_finished(elapsed)
            && handle.borrow().as_ref().map(request_frame).unwrap_or(false);
        if !scheduled {
            dom::set_text(&el, &animation.end.to_string());
            // Разрываем цикл Rc, чтобы замыкание освободилось
            let _ = handle.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let started_ok = slot.borrow().as_ref().map(request_frame).unwrap_or(false);
    if !started_ok {
        dom::set_text(&fallback_el, &animation.end.to_string());
        let _ = slot.borrow_mut().take();
    }
}
