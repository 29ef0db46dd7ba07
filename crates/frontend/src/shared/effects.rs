//! Decorative pointer effects: click ripples and stat-card tilt.

use crate::shared::dom;
use crate::shared::timer::after;
use sms_ui_core::effects::{
    tilt_transform, Rect, Ripple, RIPPLE_KEYFRAMES, TILT_ENTER_TRANSITION,
    TILT_LEAVE_TRANSITION, TILT_RESET,
};
use sms_ui_core::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

const RIPPLE_TARGETS: &str = ".btn, .stat-card";
const TILT_TARGETS: &str = ".stat-card";

pub fn init(config: &UiConfig) {
    inject_keyframes();

    let ripple_ms = config.ripple_duration_ms;
    for el in dom::query_all(RIPPLE_TARGETS) {
        let host = el.clone();
        dom::listen(&el, "click", move |ev| spawn_ripple(&host, &ev, ripple_ms));
    }

    for card in dom::query_all(TILT_TARGETS) {
        attach_tilt(card);
    }
}

fn inject_keyframes() {
    let Some(document) = dom::document() else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    dom::set_text(&style, RIPPLE_KEYFRAMES);
    let _ = head.append_child(&style);
}

fn client_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn pointer(ev: &Event) -> Option<(f64, f64)> {
    let mouse = ev.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn spawn_ripple(host: &Element, ev: &Event, duration_ms: u32) {
    let Some((x, y)) = pointer(ev) else {
        return;
    };
    let Some(ripple) = dom::document().and_then(|d| d.create_element("span").ok()) else {
        return;
    };

    let geometry = Ripple::at(client_rect(host), x, y);
    let _ = ripple.set_attribute("style", &geometry.css_text());
    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    let _ = host.append_child(&ripple);
    after(duration_ms, move || ripple.remove());
}

fn attach_tilt(card: Element) {
    let target = card.clone();
    dom::listen(&card, "mousemove", move |ev| {
        if let Some((x, y)) = pointer(&ev) {
            let transform = tilt_transform(client_rect(&target), x, y);
            dom::set_style(&target, "transform", &transform);
        }
    });

    let target = card.clone();
    dom::listen(&card, "mouseleave", move |_| {
        dom::set_style(&target, "transition", TILT_LEAVE_TRANSITION);
        dom::set_style(&target, "transform", TILT_RESET);
    });

    let target = card.clone();
    dom::listen(&card, "mouseenter", move |_| {
        dom::set_style(&target, "transition", TILT_ENTER_TRANSITION);
    });
}
