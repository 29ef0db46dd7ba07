//! Password fields: show/hide buttons and the strength meter on the
//! change-password form.

use crate::shared::dom;
use sms_ui_core::password::{toggle_visibility, StrengthReport};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const NEW_PASSWORD_ID: &str = "new-password";
const STRENGTH_BAR_ID: &str = "password-strength";

pub fn init() {
    for button in dom::query_all(".toggle-password") {
        let source = button.clone();
        dom::listen(&button, "click", move |_| {
            let input = source
                .get_attribute("data-target")
                .and_then(|id| dom::by_id(&id))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                let (input_type, glyph) = toggle_visibility(&input.type_());
                input.set_type(input_type);
                dom::set_text(&source, glyph);
            }
        });
    }

    let input = dom::by_id(NEW_PASSWORD_ID).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let (Some(input), Some(bar)) = (input, dom::html_by_id(STRENGTH_BAR_ID)) else {
        return;
    };

    let source = input.clone();
    dom::listen(&input, "input", move |_| {
        let report = StrengthReport::for_password(&source.value());
        let style = bar.style();
        let _ = style.set_property("width", &report.width_css());
        let _ = style.set_property("background", report.color);
        dom::set_text(&bar, report.label);
    });
}
