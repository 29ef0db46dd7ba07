//! Functions templates call directly (`onclick="toggleTheme()"` and the
//! like). The JS loader assigns these exports onto `window`.

use crate::config;
use crate::layout::{modal, sidebar};
use crate::shared::{clipboard, theme, toast};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    theme::toggle(&config::current());
}

#[wasm_bindgen(js_name = toggleSidebarCollapse)]
pub fn toggle_sidebar_collapse() {
    sidebar::toggle_collapse(&config::current());
}

#[wasm_bindgen(js_name = toggleMobileSidebar)]
pub fn toggle_mobile_sidebar() {
    sidebar::toggle_mobile();
}

#[wasm_bindgen(js_name = closeMobileSidebar)]
pub fn close_mobile_sidebar() {
    sidebar::close_mobile();
}

/// `showToast(message, type = "info", duration = 5000)`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>, duration: Option<u32>) {
    toast::show_toast(&config::current(), message, kind.as_deref(), duration);
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    modal::open(id);
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    modal::close(id);
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    clipboard::copy_with_toast(text, config::current());
}

#[wasm_bindgen(js_name = printPage)]
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}
