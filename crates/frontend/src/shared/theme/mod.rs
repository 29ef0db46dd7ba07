//! Theme switching for the server-rendered pages.
//!
//! The active theme is the `data-theme` attribute on `<html>`; the
//! preference is persisted in localStorage and restored on load.

use crate::shared::dom;
use crate::shared::storage::page_store;
use sms_ui_core::theme::{Theme, ThemePreference};
use sms_ui_core::UiConfig;

const THEME_ATTR: &str = "data-theme";
const THEME_ICON_ID: &str = "themeIcon";
const THEME_BUTTON_ID: &str = "themeBtn";

/// Apply the stored theme (dark when nothing is stored).
pub fn init(config: &UiConfig) {
    let theme = ThemePreference::new(page_store(), &config.theme_storage_key).load();
    apply_theme(theme);
}

/// Flip between dark and light and remember the choice.
pub fn toggle(config: &UiConfig) {
    let pref = ThemePreference::new(page_store(), &config.theme_storage_key);
    let next = pref.toggle(current_theme());
    apply_theme(next);
}

/// Theme currently applied to the document.
pub fn current_theme() -> Theme {
    dom::document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(THEME_ATTR))
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
    if let Some(icon) = dom::by_id(THEME_ICON_ID) {
        dom::set_text(&icon, theme.icon());
    }
    if let Some(button) = dom::by_id(THEME_BUTTON_ID) {
        let _ = button.set_attribute("title", theme.button_title());
    }
}
