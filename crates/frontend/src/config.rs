//! Page configuration, read once from an optional JSON `<script>` element.

use crate::shared::dom;
use once_cell::unsync::OnceCell;
use sms_ui_core::UiConfig;
use std::rc::Rc;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

thread_local! {
    static CONFIG: OnceCell<Rc<UiConfig>> = OnceCell::new();
}

/// Configuration for this page, loaded on first use.
pub fn current() -> Rc<UiConfig> {
    CONFIG.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(load_config()))))
}

/// Load configuration from the page.
///
/// Falls back to defaults when the element is missing or its JSON is invalid.
pub fn load_config() -> UiConfig {
    let source = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let Some(source) = source else {
        log::debug!("#{CONFIG_ELEMENT_ID} not present, using default config");
        return UiConfig::default();
    };

    match UiConfig::from_json(&source) {
        Ok(config) => {
            log::info!("loaded page config from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("invalid #{CONFIG_ELEMENT_ID}, using default config: {err}");
            UiConfig::default()
        }
    }
}
