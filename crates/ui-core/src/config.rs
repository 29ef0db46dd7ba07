use serde::Deserialize;
use std::time::Duration;

/// Runtime settings for the page scripts.
///
/// Pages may embed a JSON object in `<script type="application/json"
/// id="ui-config">`; any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub search_debounce_ms: u32,
    pub empty_results_message: String,
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
    pub rendered_toast_delay_ms: u32,
    pub rendered_toast_stagger_ms: u32,
    pub rendered_toast_fade_ms: u32,
    pub ripple_duration_ms: u32,
    pub counter_duration_ms: u32,
    pub reveal_stagger_ms: u32,
    pub upload_max_bytes: u64,
    pub mobile_breakpoint_px: u32,
    pub theme_storage_key: String,
    pub sidebar_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            empty_results_message: "No results found".to_string(),
            toast_duration_ms: 5000,
            toast_fade_ms: 500,
            rendered_toast_delay_ms: 5000,
            rendered_toast_stagger_ms: 100,
            rendered_toast_fade_ms: 350,
            ripple_duration_ms: 500,
            counter_duration_ms: 700,
            reveal_stagger_ms: 60,
            upload_max_bytes: 10 * 1024 * 1024,
            mobile_breakpoint_px: 768,
            theme_storage_key: "sms-theme".to_string(),
            sidebar_storage_key: "sms-sidebar-collapsed".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a config object, filling missing fields with defaults.
    pub fn from_json(source: &str) -> anyhow::Result<Self> {
        let config: UiConfig = serde_json::from_str(source)?;
        Ok(config)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.search_debounce_ms))
    }
}
