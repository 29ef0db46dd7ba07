//! Sidebar collapse (desktop) and off-canvas drawer (mobile).

use crate::shared::dom;
use crate::shared::storage::page_store;
use sms_ui_core::sidebar::{
    collapse_icon, restores_on, SidebarPreference, COLLAPSED_CLASS, MOBILE_OPEN_CLASS,
};
use sms_ui_core::UiConfig;
use web_sys::window;

const SIDEBAR_ID: &str = "sidebar";
const OVERLAY_ID: &str = "sidebarOverlay";
const COLLAPSE_ICON_ID: &str = "collapseIcon";
const OVERLAY_ACTIVE_CLASS: &str = "active";

pub fn toggle_collapse(config: &UiConfig) {
    let Some(sidebar) = dom::by_id(SIDEBAR_ID) else {
        return;
    };
    let collapsed = sidebar.class_list().toggle(COLLAPSED_CLASS).unwrap_or(false);
    SidebarPreference::new(page_store(), &config.sidebar_storage_key).save(collapsed);
    set_icon(collapsed);
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Restore the stored state and close the mobile drawer whenever the
/// viewport grows past the breakpoint.
pub fn init(config: &UiConfig) {
    restore(config);

    let Some(window) = window() else {
        return;
    };
    let breakpoint = config.mobile_breakpoint_px;
    dom::listen(&window, "resize", move |_| {
        if restores_on(viewport_width(), breakpoint) {
            close_mobile();
        }
    });
}

/// Re-apply a stored collapsed state on desktop-width viewports.
pub fn restore(config: &UiConfig) {
    if !restores_on(viewport_width(), config.mobile_breakpoint_px) {
        return;
    }

    let collapsed = SidebarPreference::new(page_store(), &config.sidebar_storage_key).is_collapsed();
    if !collapsed {
        return;
    }
    if let Some(sidebar) = dom::by_id(SIDEBAR_ID) {
        let _ = sidebar.class_list().add_1(COLLAPSED_CLASS);
        set_icon(true);
    }
}

pub fn toggle_mobile() {
    let Some(sidebar) = dom::by_id(SIDEBAR_ID) else {
        return;
    };
    let open = sidebar.class_list().toggle(MOBILE_OPEN_CLASS).unwrap_or(false);
    if let Some(overlay) = dom::by_id(OVERLAY_ID) {
        let _ = overlay
            .class_list()
            .toggle_with_force(OVERLAY_ACTIVE_CLASS, open);
    }
}

pub fn close_mobile() {
    if let Some(sidebar) = dom::by_id(SIDEBAR_ID) {
        let _ = sidebar.class_list().remove_1(MOBILE_OPEN_CLASS);
    }
    if let Some(overlay) = dom::by_id(OVERLAY_ID) {
        let _ = overlay.class_list().remove_1(OVERLAY_ACTIVE_CLASS);
    }
}

fn set_icon(collapsed: bool) {
    if let Some(icon) = dom::by_id(COLLAPSE_ICON_ID) {
        dom::set_text(&icon, collapse_icon(collapsed));
    }
}
