//! Upload zones: click-to-browse, drag-and-drop and a preview line with the
//! chosen file's name and size.

use crate::shared::dom;
use sms_ui_core::upload::{FileInfo, INFO_STYLE, ZONE_ACTIVE, ZONE_IDLE};
use sms_ui_core::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlInputElement, Node};

pub fn init(config: &UiConfig) {
    for zone in dom::query_all(".upload-zone") {
        let input = dom::query_in(&zone, "input[type=\"file\"]")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let Some(input) = input else {
            continue;
        };
        attach(zone, input, config.upload_max_bytes);
    }
}

fn paint_zone(zone: &Element, (border, background): (&str, &str)) {
    dom::set_style(zone, "border-color", border);
    dom::set_style(zone, "background", background);
}

fn attach(zone: Element, input: HtmlInputElement, max_bytes: u64) {
    let picker = input.clone();
    dom::listen(&zone, "click", move |ev| {
        let on_input = ev
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .map(|node| {
                let input_node: &Node = picker.as_ref();
                node.is_same_node(Some(input_node))
            })
            .unwrap_or(false);
        if !on_input {
            picker.click();
        }
    });

    let target = zone.clone();
    dom::listen(&zone, "dragover", move |ev| {
        ev.prevent_default();
        paint_zone(&target, ZONE_ACTIVE);
    });

    let target = zone.clone();
    dom::listen(&zone, "dragleave", move |_| paint_zone(&target, ZONE_IDLE));

    let target = zone.clone();
    let receiver = input.clone();
    dom::listen(&zone, "drop", move |ev| {
        ev.prevent_default();
        paint_zone(&target, ZONE_IDLE);
        let files = ev
            .dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .and_then(|transfer| transfer.files());
        if let Some(files) = files {
            receiver.set_files(Some(&files));
            show_file_info(&receiver, max_bytes);
        }
    });

    let source = input.clone();
    dom::listen(&input, "change", move |_| show_file_info(&source, max_bytes));
}

/// Fill (creating if needed) the `.file-info` block next to the zone.
fn show_file_info(input: &HtmlInputElement, max_bytes: u64) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let Some(parent) = input
        .closest(".upload-zone")
        .ok()
        .flatten()
        .and_then(|zone| zone.parent_element())
    else {
        return;
    };
    let Some(info_el) = dom::query_in(&parent, ".file-info").or_else(|| create_info(&parent)) else {
        return;
    };

    let info = FileInfo::describe(&file.name(), file.size() as u64, max_bytes);
    let (background, color) = info.colors();
    dom::set_text(&info_el, &info.text);
    dom::set_style(&info_el, "display", "block");
    dom::set_style(&info_el, "background", background);
    dom::set_style(&info_el, "color", color);
    if info.oversized {
        log::debug!("upload rejected client-side: {}", info.text);
    }
}

fn create_info(parent: &Element) -> Option<Element> {
    let info = dom::document()?.create_element("div").ok()?;
    info.set_class_name("file-info");
    let _ = info.set_attribute("style", INFO_STYLE);
    parent.append_child(&info).ok()?;
    Some(info)
}
