//! Live table search: `<input data-live-search="students-table">` filters
//! the rows of `<table id="students-table">` as the user types.

use crate::shared::dom;
use crate::shared::timer::TimeoutScheduler;
use sms_ui_core::live_search::{
    is_data_row, run_filter_pass, FilterTarget, SearchBinding, EMPTY_MARKER_CLASS,
    LIVE_SEARCH_ATTR,
};
use sms_ui_core::{Debouncer, UiConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

const EMPTY_CELL_STYLE: &str = "text-align:center;padding:20px;color:#94a3b8;";

/// Rows of a bound table, captured at the start of a pass.
struct DomTable {
    table: Element,
    rows: Vec<HtmlElement>,
}

impl DomTable {
    fn snapshot(table: &Element) -> Self {
        let rows = dom::query_all_in(table, "tbody tr")
            .into_iter()
            .filter(|row| is_data_row(row.get_attribute("class").as_deref()))
            .filter_map(|row| row.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            table: table.clone(),
            rows,
        }
    }

    fn marker(&self) -> Option<Element> {
        dom::query_in(&self.table, &format!(".{EMPTY_MARKER_CLASS}"))
    }
}

impl FilterTarget for DomTable {
    fn data_row_texts(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.text_content().unwrap_or_default())
            .collect()
    }

    fn set_row_visible(&mut self, index: usize, visible: bool) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        let style = row.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }

    fn has_empty_marker(&self) -> bool {
        self.marker().is_some()
    }

    fn insert_empty_marker(&mut self, message: &str) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(body) = dom::query_in(&self.table, "tbody") else {
            return;
        };
        let (Ok(row), Ok(cell)) = (document.create_element("tr"), document.create_element("td")) else {
            return;
        };
        row.set_class_name(EMPTY_MARKER_CLASS);
        let _ = cell.set_attribute("colspan", "100");
        let _ = cell.set_attribute("style", EMPTY_CELL_STYLE);
        dom::set_text(&cell, message);
        let _ = row.append_child(&cell);
        let _ = body.append_child(&row);
    }

    fn remove_empty_marker(&mut self) {
        if let Some(marker) = self.marker() {
            marker.remove();
        }
    }
}

/// Bind every `[data-live-search]` input on the page. Inputs whose table is
/// missing are skipped.
pub fn init(config: &UiConfig) {
    // Один планировщик на все привязки, состояние debounce у каждой своё
    let scheduler = Rc::new(TimeoutScheduler);
    let mut bound = 0;

    for element in dom::query_all(&format!("[{LIVE_SEARCH_ATTR}]")) {
        let attr = element.get_attribute(LIVE_SEARCH_ATTR);
        let Some(binding) = SearchBinding::from_attribute(attr.as_deref()) else {
            continue;
        };
        let Some(table) = dom::by_id(&binding.table_id) else {
            log::debug!("live search: table #{} not found, skipping", binding.table_id);
            continue;
        };
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        bind(input, table, Rc::clone(&scheduler), config);
        bound += 1;
    }

    if bound > 0 {
        log::debug!("live search: {bound} table(s) bound");
    }
}

fn bind(input: HtmlInputElement, table: Element, scheduler: Rc<TimeoutScheduler>, config: &UiConfig) {
    let message = config.empty_results_message.clone();
    let table_id = table.id();
    let debouncer = Debouncer::new(scheduler, config.search_debounce(), move |query: String| {
        let outcome = run_filter_pass(&mut DomTable::snapshot(&table), &query, &message);
        log::debug!(
            "live search #{table_id}: {} of {} rows match {query:?}",
            outcome.visible,
            outcome.total
        );
    });

    let source = input.clone();
    dom::listen(&input, "input", move |_| debouncer.call(source.value()));
}
