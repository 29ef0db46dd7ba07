//! Client-side table filtering.
//!
//! A search input declares the table it filters with
//! `data-live-search="<table id>"`. Each pass hides the rows whose full text
//! does not contain the query and keeps at most one "no results" row in the
//! table body while nothing matches.

/// Attribute marking a live-search input; its value is the table id.
pub const LIVE_SEARCH_ATTR: &str = "data-live-search";

/// Class of the synthetic row shown while no data row matches.
pub const EMPTY_MARKER_CLASS: &str = "search-empty";

/// Input ↔ table association declared on the input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBinding {
    pub table_id: String,
}

impl SearchBinding {
    /// Read a binding from the marker attribute value. A blank value binds
    /// nothing.
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        let table_id = value?.trim();
        if table_id.is_empty() {
            return None;
        }
        Some(Self {
            table_id: table_id.to_string(),
        })
    }
}

/// Whether a `<tr>` with this `class` attribute holds real content rather
/// than being the empty-state marker.
pub fn is_data_row(class_attr: Option<&str>) -> bool {
    !class_attr
        .map(|classes| classes.split_whitespace().any(|c| c == EMPTY_MARKER_CLASS))
        .unwrap_or(false)
}

/// Case folding applied to both sides of the comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Trimmed, folded form of a raw input value.
pub fn normalize_query(raw: &str) -> String {
    fold(raw.trim())
}

/// Whether a row's text matches an already normalized query.
pub fn row_matches(row_text: &str, normalized_query: &str) -> bool {
    normalized_query.is_empty() || fold(row_text).contains(normalized_query)
}

/// Visibility of each row for a raw query, in row order.
pub fn visibility_map<R: AsRef<str>>(raw_query: &str, rows: &[R]) -> Vec<bool> {
    let query = normalize_query(raw_query);
    rows.iter()
        .map(|row| row_matches(row.as_ref(), &query))
        .collect()
}

/// What to do with the "no results" row after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateAction {
    Insert,
    Remove,
    Keep,
}

pub fn reconcile_empty_state(visible_rows: usize, marker_present: bool) -> EmptyStateAction {
    match (visible_rows, marker_present) {
        (0, false) => EmptyStateAction::Insert,
        (n, true) if n > 0 => EmptyStateAction::Remove,
        _ => EmptyStateAction::Keep,
    }
}

/// A table the filter can drive.
///
/// Data rows exclude the empty-state marker row; indices are stable for the
/// duration of a pass.
pub trait FilterTarget {
    fn data_row_texts(&self) -> Vec<String>;
    fn set_row_visible(&mut self, index: usize, visible: bool);
    fn has_empty_marker(&self) -> bool;
    fn insert_empty_marker(&mut self, message: &str);
    fn remove_empty_marker(&mut self);
}

/// Result of one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: usize,
    pub total: usize,
}

/// Apply `raw_query` to every data row of `target`, then reconcile the
/// empty-state marker.
pub fn run_filter_pass<T: FilterTarget + ?Sized>(
    target: &mut T,
    raw_query: &str,
    empty_message: &str,
) -> FilterOutcome {
    let rows = target.data_row_texts();
    let visibility = visibility_map(raw_query, &rows);
    for (index, visible) in visibility.iter().enumerate() {
        target.set_row_visible(index, *visible);
    }

    let visible = visibility.iter().filter(|v| **v).count();
    match reconcile_empty_state(visible, target.has_empty_marker()) {
        EmptyStateAction::Insert => target.insert_empty_marker(empty_message),
        EmptyStateAction::Remove => target.remove_empty_marker(),
        EmptyStateAction::Keep => {}
    }

    FilterOutcome {
        visible,
        total: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::{Debouncer, ManualScheduler};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// In-memory stand-in for a `<tbody>`: data rows and marker rows live
    /// side by side, told apart by their class attribute like in the DOM.
    #[derive(Debug, Default)]
    struct FakeTable {
        rows: Vec<FakeRow>,
        inserts: usize,
    }

    #[derive(Debug)]
    struct FakeRow {
        class: Option<String>,
        text: String,
        visible: bool,
    }

    impl FakeTable {
        fn with_rows(texts: &[&str]) -> Self {
            Self {
                rows: texts
                    .iter()
                    .map(|t| FakeRow {
                        class: None,
                        text: t.to_string(),
                        visible: true,
                    })
                    .collect(),
                ..Default::default()
            }
        }

        fn data_rows(&self) -> impl Iterator<Item = &FakeRow> {
            self.rows.iter().filter(|r| is_data_row(r.class.as_deref()))
        }

        fn visible(&self) -> Vec<bool> {
            self.data_rows().map(|r| r.visible).collect()
        }

        fn markers(&self) -> Vec<String> {
            self.rows
                .iter()
                .filter(|r| !is_data_row(r.class.as_deref()))
                .map(|r| r.text.clone())
                .collect()
        }
    }

    impl FilterTarget for FakeTable {
        fn data_row_texts(&self) -> Vec<String> {
            self.data_rows().map(|r| r.text.clone()).collect()
        }

        fn set_row_visible(&mut self, index: usize, visible: bool) {
            if let Some(row) = self
                .rows
                .iter_mut()
                .filter(|r| is_data_row(r.class.as_deref()))
                .nth(index)
            {
                row.visible = visible;
            }
        }

        fn has_empty_marker(&self) -> bool {
            !self.markers().is_empty()
        }

        fn insert_empty_marker(&mut self, message: &str) {
            self.inserts += 1;
            self.rows.push(FakeRow {
                class: Some(EMPTY_MARKER_CLASS.to_string()),
                text: message.to_string(),
                visible: true,
            });
        }

        fn remove_empty_marker(&mut self) {
            self.rows.retain(|r| is_data_row(r.class.as_deref()));
        }
    }

    const ROWS: [&str; 2] = ["Alice Smith — Grade 9", "Bob Jones — Grade 10"];

    #[test]
    fn test_grade_scenario() {
        let mut table = FakeTable::with_rows(&ROWS);

        let outcome = run_filter_pass(&mut table, "grade 9", "No results found");
        assert_eq!(table.visible(), vec![true, false]);
        assert!(table.markers().is_empty());
        assert_eq!(outcome, FilterOutcome { visible: 1, total: 2 });

        run_filter_pass(&mut table, "zzz", "No results found");
        assert_eq!(table.visible(), vec![false, false]);
        assert_eq!(table.markers(), vec!["No results found".to_string()]);

        run_filter_pass(&mut table, "", "No results found");
        assert_eq!(table.visible(), vec![true, true]);
        assert!(table.markers().is_empty());
    }

    #[test]
    fn test_marker_inserted_once() {
        let mut table = FakeTable::with_rows(&ROWS);
        run_filter_pass(&mut table, "zzz", "No results found");
        run_filter_pass(&mut table, "qqq", "No results found");
        run_filter_pass(&mut table, "zzz", "No results found");
        assert_eq!(table.markers().len(), 1);
        assert_eq!(table.inserts, 1);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let mut once = FakeTable::with_rows(&ROWS);
        let mut twice = FakeTable::with_rows(&ROWS);
        run_filter_pass(&mut once, "bob", "none");
        run_filter_pass(&mut twice, "bob", "none");
        run_filter_pass(&mut twice, "bob", "none");
        assert_eq!(once.visible(), twice.visible());
        assert_eq!(once.markers(), twice.markers());
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        assert_eq!(visibility_map("   \t ", &ROWS), vec![true, true]);
        assert_eq!(visibility_map("  JONES ", &ROWS), vec![false, true]);
    }

    #[test]
    fn test_matching_is_plain_substring() {
        // No tokenization: word order and gaps matter.
        assert_eq!(visibility_map("smith alice", &ROWS), vec![false, false]);
        assert_eq!(visibility_map("ce sm", &ROWS), vec![true, false]);
        assert_eq!(visibility_map("grade 1", &ROWS), vec![false, true]);
    }

    #[test]
    fn test_folding_is_unicode_aware() {
        let rows = ["Élodie Durand", "ÖZTÜRK"];
        assert_eq!(visibility_map("élodie", &rows), vec![true, false]);
        assert_eq!(visibility_map("öztürk", &rows), vec![false, true]);
    }

    #[test]
    fn test_visibility_matches_fold_contains_rule() {
        let rows = ["ID 42 Alice", "hidden-cell Bob", "", "   "];
        for query in ["", "a", "ALICE", " bob ", "42", "cell b", "x"] {
            let expected: Vec<bool> = rows
                .iter()
                .map(|r| fold(r).contains(&fold(query.trim())))
                .collect();
            assert_eq!(visibility_map(query, &rows), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_empty_table_shows_marker() {
        let mut table = FakeTable::default();
        let outcome = run_filter_pass(&mut table, "", "No results found");
        assert_eq!(outcome, FilterOutcome { visible: 0, total: 0 });
        assert_eq!(table.markers().len(), 1);
    }

    #[test]
    fn test_marker_row_is_not_a_data_row() {
        assert!(is_data_row(None));
        assert!(is_data_row(Some("")));
        assert!(is_data_row(Some("row-even search-empty-hint")));
        assert!(!is_data_row(Some("search-empty")));
        assert!(!is_data_row(Some("  highlight   search-empty ")));
    }

    #[test]
    fn test_marker_text_never_matches_itself() {
        let mut table = FakeTable::with_rows(&ROWS);
        run_filter_pass(&mut table, "zzz", "No results found");
        assert_eq!(table.rows.len(), 3);

        // The marker's own text must not count as a hit.
        let outcome = run_filter_pass(&mut table, "no results", "No results found");
        assert_eq!(outcome, FilterOutcome { visible: 0, total: 2 });
        assert_eq!(table.visible(), vec![false, false]);
        assert_eq!(table.markers(), vec!["No results found".to_string()]);
        assert_eq!(table.inserts, 1);

        let outcome = run_filter_pass(&mut table, "jones", "No results found");
        assert_eq!(outcome, FilterOutcome { visible: 1, total: 2 });
        assert!(table.markers().is_empty());
    }

    #[test]
    fn test_reconcile_empty_state() {
        assert_eq!(reconcile_empty_state(0, false), EmptyStateAction::Insert);
        assert_eq!(reconcile_empty_state(0, true), EmptyStateAction::Keep);
        assert_eq!(reconcile_empty_state(3, true), EmptyStateAction::Remove);
        assert_eq!(reconcile_empty_state(3, false), EmptyStateAction::Keep);
    }

    #[test]
    fn test_binding_from_attribute() {
        assert_eq!(
            SearchBinding::from_attribute(Some("students-table")),
            Some(SearchBinding {
                table_id: "students-table".to_string()
            })
        );
        assert_eq!(SearchBinding::from_attribute(Some("  ")), None);
        assert_eq!(SearchBinding::from_attribute(None), None);
    }

    #[test]
    fn test_debounced_typing_filters_once_with_final_query() {
        let scheduler = Rc::new(ManualScheduler::new());
        let table = Rc::new(RefCell::new(FakeTable::with_rows(&ROWS)));
        let queries = Rc::new(RefCell::new(Vec::new()));

        let target = Rc::clone(&table);
        let seen = Rc::clone(&queries);
        let debouncer = Debouncer::new(
            Rc::clone(&scheduler),
            Duration::from_millis(300),
            move |query: String| {
                seen.borrow_mut().push(query.clone());
                run_filter_pass(&mut *target.borrow_mut(), &query, "No results found");
            },
        );

        for typed in ["b", "bo", "bob"] {
            debouncer.call(typed.to_string());
            scheduler.advance(Duration::from_millis(50));
        }
        assert!(queries.borrow().is_empty());
        assert_eq!(table.borrow().visible(), vec![true, true]);

        scheduler.advance(Duration::from_millis(300));
        assert_eq!(*queries.borrow(), vec!["bob".to_string()]);
        assert_eq!(table.borrow().visible(), vec![false, true]);
    }
}
