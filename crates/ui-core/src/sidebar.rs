//! Collapsed/expanded sidebar preference.

use crate::storage::KeyValueStore;

pub const COLLAPSED_CLASS: &str = "collapsed";
pub const MOBILE_OPEN_CLASS: &str = "open";

/// Arrow shown on the collapse button.
pub fn collapse_icon(collapsed: bool) -> &'static str {
    if collapsed {
        "▶"
    } else {
        "◀"
    }
}

/// The stored state is only honoured on desktop-width viewports; below the
/// breakpoint the sidebar is an off-canvas drawer instead.
pub fn restores_on(viewport_width: f64, breakpoint_px: u32) -> bool {
    viewport_width > f64::from(breakpoint_px)
}

pub struct SidebarPreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SidebarPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some("true")
    }

    pub fn save(&self, collapsed: bool) {
        self.store
            .set(&self.key, if collapsed { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_collapsed_flag_roundtrip() {
        let store = MemoryStore::new();
        let pref = SidebarPreference::new(&store, "sms-sidebar-collapsed");
        assert!(!pref.is_collapsed());
        pref.save(true);
        assert_eq!(store.get("sms-sidebar-collapsed").as_deref(), Some("true"));
        assert!(pref.is_collapsed());
        pref.save(false);
        assert!(!pref.is_collapsed());
    }

    #[test]
    fn test_only_literal_true_counts() {
        let store = MemoryStore::new();
        store.set("sms-sidebar-collapsed", "TRUE");
        let pref = SidebarPreference::new(&store, "sms-sidebar-collapsed");
        assert!(!pref.is_collapsed());
    }

    #[test]
    fn test_restore_breakpoint() {
        assert!(!restores_on(768.0, 768));
        assert!(!restores_on(375.0, 768));
        assert!(restores_on(769.0, 768));
        assert!(restores_on(1440.0, 768));
    }

    #[test]
    fn test_collapse_icon() {
        assert_eq!(collapse_icon(true), "▶");
        assert_eq!(collapse_icon(false), "◀");
    }
}
