//! Light/dark theme preference.
//!
//! The active theme lives in the `data-theme` attribute of `<html>`; the
//! preference survives reloads through a [`KeyValueStore`].

use crate::storage::KeyValueStore;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value used for the `data-theme` attribute and the stored flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored or attribute value; anything unknown is dark.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph for the theme button: it shows the theme you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn button_title(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}

/// Persisted theme choice.
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Theme {
        self.store
            .get(&self.key)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(&self.key, theme.as_str());
    }

    /// Flip `current`, persist the result and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        log::debug!("theme switched to {}", next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_theme_is_dark() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(&store, "sms-theme");
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(&store, "sms-theme");
        let next = pref.toggle(Theme::Dark);
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get("sms-theme").as_deref(), Some("light"));
        assert_eq!(pref.load(), Theme::Light);
        assert_eq!(pref.toggle(next), Theme::Dark);
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_dark() {
        let store = MemoryStore::new();
        store.set("sms-theme", "forest");
        let pref = ThemePreference::new(&store, "sms-theme");
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_icon_and_title() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.button_title(), "Switch to Light Mode");
        assert_eq!(Theme::Light.button_title(), "Switch to Dark Mode");
    }
}
