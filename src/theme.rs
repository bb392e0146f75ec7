//! Persisted color theme.

use crate::models::Theme;
use crate::storage::KeyValueStore;
use anyhow::Result;

pub const THEME_KEY: &str = "theme";

/// Saved theme; anything other than `"dark"` means light.
pub fn load(store: &impl KeyValueStore) -> Theme {
    match store.get(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn save(theme: Theme, store: &mut impl KeyValueStore) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
