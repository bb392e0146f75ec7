//! Favorite countries, keyed by common name and persisted under `favorites`.

use crate::models::Country;
use crate::storage::KeyValueStore;
use anyhow::{Context, Result};

pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    /// Insertion order, as persisted.
    names: Vec<String>,
}

impl Favorites {
    /// Read the persisted list. Missing or unreadable data starts empty.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let names = match store.get(FAVORITES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut names) => {
                    let mut seen = std::collections::HashSet::new();
                    names.retain(|n| seen.insert(n.clone()));
                    names
                }
                Err(e) => {
                    log::warn!("ignoring unreadable favorites: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { names }
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Add `name` if absent, remove it if present, then persist the whole list.
    ///
    /// Returns the new membership. The in-memory list only changes once the
    /// write succeeded, so memory and storage never disagree.
    pub fn toggle(&mut self, name: &str, store: &mut impl KeyValueStore) -> Result<bool> {
        let mut next = self.names.clone();
        let now_favorite = if let Some(pos) = next.iter().position(|n| n == name) {
            next.remove(pos);
            false
        } else {
            next.push(name.to_string());
            true
        };
        let encoded = serde_json::to_string(&next)?;
        store
            .set(FAVORITES_KEY, &encoded)
            .context("save favorites")?;
        self.names = next;
        log::info!(
            "{} {} favorites",
            name,
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    /// Favorited countries in dataset order.
    pub fn favorites_only(&self, countries: &[Country]) -> Vec<Country> {
        countries
            .iter()
            .filter(|c| self.is_favorite(c.common_name()))
            .cloned()
            .collect()
    }
}
