//! Runtime configuration: defaults, then environment, then CLI flags.

use crate::api::DEFAULT_BASE_URL;
use num_format::Locale;
use std::path::PathBuf;

pub const ENV_API_URL: &str = "COUNTRIES_API_URL";
pub const ENV_DATA_DIR: &str = "COUNTRIES_DATA_DIR";
pub const ENV_LOCALE: &str = "COUNTRIES_LOCALE";

/// File holding favorites and theme inside `data_dir`.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("country-explorer");
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            data_dir,
            locale: "en".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `COUNTRIES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(ENV_API_URL) {
            cfg.api_url = url;
        }
        if let Some(dir) = non_empty(ENV_DATA_DIR) {
            cfg.data_dir = PathBuf::from(dir);
        }
        if let Some(locale) = non_empty(ENV_LOCALE) {
            cfg.locale = locale;
        }
        cfg
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn number_locale(&self) -> &'static Locale {
        map_locale(&self.locale)
    }
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}
