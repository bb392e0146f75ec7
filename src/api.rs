//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! The whole dataset is fetched with one `GET /all` restricted to the fields the
//! explorer displays. There is no pagination and no retry: a failed request is
//! reported once and the caller decides what to show.
//!
//! ### Notes
//! - Records are decoded one by one. A record without `name.common` is skipped
//!   with a warning instead of failing the whole load.
//! - A missing or non-numeric `population` decodes as `0` (also logged).
//!
//! Typical usage:
//! ```no_run
//! # use country_explorer::Client;
//! let client = Client::default();
//! let countries = client.fetch_all()?;
//! println!("{} countries", countries.len());
//! # Ok::<(), country_explorer::api::FetchError>(())
//! ```

use crate::models::Country;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from `/all`. The API rejects `/all` without a field filter.
pub const FIELDS: [&str; 8] = [
    "name",
    "flags",
    "cca2",
    "cca3",
    "region",
    "capital",
    "population",
    "area",
];

/// Why the initial load failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(u16),
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Anything that can produce the full country list in one shot.
pub trait CountrySource {
    fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

// Allow -, _, . unescaped in field names
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(|s| percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Client {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// URL of the single request issued by [`Client::fetch_all`].
    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, enc_join(FIELDS))
    }

    /// Fetch every country.
    ///
    /// ### Errors
    /// - Network/HTTP error (no retry)
    /// - JSON decoding error
    /// - Top-level payload that is not an array
    pub fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let url = self.all_url();
        log::debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        let body = resp.text()?;
        let v: Value = serde_json::from_str(&body)?;
        parse_countries(v)
    }
}

impl CountrySource for Client {
    fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        self.fetch_all()
    }
}

/// Decode the `/all` payload, skipping records that lack a usable name.
pub fn parse_countries(v: Value) -> Result<Vec<Country>, FetchError> {
    let Value::Array(items) = v else {
        return Err(FetchError::Shape("not a top-level array".into()));
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let population_ok = item
            .get("population")
            .map(|p| p.as_u64().is_some())
            .unwrap_or(false);
        match serde_json::from_value::<Country>(item) {
            Ok(country) => {
                if !population_ok {
                    log::warn!(
                        "record {} ({}): population missing or not numeric, using {}",
                        idx,
                        country.common_name(),
                        country.population
                    );
                }
                out.push(country);
            }
            Err(e) => log::warn!("record {}: skipped ({})", idx, e),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_url_lists_fields() {
        let c = Client::with_base_url("http://localhost:1/");
        assert_eq!(
            c.all_url(),
            "http://localhost:1/all?fields=name,flags,cca2,cca3,region,capital,population,area"
        );
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let c = Client::with_base_url("http://127.0.0.1:9");
        match c.fetch_all() {
            Err(FetchError::Network(_)) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
