//! In-memory country list, loaded once per session.

use crate::api::{CountrySource, FetchError};
use crate::models::Country;

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    countries: Vec<Country>,
}

impl DataStore {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Replace the list with whatever `source` returns.
    ///
    /// On failure the list is left empty; no partial data is kept.
    pub fn load(&mut self, source: &impl CountrySource) -> Result<usize, FetchError> {
        let result = source.fetch_countries();
        self.apply(result)
    }

    /// Install the outcome of a fetch done elsewhere (e.g. on a worker thread).
    pub fn apply(&mut self, result: Result<Vec<Country>, FetchError>) -> Result<usize, FetchError> {
        match result {
            Ok(countries) => {
                self.replace(countries);
                log::info!("loaded {} countries", self.countries.len());
                Ok(self.countries.len())
            }
            Err(e) => {
                self.countries.clear();
                log::error!("failed to load countries: {}", e);
                Err(e)
            }
        }
    }

    pub fn replace(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Largest population in the current list, `0` when empty.
    pub fn max_population(&self) -> u64 {
        self.countries.iter().map(|c| c.population).max().unwrap_or(0)
    }

    /// First record whose common name matches exactly, then case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.common_name() == name)
            .or_else(|| {
                let wanted = name.to_lowercase();
                self.countries
                    .iter()
                    .find(|c| c.common_name().to_lowercase() == wanted)
            })
    }
}
