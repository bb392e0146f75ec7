//! country_explorer
//!
//! A small Rust library for browsing the REST Countries dataset: fetch once,
//! then filter, sort, favorite, and inspect countries. Pairs with the
//! `countries` CLI and the `countries-gui` desktop app.
//!
//! ### Features
//! - Fetch every country in one request, tolerating missing optional fields
//! - Filter by name, code, capital, and region; sort by name or population
//! - Autocomplete suggestions, top-10 by population
//! - Favorites and theme persisted to a local settings file
//! - Heuristic "life index" scores per country
//! - Export the displayed list as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use country_explorer::app::{App, Event};
//! use country_explorer::storage::MemoryStore;
//! use country_explorer::Client;
//!
//! let mut app = App::new(MemoryStore::default(), &num_format::Locale::en);
//! app.load(&Client::default())?;
//! app.dispatch(Event::RegionChange("Europe".into()));
//! print!("{}", country_explorer::render::list(&app.list_view()));
//! # Ok::<(), country_explorer::api::FetchError>(())
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod favorites;
pub mod models;
pub mod query;
pub mod render;
pub mod scores;
pub mod storage;
pub mod store;
pub mod suggest;
pub mod theme;
pub mod view;

pub use api::{Client, CountrySource, FetchError};
pub use app::{App, Event};
pub use models::{Country, Theme};
pub use query::{FilterCriteria, SortKey};
