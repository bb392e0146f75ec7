//! Application controller.
//!
//! [`App`] owns every piece of mutable state and exposes one handler per user
//! action. Front ends translate toolkit events into [`Event`]s and call
//! [`App::dispatch`], then read [`App::list_view`] / [`App::detail`] back.

use crate::api::{CountrySource, FetchError};
use crate::favorites::Favorites;
use crate::models::{Country, Theme};
use crate::query::{self, FilterCriteria, SortKey};
use crate::storage::KeyValueStore;
use crate::store::DataStore;
use crate::suggest::suggest;
use crate::theme;
use crate::view::{DetailView, ListView};
use num_format::Locale;

pub const TOP_N: usize = 10;
pub const LOAD_ERROR_STATUS: &str = "Error loading countries. Please refresh and try again.";
pub const FAVORITES_HEADING: &str = "⭐ Favorite Countries";
pub const TOP10_HEADING: &str = "🏆 Top 10 Most Populated Countries";
pub const LOADING_STATUS: &str = "Loading countries...";

/// Which list is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Full list, narrowed by criteria and ordered by the sort key.
    Browse,
    Favorites,
    Top10,
}

/// Every user action the controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NameInput(String),
    CodeInput(String),
    CapitalInput(String),
    RegionChange(String),
    SortChange(SortKey),
    ToggleFavorite(String),
    ShowFavorites,
    ShowAll,
    ShowTop10,
    ToggleTheme,
    CardClick(String),
    PickSuggestion(String),
    DismissSuggestions,
    CloseDetail,
}

pub struct App<S: KeyValueStore> {
    data: DataStore,
    store: S,
    favorites: Favorites,
    theme: Theme,
    criteria: FilterCriteria,
    sort: SortKey,
    mode: ViewMode,
    status: String,
    suggestions: Vec<String>,
    detail: Option<DetailView>,
    locale: &'static Locale,
}

impl<S: KeyValueStore> App<S> {
    /// Read favorites and theme from `store`; the country list starts empty.
    pub fn new(store: S, locale: &'static Locale) -> Self {
        let favorites = Favorites::load(&store);
        let theme = theme::load(&store);
        Self {
            data: DataStore::default(),
            store,
            favorites,
            theme,
            criteria: FilterCriteria::default(),
            sort: SortKey::None,
            mode: ViewMode::Browse,
            status: LOADING_STATUS.to_string(),
            suggestions: Vec::new(),
            detail: None,
            locale,
        }
    }

    /// Fetch the dataset from `source` and show it.
    pub fn load(&mut self, source: &impl CountrySource) -> Result<usize, FetchError> {
        let loaded = self.data.load(source);
        self.after_load(loaded)
    }

    /// Install a fetch result obtained elsewhere (e.g. on a worker thread).
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Country>, FetchError>,
    ) -> Result<usize, FetchError> {
        let loaded = self.data.apply(result);
        self.after_load(loaded)
    }

    fn after_load(&mut self, loaded: Result<usize, FetchError>) -> Result<usize, FetchError> {
        self.status = match &loaded {
            Ok(n) => loaded_status(*n),
            Err(_) => LOAD_ERROR_STATUS.to_string(),
        };
        loaded
    }

    /// Route one event to its handler.
    pub fn dispatch(&mut self, event: Event) {
        log::trace!("event {:?}", event);
        match event {
            Event::NameInput(text) => self.on_name_input(&text),
            Event::CodeInput(text) => self.on_code_input(&text),
            Event::CapitalInput(text) => self.on_capital_input(&text),
            Event::RegionChange(value) => self.on_region_change(&value),
            Event::SortChange(key) => self.on_sort_change(key),
            Event::ToggleFavorite(name) => self.on_toggle_favorite(&name),
            Event::ShowFavorites => self.on_show_favorites(),
            Event::ShowAll => self.on_show_all(),
            Event::ShowTop10 => self.on_show_top10(),
            Event::ToggleTheme => self.on_toggle_theme(),
            Event::CardClick(name) => self.on_card_click(&name),
            Event::PickSuggestion(name) => self.on_pick_suggestion(&name),
            Event::DismissSuggestions => self.suggestions.clear(),
            Event::CloseDetail => self.detail = None,
        }
    }

    pub fn on_name_input(&mut self, text: &str) {
        self.criteria.name = text.to_string();
        self.suggestions = suggest(self.data.all(), text);
        self.apply_filters();
    }

    pub fn on_code_input(&mut self, text: &str) {
        self.criteria.code = text.to_string();
        self.apply_filters();
    }

    pub fn on_capital_input(&mut self, text: &str) {
        self.criteria.capital = text.to_string();
        self.apply_filters();
    }

    /// `""` means any region.
    pub fn on_region_change(&mut self, value: &str) {
        self.criteria.region = value.to_string();
        self.apply_filters();
    }

    pub fn on_sort_change(&mut self, key: SortKey) {
        self.sort = key;
        if self.mode != ViewMode::Browse {
            self.apply_filters();
        }
    }

    pub fn on_pick_suggestion(&mut self, name: &str) {
        self.criteria.name = name.to_string();
        self.suggestions.clear();
        self.apply_filters();
    }

    /// Flip membership and keep the current view (mode, criteria, sort) as is.
    pub fn on_toggle_favorite(&mut self, name: &str) {
        if let Err(e) = self.favorites.toggle(name, &mut self.store) {
            log::error!("{:#}", e);
            self.status = format!("Could not save favorites: {:#}", e);
        }
    }

    pub fn on_show_favorites(&mut self) {
        self.mode = ViewMode::Favorites;
        self.status = FAVORITES_HEADING.to_string();
    }

    /// Back to the unfiltered, unsorted list.
    pub fn on_show_all(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = SortKey::None;
        self.suggestions.clear();
        self.mode = ViewMode::Browse;
        self.status = loaded_status(self.data.len());
    }

    pub fn on_show_top10(&mut self) {
        self.mode = ViewMode::Top10;
        self.status = TOP10_HEADING.to_string();
    }

    pub fn on_toggle_theme(&mut self) {
        let next = self.theme.toggled();
        match theme::save(next, &mut self.store) {
            Ok(()) => self.theme = next,
            Err(e) => log::error!("save theme: {:#}", e),
        }
    }

    /// Open the detail view; unknown names are ignored.
    pub fn on_card_click(&mut self, name: &str) {
        let max = self.data.max_population();
        self.detail = self
            .data
            .find(name)
            .map(|c| DetailView::project(c, max, self.locale));
        if self.detail.is_none() {
            log::warn!("no country named {:?}", name);
        }
    }

    fn apply_filters(&mut self) {
        self.mode = ViewMode::Browse;
        let shown = query::filter(self.data.all(), &self.criteria).len();
        self.status = format!("Showing {} of {} countries.", shown, self.data.len());
    }

    /// Countries currently on screen, in display order.
    pub fn visible(&self) -> Vec<Country> {
        match self.mode {
            ViewMode::Browse => {
                let filtered = query::filter(self.data.all(), &self.criteria);
                query::sort(&filtered, self.sort)
            }
            ViewMode::Favorites => self.favorites.favorites_only(self.data.all()),
            ViewMode::Top10 => query::top(self.data.all(), TOP_N),
        }
    }

    pub fn list_view(&self) -> ListView {
        ListView::project(
            self.status.clone(),
            &self.visible(),
            &self.favorites,
            self.locale,
        )
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn countries(&self) -> &[Country] {
        self.data.all()
    }

    /// Distinct regions in the dataset, sorted, for region pickers.
    pub fn regions(&self) -> Vec<String> {
        let set: std::collections::BTreeSet<&str> = self
            .data
            .all()
            .iter()
            .filter_map(|c| c.region.as_deref())
            .filter(|r| !r.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn loaded_status(n: usize) -> String {
    format!("Loaded {} countries.", n)
}
