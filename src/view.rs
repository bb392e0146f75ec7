//! View models: what a front end shows, computed without touching any UI toolkit.

use crate::favorites::Favorites;
use crate::models::Country;
use crate::scores::LifeIndex;
use num_format::{Locale, ToFormattedString};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_RESULTS: &str = "No countries found.";
pub const FAVORITE_GLYPH: &str = "⭐";
pub const NOT_FAVORITE_GLYPH: &str = "☆";

/// Population with locale grouping separators, e.g. `33,000,000`.
pub fn format_population(population: u64, locale: &Locale) -> String {
    population.to_formatted_string(locale)
}

/// One country card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Favorites key and click target.
    pub name: String,
    pub flag_url: Option<String>,
    pub favorite: bool,
    pub favorite_glyph: &'static str,
    /// `"US (USA)"`; missing codes render empty.
    pub codes: String,
    pub region: String,
    pub capital: String,
    pub population: String,
}

impl CardView {
    pub fn project(country: &Country, favorites: &Favorites, locale: &Locale) -> Self {
        let favorite = favorites.is_favorite(country.common_name());
        Self {
            name: country.common_name().to_string(),
            flag_url: country.flag_png().map(str::to_string),
            favorite,
            favorite_glyph: if favorite {
                FAVORITE_GLYPH
            } else {
                NOT_FAVORITE_GLYPH
            },
            codes: format!(
                "{} ({})",
                country.cca2.as_deref().unwrap_or(""),
                country.cca3.as_deref().unwrap_or("")
            ),
            region: country
                .region
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            capital: country
                .first_capital()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            population: format_population(country.population, locale),
        }
    }
}

/// The card list plus the status line above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub status: String,
    pub cards: Vec<CardView>,
    /// Set instead of cards when the list is empty.
    pub placeholder: Option<&'static str>,
}

impl ListView {
    pub fn project(
        status: impl Into<String>,
        countries: &[Country],
        favorites: &Favorites,
        locale: &Locale,
    ) -> Self {
        let cards: Vec<CardView> = countries
            .iter()
            .map(|c| CardView::project(c, favorites, locale))
            .collect();
        let placeholder = cards.is_empty().then_some(NO_RESULTS);
        Self {
            status: status.into(),
            cards,
            placeholder,
        }
    }
}

/// A labeled percentage bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBar {
    pub label: &'static str,
    /// 0..=100
    pub value: u8,
}

impl ScoreBar {
    pub fn fraction(&self) -> f32 {
        f32::from(self.value.min(100)) / 100.0
    }
}

pub const LIFE_INDEX_HEADING: &str = "🧬 Country Life Index";

/// Detail panel for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub flag_url: Option<String>,
    pub capital: String,
    pub region: String,
    pub population: String,
    /// `"US / USA"`
    pub codes: String,
    pub bars: [ScoreBar; 4],
}

impl DetailView {
    /// `max_population` is the dataset maximum at the time the view opens.
    pub fn project(country: &Country, max_population: u64, locale: &Locale) -> Self {
        let idx = LifeIndex::compute(country, max_population);
        let or_na = |v: Option<&str>| v.filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE).to_string();
        Self {
            title: country.common_name().to_string(),
            flag_url: country.flag_png().map(str::to_string),
            capital: or_na(country.first_capital()),
            region: or_na(country.region.as_deref()),
            population: format_population(country.population, locale),
            codes: format!(
                "{} / {}",
                or_na(country.cca2.as_deref()),
                or_na(country.cca3.as_deref())
            ),
            bars: [
                ScoreBar {
                    label: "🧍 Population Power",
                    value: idx.population,
                },
                ScoreBar {
                    label: "💰 Estimated Income",
                    value: idx.income,
                },
                ScoreBar {
                    label: "🏙 Urbanization",
                    value: idx.urbanization,
                },
                ScoreBar {
                    label: "🌱 Sustainability",
                    value: idx.sustainability,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fills_gaps_with_na() {
        let c = Country::new("Nowhere", 1234567);
        let card = CardView::project(&c, &Favorites::default(), &Locale::en);
        assert_eq!(card.region, NOT_AVAILABLE);
        assert_eq!(card.capital, NOT_AVAILABLE);
        assert_eq!(card.codes, " ()");
        assert_eq!(card.population, "1,234,567");
        assert_eq!(card.favorite_glyph, NOT_FAVORITE_GLYPH);
    }

    #[test]
    fn german_grouping() {
        assert_eq!(format_population(1234567, &Locale::de), "1.234.567");
    }

    #[test]
    fn detail_bars_follow_scores() {
        let c = Country::new("Peru", 33_000_000)
            .with_region("Americas")
            .with_area(1_285_216.0)
            .with_codes("PE", "PER");
        let d = DetailView::project(&c, 66_000_000, &Locale::en);
        let values: Vec<u8> = d.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![50, 70, 35, 65]);
        assert_eq!(d.codes, "PE / PER");
        assert!((d.bars[0].fraction() - 0.5).abs() < 1e-6);
    }
}
