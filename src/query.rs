//! Filtering and ordering of the country list.
//!
//! Every call recomputes from the full list; nothing is indexed.

use crate::models::Country;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Current user-entered filter values. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring of the common name, case-insensitive.
    pub name: String,
    /// Exact cca2 or cca3, case-insensitive.
    pub code: String,
    /// Substring of the first capital, case-insensitive.
    pub capital: String,
    /// Exact region (e.g. "Europe"), case-sensitive.
    pub region: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.code.trim().is_empty()
            && self.capital.trim().is_empty()
            && self.region.is_empty()
    }

    pub fn matches(&self, country: &Country) -> bool {
        let name = self.name.trim().to_lowercase();
        let code = self.code.trim().to_lowercase();
        let capital = self.capital.trim().to_lowercase();

        let matches_name = country.common_name().to_lowercase().contains(&name);
        let matches_code = code.is_empty()
            || [&country.cca2, &country.cca3]
                .into_iter()
                .flatten()
                .any(|c| c.to_lowercase() == code);
        let matches_capital = country
            .first_capital()
            .unwrap_or("")
            .to_lowercase()
            .contains(&capital);
        let matches_region =
            self.region.is_empty() || country.region.as_deref().unwrap_or("") == self.region;

        matches_name && matches_code && matches_capital && matches_region
    }
}

/// Keep countries matching all criteria, preserving input order.
pub fn filter(countries: &[Country], criteria: &FilterCriteria) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    NameAsc,
    PopulationDesc,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Default order",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::PopulationDesc => "Population (high to low)",
        }
    }
}

/// Primary collation key: decomposed, accents dropped, lowercased.
/// "Åland Islands" becomes "aland islands".
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style name order: base letters first, then accents, then case.
/// "Åland Islands" sorts before "Albania", "Türkiye" before "Tuvalu".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Stable sort into a new list.
pub fn sort(countries: &[Country], key: SortKey) -> Vec<Country> {
    let mut out = countries.to_vec();
    match key {
        SortKey::None => {}
        SortKey::NameAsc => out.sort_by(|a, b| compare_names(a.common_name(), b.common_name())),
        SortKey::PopulationDesc => out.sort_by(|a, b| b.population.cmp(&a.population)),
    }
    out
}

/// The `n` most populated countries.
pub fn top(countries: &[Country], n: usize) -> Vec<Country> {
    let mut out = sort(countries, SortKey::PopulationDesc);
    out.truncate(n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("United States", 331_000_000)
                .with_codes("US", "USA")
                .with_region("Americas")
                .with_capital("Washington, D.C."),
            Country::new("United Kingdom", 67_000_000)
                .with_codes("GB", "GBR")
                .with_region("Europe")
                .with_capital("London"),
            Country::new("Antarctica", 1000).with_codes("AQ", "ATA"),
        ]
    }

    #[test]
    fn code_is_exact_not_substring() {
        let crit = FilterCriteria {
            code: "u".into(),
            ..Default::default()
        };
        assert!(filter(&sample(), &crit).is_empty());
        let crit = FilterCriteria {
            code: "gbr".into(),
            ..Default::default()
        };
        assert_eq!(filter(&sample(), &crit)[0].common_name(), "United Kingdom");
    }

    #[test]
    fn missing_capital_and_region_only_match_empty_criteria() {
        let crit = FilterCriteria {
            capital: "a".into(),
            ..Default::default()
        };
        let names: Vec<_> = filter(&sample(), &crit)
            .into_iter()
            .map(|c| c.name.common)
            .collect();
        assert_eq!(names, vec!["United States"]);

        let crit = FilterCriteria {
            region: "Antarctic".into(),
            ..Default::default()
        };
        assert!(filter(&sample(), &crit).is_empty());
    }

    #[test]
    fn input_whitespace_is_trimmed() {
        let crit = FilterCriteria {
            name: "  kingdom ".into(),
            ..Default::default()
        };
        assert_eq!(filter(&sample(), &crit).len(), 1);
    }

    #[test]
    fn name_sort_ignores_case() {
        let list = vec![Country::new("b", 1), Country::new("A", 1), Country::new("a", 1)];
        let names: Vec<_> = sort(&list, SortKey::NameAsc)
            .into_iter()
            .map(|c| c.name.common)
            .collect();
        assert_eq!(names, vec!["A", "a", "b"]);
    }

    #[test]
    fn accents_fold_to_base_letters() {
        assert_eq!(collation_key("Åland Islands"), "aland islands");
        assert_eq!(collation_key("Curaçao"), "curacao");
        assert_eq!(compare_names("Réunion", "Romania"), Ordering::Less);
        assert_eq!(compare_names("Aland", "Åland"), Ordering::Less);
    }
}
