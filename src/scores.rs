//! "Country Life Index" scores shown in the detail view.
//!
//! These are coarse heuristics for entertainment, not economic or demographic
//! data. Thresholds and outputs are fixed constants.

use crate::models::Country;

/// Population in percent of the largest population in the dataset, rounded.
///
/// Returns `0` when `max_population` is `0` (empty or all-zero dataset).
/// Clamped to `100` if `max_population` is stale and smaller than the country's.
pub fn population_score(country: &Country, max_population: u64) -> u8 {
    if max_population == 0 {
        return 0;
    }
    let pct = (country.population as f64 / max_population as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Estimated income by region, with one population-conditioned branch for Asia.
pub fn income_score(country: &Country) -> u8 {
    match country.region.as_deref() {
        Some("Europe") => 80,
        Some("Americas") => 70,
        Some("Asia") if country.population > 100_000_000 => 65,
        Some("Africa") => 45,
        _ => 55,
    }
}

/// Urbanization from population density (people per km²); `50` without an area.
pub fn urbanization_score(country: &Country) -> u8 {
    let Some(area) = country.known_area() else {
        return 50;
    };
    let density = country.population as f64 / area;
    if density > 300.0 {
        85
    } else if density > 100.0 {
        65
    } else if density > 50.0 {
        50
    } else {
        35
    }
}

/// Complement of [`urbanization_score`].
pub fn sustainability_score(country: &Country) -> u8 {
    100 - urbanization_score(country)
}

/// All four scores for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeIndex {
    pub population: u8,
    pub income: u8,
    pub urbanization: u8,
    pub sustainability: u8,
}

impl LifeIndex {
    pub fn compute(country: &Country, max_population: u64) -> Self {
        let urbanization = urbanization_score(country);
        Self {
            population: population_score(country, max_population),
            income: income_score(country),
            urbanization,
            sustainability: 100 - urbanization,
        }
    }
}
