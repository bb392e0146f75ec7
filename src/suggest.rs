//! Name autocomplete.

use crate::models::Country;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 7;

/// Common names containing `query` (case-insensitive), in dataset order.
///
/// A blank query yields nothing.
pub fn suggest(countries: &[Country], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    countries
        .iter()
        .filter(|c| c.common_name().to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .map(|c| c.common_name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dataset_order_and_caps_at_seven() {
        let list: Vec<Country> = (0..10).map(|i| Country::new(format!("Land {i}"), 1)).collect();
        let got = suggest(&list, "LAND");
        assert_eq!(got.len(), MAX_SUGGESTIONS);
        assert_eq!(got[0], "Land 0");
        assert_eq!(got[6], "Land 6");
    }

    #[test]
    fn blank_query_is_empty() {
        let list = vec![Country::new("Peru", 1)];
        assert!(suggest(&list, "   ").is_empty());
        assert!(suggest(&list, "xyz").is_empty());
    }
}
