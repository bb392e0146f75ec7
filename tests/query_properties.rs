use country_explorer::api::parse_countries;
use country_explorer::models::Country;
use country_explorer::query::{FilterCriteria, SortKey, filter, sort, top};

fn dataset() -> Vec<Country> {
    let v: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/countries.json")).unwrap();
    parse_countries(v).unwrap()
}

fn names(list: &[Country]) -> Vec<&str> {
    list.iter().map(|c| c.common_name()).collect()
}

fn criteria_samples() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::default(),
        FilterCriteria {
            name: "united".into(),
            ..Default::default()
        },
        FilterCriteria {
            code: "IND".into(),
            ..Default::default()
        },
        FilterCriteria {
            capital: "on".into(),
            region: "Europe".into(),
            ..Default::default()
        },
        FilterCriteria {
            region: "Asia".into(),
            name: "a".into(),
            ..Default::default()
        },
    ]
}

#[test]
fn filter_is_idempotent() {
    let list = dataset();
    for c in criteria_samples() {
        let once = filter(&list, &c);
        let twice = filter(&once, &c);
        assert_eq!(once, twice, "criteria {:?}", c);
    }
}

#[test]
fn empty_criteria_return_input_unchanged() {
    let list = dataset();
    assert_eq!(filter(&list, &FilterCriteria::default()), list);
}

#[test]
fn population_sort_is_non_increasing_and_name_sort_non_decreasing() {
    let list = dataset();
    let by_pop = sort(&list, SortKey::PopulationDesc);
    assert!(by_pop.windows(2).all(|w| w[0].population >= w[1].population));

    let by_name = sort(&list, SortKey::NameAsc);
    assert_eq!(
        names(&by_name),
        vec![
            "Bouvet Island",
            "India",
            "Macau",
            "Nigeria",
            "Nowhere Land",
            "Peru",
            "United Kingdom",
            "United States",
        ]
    );

    assert_eq!(sort(&list, SortKey::None), list);
}

#[test]
fn name_sort_places_accented_names_by_base_letter() {
    let list: Vec<Country> = [
        "Zimbabwe",
        "Åland Islands",
        "Albania",
        "Tuvalu",
        "Türkiye",
        "Turkmenistan",
        "Curaçao",
        "Cuba",
        "Réunion",
        "Romania",
    ]
    .iter()
    .map(|n| Country::new(*n, 1))
    .collect();
    assert_eq!(
        names(&sort(&list, SortKey::NameAsc)),
        vec![
            "Åland Islands",
            "Albania",
            "Cuba",
            "Curaçao",
            "Réunion",
            "Romania",
            "Türkiye",
            "Turkmenistan",
            "Tuvalu",
            "Zimbabwe",
        ]
    );
}

#[test]
fn top_ten_of_a_larger_list() {
    let list: Vec<Country> = (0..12u64)
        .map(|i| Country::new(format!("C{i}"), (i * 7919) % 13 * 1_000))
        .collect();
    let got = top(&list, 10);
    assert_eq!(got.len(), 10);
    assert_eq!(got, sort(&list, SortKey::PopulationDesc)[..10].to_vec());
    assert!(got.windows(2).all(|w| w[0].population >= w[1].population));
}

#[test]
fn top_is_prefix_of_population_sort() {
    let list = dataset();
    let sorted = sort(&list, SortKey::PopulationDesc);
    assert_eq!(top(&list, 3), sorted[..3].to_vec());
    // fewer than n countries: all of them
    assert_eq!(top(&list, 10), sorted);
    assert_eq!(names(&top(&list, 1)), vec!["India"]);
}

#[test]
fn code_us_matches_cca2_or_cca3_only() {
    let list = vec![
        Country::new("Two", 1).with_codes("US", "XXX"),
        Country::new("Three", 1).with_codes("XX", "USA"),
        Country::new("Britain", 1).with_codes("GB", "GBR"),
    ];
    let crit = FilterCriteria {
        code: "us".into(),
        ..Default::default()
    };
    assert_eq!(names(&filter(&list, &crit)), vec!["Two"]);

    let crit = FilterCriteria {
        code: "usa".into(),
        ..Default::default()
    };
    assert_eq!(names(&filter(&list, &crit)), vec!["Three"]);
}

#[test]
fn all_criteria_must_hold() {
    let list = dataset();
    let crit = FilterCriteria {
        name: "UNITED".into(),
        region: "Europe".into(),
        ..Default::default()
    };
    assert_eq!(names(&filter(&list, &crit)), vec!["United Kingdom"]);

    // region is exact, not a substring and not case-folded
    let crit = FilterCriteria {
        region: "europe".into(),
        ..Default::default()
    };
    assert!(filter(&list, &crit).is_empty());
}
