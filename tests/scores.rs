use country_explorer::models::Country;
use country_explorer::scores::{
    LifeIndex, income_score, population_score, sustainability_score, urbanization_score,
};

#[test]
fn peru_scenario() {
    let peru = Country::new("Peru", 33_000_000)
        .with_region("Americas")
        .with_area(1_285_216.0);
    assert_eq!(income_score(&peru), 70);
    assert_eq!(urbanization_score(&peru), 35);
    assert_eq!(sustainability_score(&peru), 65);
    // only country in its dataset: it is the maximum
    assert_eq!(population_score(&peru, peru.population), 100);
}

#[test]
fn asia_income_depends_on_population() {
    let big = Country::new("Big", 150_000_000).with_region("Asia");
    let small = Country::new("Small", 50_000_000).with_region("Asia");
    assert_eq!(income_score(&big), 65);
    assert_eq!(income_score(&small), 55);
    // exactly 100M is not "above"
    assert_eq!(income_score(&Country::new("Edge", 100_000_000).with_region("Asia")), 55);
}

#[test]
fn income_lookup_by_region() {
    let with = |r: &str| income_score(&Country::new("X", 1).with_region(r));
    assert_eq!(with("Europe"), 80);
    assert_eq!(with("Americas"), 70);
    assert_eq!(with("Africa"), 45);
    assert_eq!(with("Oceania"), 55);
    assert_eq!(income_score(&Country::new("X", 1)), 55);
}

#[test]
fn urbanization_without_area_is_neutral() {
    let c = Country::new("X", 1_000_000);
    assert_eq!(urbanization_score(&c), 50);
    assert_eq!(sustainability_score(&c), 50);
}

#[test]
fn life_index_matches_individual_scores() {
    let macau = Country::new("Macau", 649_342).with_region("Asia").with_area(30.0);
    let idx = LifeIndex::compute(&macau, 1_380_004_385);
    assert_eq!(idx.population, 0);
    assert_eq!(idx.income, 55);
    assert_eq!(idx.urbanization, 85);
    assert_eq!(idx.sustainability, 15);
    assert_eq!(idx.urbanization + idx.sustainability, 100);
}
