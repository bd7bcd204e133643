//! Property tests for the continent/category filters.

use crate::domain::filters::{filter_by_category, filter_by_continent};
use crate::domain::{
    City, CityStats, Continent, ContinentFilter, FilterCategory, FilterState, Safety, Weather,
};
use proptest::prelude::*;

const IDS: [&str; 16] = [
    "c00", "c01", "c02", "c03", "c04", "c05", "c06", "c07", "c08", "c09", "c10", "c11", "c12",
    "c13", "c14", "c15",
];

fn arb_city() -> impl Strategy<Value = City> {
    (
        prop::sample::select(Continent::ALL.to_vec()),
        1500u32..2500,
        -5i32..40,
        0u32..60,
        0u32..120,
        prop::sample::select(vec![Safety::Low, Safety::Medium, Safety::High]),
    )
        .prop_map(|(continent, cost, temperature, internet, aqi, safety)| City {
            id: "",
            name: "Generated",
            country: "Proptest",
            continent,
            cost: f64::from(cost),
            temperature: f64::from(temperature),
            feels_like: None,
            internet_speed: f64::from(internet),
            air_quality: f64::from(aqi),
            nomad_score: 3.0,
            image: "",
            safety,
            weather: Weather::Mild,
        })
}

/// Up to sixteen cities with distinct ids.
fn arb_cities() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec(arb_city(), 0..IDS.len()).prop_map(|cities| {
        cities
            .into_iter()
            .zip(IDS)
            .map(|(city, id)| City { id, ..city })
            .collect()
    })
}

fn arb_category() -> impl Strategy<Value = FilterCategory> {
    prop::sample::select(FilterCategory::ALL.to_vec())
}

// The thresholds restated independently of `FilterCategory::matches`.
fn expected(category: FilterCategory, c: &City) -> bool {
    match category {
        FilterCategory::Cheap => c.cost < 2000.0,
        FilterCategory::Weather => c.temperature >= 20.0 && c.temperature <= 28.0,
        FilterCategory::Internet => c.internet_speed >= 20.0,
        FilterCategory::Safety => c.safety == Safety::High,
        FilterCategory::Air => c.air_quality < 50.0,
        FilterCategory::Warm => c.temperature >= 25.0,
    }
}

fn ids(cities: &[City]) -> Vec<&'static str> {
    cities.iter().map(|c| c.id).collect()
}

proptest! {
    #[test]
    fn all_continents_is_identity(cities in arb_cities()) {
        prop_assert_eq!(filter_by_continent(&cities, ContinentFilter::All), cities);
    }

    #[test]
    fn continent_filter_is_an_ordered_selection(
        cities in arb_cities(),
        continent in prop::sample::select(Continent::ALL.to_vec()),
    ) {
        let result = filter_by_continent(&cities, continent.into());
        let want: Vec<_> = cities.iter().filter(|c| c.continent == continent).map(|c| c.id).collect();

        prop_assert!(result.iter().all(|c| c.continent == continent));
        prop_assert_eq!(ids(&result), want);
    }

    #[test]
    fn category_keeps_exactly_the_matching_cities(
        cities in arb_cities(),
        category in arb_category(),
    ) {
        let result = filter_by_category(&cities, category);
        let want: Vec<_> = cities.iter().filter(|c| expected(category, c)).map(|c| c.id).collect();
        prop_assert_eq!(ids(&result), want);
    }

    #[test]
    fn category_composition_is_order_independent(
        cities in arb_cities(),
        a in arb_category(),
        b in arb_category(),
    ) {
        let ab = filter_by_category(&filter_by_category(&cities, a), b);
        let ba = filter_by_category(&filter_by_category(&cities, b), a);
        let both: Vec<_> = cities
            .iter()
            .filter(|c| expected(a, c) && expected(b, c))
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(ids(&ab), both.clone());
        prop_assert_eq!(ids(&ba), both);
        prop_assert!(ab.len() <= cities.len());
    }

    #[test]
    fn filter_state_applies_the_intersection(
        cities in arb_cities(),
        toggles in prop::collection::vec(arb_category(), 0..8),
        continent in prop::sample::select(
            ContinentFilter::options().collect::<Vec<_>>()
        ),
    ) {
        let mut state = FilterState::new();
        state.set_continent(continent);
        for category in toggles {
            state.toggle(category);
        }

        let want: Vec<_> = cities
            .iter()
            .filter(|c| continent.matches(c))
            .filter(|c| state.active().iter().all(|&cat| expected(cat, c)))
            .map(|c| c.id)
            .collect();

        let result = state.apply(&cities);
        prop_assert_eq!(ids(&result), want);
        prop_assert_eq!(CityStats::from_cities(&result).is_none(), result.is_empty());
    }
}
