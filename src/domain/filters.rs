// src/domain/filters.rs

use crate::domain::city::{City, Continent, Safety, UnknownName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::form_urlencoded;

pub const CHEAP_MAX_COST: f64 = 2000.0;
pub const PLEASANT_MIN_TEMP: f64 = 20.0;
pub const PLEASANT_MAX_TEMP: f64 = 28.0;
pub const FAST_INTERNET_MIN_MBPS: f64 = 20.0;
pub const CLEAN_AIR_MAX_AQI: f64 = 50.0;
pub const WARM_MIN_TEMP: f64 = 25.0;

/// The fixed set of attribute filters offered as chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Cheap,
    Weather,
    Internet,
    Safety,
    Air,
    Warm,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 6] = [
        FilterCategory::Cheap,
        FilterCategory::Weather,
        FilterCategory::Internet,
        FilterCategory::Safety,
        FilterCategory::Air,
        FilterCategory::Warm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Cheap => "cheap",
            FilterCategory::Weather => "weather",
            FilterCategory::Internet => "internet",
            FilterCategory::Safety => "safety",
            FilterCategory::Air => "air",
            FilterCategory::Warm => "warm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Cheap => "Low cost of living",
            FilterCategory::Weather => "Good weather",
            FilterCategory::Internet => "Fast internet",
            FilterCategory::Safety => "Very safe",
            FilterCategory::Air => "Clean air",
            FilterCategory::Warm => "Warm climate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FilterCategory::Cheap => "Under $2,000/month",
            FilterCategory::Weather => "20-28°C",
            FilterCategory::Internet => "20+ Mbps",
            FilterCategory::Safety => "Safe neighbourhoods",
            FilterCategory::Air => "AQI under 50",
            FilterCategory::Warm => "25°C and above",
        }
    }

    pub fn matches(self, city: &City) -> bool {
        match self {
            FilterCategory::Cheap => city.cost < CHEAP_MAX_COST,
            FilterCategory::Weather => {
                (PLEASANT_MIN_TEMP..=PLEASANT_MAX_TEMP).contains(&city.temperature)
            }
            FilterCategory::Internet => city.internet_speed >= FAST_INTERNET_MIN_MBPS,
            FilterCategory::Safety => city.safety == Safety::High,
            FilterCategory::Air => city.air_quality < CLEAN_AIR_MAX_AQI,
            FilterCategory::Warm => city.temperature >= WARM_MIN_TEMP,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Continent selection: either every continent or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ContinentFilter {
    #[default]
    All,
    Only(Continent),
}

impl ContinentFilter {
    /// "All" followed by each continent, in chip order.
    pub fn options() -> impl Iterator<Item = ContinentFilter> {
        std::iter::once(ContinentFilter::All)
            .chain(Continent::ALL.into_iter().map(ContinentFilter::Only))
    }

    pub fn name(self) -> &'static str {
        match self {
            ContinentFilter::All => "All",
            ContinentFilter::Only(c) => c.name(),
        }
    }

    pub fn matches(self, city: &City) -> bool {
        match self {
            ContinentFilter::All => true,
            ContinentFilter::Only(c) => city.continent == c,
        }
    }
}

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContinentFilter {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(ContinentFilter::All);
        }
        s.parse().map(ContinentFilter::Only)
    }
}

impl From<Continent> for ContinentFilter {
    fn from(c: Continent) -> Self {
        ContinentFilter::Only(c)
    }
}

/// Cities on the selected continent, in their original order.
pub fn filter_by_continent(cities: &[City], continent: ContinentFilter) -> Vec<City> {
    match continent {
        ContinentFilter::All => cities.to_vec(),
        ContinentFilter::Only(_) => cities
            .iter()
            .filter(|city| continent.matches(city))
            .cloned()
            .collect(),
    }
}

/// Cities satisfying a single category predicate, in their original order.
pub fn filter_by_category(cities: &[City], category: FilterCategory) -> Vec<City> {
    cities
        .iter()
        .filter(|city| category.matches(city))
        .cloned()
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("unknown continent: {0}")]
    UnknownContinent(String),
    #[error("unknown filter: {0}")]
    UnknownCategory(String),
}

/// Caller-owned selection of chips. The catalog never sees this directly;
/// it is only ever handed to [`FilterState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Vec<FilterCategory>,
    continent: ContinentFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active categories in the order they were switched on.
    pub fn active(&self) -> &[FilterCategory] {
        &self.active
    }

    pub fn continent(&self) -> ContinentFilter {
        self.continent
    }

    pub fn is_active(&self, category: FilterCategory) -> bool {
        self.active.contains(&category)
    }

    pub fn toggle(&mut self, category: FilterCategory) {
        if let Some(pos) = self.active.iter().position(|c| *c == category) {
            self.active.remove(pos);
        } else {
            self.active.push(category);
        }
    }

    pub fn set_continent(&mut self, continent: ContinentFilter) {
        self.continent = continent;
    }

    pub fn clear_filters(&mut self) {
        self.active.clear();
    }

    /// Copy of this state with one category flipped.
    pub fn toggled(&self, category: FilterCategory) -> Self {
        let mut next = self.clone();
        next.toggle(category);
        next
    }

    /// Copy of this state with every category switched off.
    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.clear_filters();
        next
    }

    /// Copy of this state with a different continent selected.
    pub fn with_continent(&self, continent: ContinentFilter) -> Self {
        let mut next = self.clone();
        next.set_continent(continent);
        next
    }

    /// Continent filter first, then each active category in insertion order.
    pub fn apply(&self, cities: &[City]) -> Vec<City> {
        let by_continent = filter_by_continent(cities, self.continent);
        tracing::debug!(
            continent = %self.continent,
            remaining = by_continent.len(),
            "applied continent filter"
        );

        self.active
            .iter()
            .fold(by_continent, |acc, &category| {
                let narrowed = filter_by_category(&acc, category);
                tracing::debug!(%category, remaining = narrowed.len(), "applied category filter");
                narrowed
            })
    }

    /// Parses `continent=<name>&filter=<category>&filter=...`.
    ///
    /// Other keys are ignored; repeated categories collapse to one.
    pub fn from_query(query: &str) -> Result<Self, FilterParseError> {
        let mut state = FilterState::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "continent" => {
                    let continent: ContinentFilter = value
                        .parse()
                        .map_err(|UnknownName(name)| FilterParseError::UnknownContinent(name))?;
                    state.set_continent(continent);
                }
                "filter" => {
                    let category: FilterCategory = value
                        .parse()
                        .map_err(|UnknownName(name)| FilterParseError::UnknownCategory(name))?;
                    if !state.is_active(category) {
                        state.active.push(category);
                    }
                }
                _ => {}
            }
        }

        Ok(state)
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let ContinentFilter::Only(continent) = self.continent {
            serializer.append_pair("continent", continent.name());
        }
        for category in &self.active {
            serializer.append_pair("filter", category.as_str());
        }
        serializer.finish()
    }
}
