// src/catalog/mod.rs

mod data;

use crate::domain::{City, ContinentFilter};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate city id: {0}")]
    DuplicateId(&'static str),
    #[error("nomad score {score} out of range for {id}")]
    ScoreOutOfRange { id: &'static str, score: f64 },
    #[error("negative {field} for {id}")]
    NegativeValue { id: &'static str, field: &'static str },
}

/// Read-only, ordered set of cities. Loaded once and shared by reference.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    cities: &'static [City],
}

impl Catalog {
    pub fn new(cities: &'static [City]) -> Self {
        Self { cities }
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(data::CITIES)
    }

    /// Every city, in load order.
    pub fn all(&self) -> &'static [City] {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn continent_counts(&self) -> ContinentCounts {
        let mut counts: BTreeMap<ContinentFilter, usize> =
            ContinentFilter::options().map(|option| (option, 0)).collect();

        for city in self.cities {
            *counts.entry(ContinentFilter::Only(city.continent)).or_default() += 1;
        }
        counts.insert(ContinentFilter::All, self.cities.len());

        ContinentCounts { counts }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();

        for city in self.cities {
            if !seen.insert(city.id) {
                return Err(CatalogError::DuplicateId(city.id));
            }
            if !(0.0..=5.0).contains(&city.nomad_score) {
                return Err(CatalogError::ScoreOutOfRange {
                    id: city.id,
                    score: city.nomad_score,
                });
            }
            for (field, value) in [
                ("cost", city.cost),
                ("internet speed", city.internet_speed),
                ("air quality", city.air_quality),
            ] {
                if value < 0.0 {
                    return Err(CatalogError::NegativeValue { id: city.id, field });
                }
            }
        }

        Ok(())
    }
}

/// Number of cities per continent, with `All` holding the catalog size.
/// Continents without cities are present with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentCounts {
    counts: BTreeMap<ContinentFilter, usize>,
}

impl ContinentCounts {
    pub fn get(&self, filter: ContinentFilter) -> usize {
        self.counts.get(&filter).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContinentFilter, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

impl Serialize for ContinentCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (filter, count) in self.iter() {
            map.serialize_entry(filter.name(), &count)?;
        }
        map.end()
    }
}
