// src/domain/stats.rs

use crate::domain::city::City;
use serde::Serialize;

/// Averages shown underneath the city grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStats {
    pub avg_cost: i64,
    pub avg_internet_speed: i64,
    pub avg_temperature: i64,
}

impl CityStats {
    /// `None` when there is nothing to average.
    pub fn from_cities(cities: &[City]) -> Option<Self> {
        if cities.is_empty() {
            return None;
        }

        let n = cities.len() as f64;
        let mean = |field: fn(&City) -> f64| cities.iter().map(field).sum::<f64>() / n;

        Some(CityStats {
            avg_cost: round_half_up(mean(|c| c.cost)),
            avg_internet_speed: round_half_up(mean(|c| c.internet_speed)),
            avg_temperature: round_half_up(mean(|c| c.temperature)),
        })
    }
}

// Halves round toward positive infinity, so -2.5 becomes -2.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}
